//! Fixed-rate sensor polling.

pub mod poller;
pub mod ticker;

pub use poller::{PollingLoop, TickReport};
pub use ticker::{Ticker, POLL_PERIOD, POLL_RATE_HZ};

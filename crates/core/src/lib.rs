#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod model;
pub mod sequencer;
pub mod session;
pub mod time;

pub use error::Error;
pub use matcher::matches;
pub use time::Clock;

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod rank;
pub mod report;
pub mod scanner;
pub mod tally;

pub use error::{Error, Result};

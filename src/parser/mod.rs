pub mod parser;

pub use parser::{parse, LineParser, LOG_PATTERN};

pub mod scanner;

pub use scanner::{scan, Scanner};

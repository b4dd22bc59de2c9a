pub mod report;

pub use report::{render, run, Report};

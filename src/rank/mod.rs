pub mod rank;

pub use rank::{top_k, RankedHeap};

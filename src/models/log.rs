use std::cmp::Ordering;
use std::fmt;

/// The fields pulled out of one access log line. Both are empty when the
/// line did not have the expected shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntry {
    pub ip: String,
    pub path: String,
}

impl LogEntry {
    pub fn is_unmatched(&self) -> bool {
        self.ip.is_empty() && self.path.is_empty()
    }
}

/// A tally key with its count. Ordered by count, then key, so a
/// `BinaryHeap<RankedEntry>` pops the most frequent key first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        RankedEntry {
            key: key.into(),
            count,
        }
    }
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.key, self.count)
    }
}

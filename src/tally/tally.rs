use std::collections::hash_map::{self, HashMap};

/// Occurrence counts per distinct key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<String, u64>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` with a count of 1, or bumps its existing count.
    pub fn increment(&mut self, key: &str) {
        // avoid allocating a String when the key is already known
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, &count)| (key.as_str(), count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(keys: I) -> Self {
        let mut tally = Tally::new();
        for key in keys {
            tally.increment(key);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_increment_inserts_one() {
        let mut tally = Tally::new();
        assert_eq!(tally.get("a"), None);

        tally.increment("a");
        assert_eq!(tally.get("a"), Some(1));
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn repeated_increments_count_up() {
        let mut tally = Tally::new();
        for _ in 0..5 {
            tally.increment("10.0.0.1");
        }

        assert_eq!(tally.get("10.0.0.1"), Some(5));
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn empty_key_is_a_regular_key() {
        let tally: Tally = ["", "", "x"].into_iter().collect();

        assert_eq!(tally.get(""), Some(2));
        assert_eq!(tally.get("x"), Some(1));
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn iter_visits_every_key_once() {
        let tally: Tally = ["a", "b", "a", "c"].into_iter().collect();
        let mut seen: Vec<(&str, u64)> = tally.iter().collect();
        seen.sort();

        assert_eq!(seen, vec![("a", 2), ("b", 1), ("c", 1)]);
    }
}

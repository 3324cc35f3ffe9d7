//! Deduplicating collector preserving first-seen order.

use std::collections::HashSet;

use super::canonical::CanonicalEntry;

/// Owns the membership set and ordered output for one run.
///
/// Output order is first-seen order: the order in which distinct canonical
/// strings first appear scanning the input top to bottom. The membership set
/// is per-run state; construct a fresh collector for every run.
#[derive(Debug, Default)]
pub struct Collector {
    seen: HashSet<String>,
    accepted: Vec<CanonicalEntry>,
    duplicates: usize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a canonical entry. Returns false if it was a duplicate, which
    /// is counted but never reported as an error.
    pub fn push(&mut self, entry: CanonicalEntry) -> bool {
        if self.seen.contains(&entry.text) {
            self.duplicates += 1;
            return false;
        }
        self.seen.insert(entry.text.clone());
        self.accepted.push(entry);
        true
    }

    /// Consume the collector, yielding the ordered unique entries and the
    /// duplicate count.
    pub fn into_parts(self) -> (Vec<CanonicalEntry>, usize) {
        (self.accepted, self.duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> CanonicalEntry {
        CanonicalEntry {
            text: text.to_string(),
            wildcard: text.starts_with("*."),
        }
    }

    #[test]
    fn first_seen_order_is_kept() {
        let mut c = Collector::new();
        for t in ["b.com", "a.com", "c.com", "a.com"] {
            c.push(entry(t));
        }
        let (accepted, dups) = c.into_parts();
        let texts: Vec<&str> = accepted.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["b.com", "a.com", "c.com"]);
        assert_eq!(dups, 1);
    }

    #[test]
    fn duplicates_counted_not_stored() {
        let mut c = Collector::new();
        assert!(c.push(entry("x.com")));
        assert!(!c.push(entry("x.com")));
        assert!(!c.push(entry("x.com")));
        let (accepted, dups) = c.into_parts();
        assert_eq!(accepted.len(), 1);
        assert_eq!(dups, 2);
    }

    #[test]
    fn fresh_collector_has_no_memory() {
        let mut c = Collector::new();
        c.push(entry("x.com"));
        drop(c);
        let mut c2 = Collector::new();
        assert!(c2.push(entry("x.com")));
    }
}

/// One emitted match: exactly one `(timestamp, payload)` per topic, all of
/// them within the configured window of each other.
///
/// The representative timestamp is the minimum timestamp across the group's
/// members.
pub struct SyncGroup<T> {
    representative_timestamp_ns: u64,
    entries: Vec<(String, u64, T)>,
}

impl<T> SyncGroup<T> {
    pub(crate) fn new(entries: Vec<(String, u64, T)>) -> Self {
        let representative_timestamp_ns = entries
            .iter()
            .map(|(_, ts, _)| *ts)
            .min()
            .expect("a SyncGroup always has at least one member");
        SyncGroup {
            representative_timestamp_ns,
            entries,
        }
    }

    /// The minimum timestamp across the group's members.
    pub fn representative_timestamp_ns(&self) -> u64 {
        self.representative_timestamp_ns
    }

    /// Number of topics in the group — always equal to
    /// [`Synchronizer::topic_count`](crate::Synchronizer::topic_count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, topic: &str) -> Option<&T> {
        self.entries.iter().find(|(t, _, _)| t == topic).map(|(_, _, p)| p)
    }

    pub fn timestamp_of(&self, topic: &str) -> Option<u64> {
        self.entries.iter().find(|(t, _, _)| t == topic).map(|(_, ts, _)| *ts)
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _, _)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64, &T)> {
        self.entries.iter().map(|(t, ts, p)| (t.as_str(), *ts, p))
    }
}

impl<T> IntoIterator for SyncGroup<T> {
    type Item = (String, u64, T);
    type IntoIter = std::vec::IntoIter<(String, u64, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representative_timestamp_is_the_minimum() {
        let group = SyncGroup::new(vec![
            ("a".to_string(), 30, "x"),
            ("b".to_string(), 10, "y"),
            ("c".to_string(), 20, "z"),
        ]);
        assert_eq!(group.representative_timestamp_ns(), 10);
    }

    #[test]
    fn get_finds_by_topic() {
        let group = SyncGroup::new(vec![("a".to_string(), 1, "x"), ("b".to_string(), 2, "y")]);
        assert_eq!(group.get("a"), Some(&"x"));
        assert_eq!(group.get("b"), Some(&"y"));
        assert_eq!(group.get("z"), None);
    }

    #[test]
    fn into_iter_yields_owned_entries() {
        let group = SyncGroup::new(vec![("a".to_string(), 1, "x".to_string())]);
        let collected: Vec<_> = group.into_iter().collect();
        assert_eq!(collected, vec![("a".to_string(), 1, "x".to_string())]);
    }
}

use std::collections::HashMap;

use crate::error::Error;

/// Fixed bijection between topic name and internal stream index, set once
/// at construction and never mutated afterwards.
pub(crate) struct TopicRegistry {
    names: Vec<String>,
    index_of: HashMap<String, usize>,
}

impl TopicRegistry {
    /// Builds a registry from an ordered, unique, non-empty list of names.
    ///
    /// Order is preserved: `names()[i]` is the topic at stream index `i`.
    pub(crate) fn new(names: Vec<String>) -> Result<Self, Error> {
        if names.is_empty() {
            return Err(Error::InvalidArgument("topic list must not be empty".into()));
        }

        let mut index_of = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(Error::InvalidArgument("topic name must not be empty".into()));
            }
            if index_of.insert(name.clone(), i).is_some() {
                return Err(Error::InvalidArgument(format!("duplicate topic name: {name}")));
            }
        }

        Ok(TopicRegistry { names, index_of })
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.index_of.get(name).copied()
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

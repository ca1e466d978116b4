//! Shared, lock-protected prefix index.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::index::prefix_index::PrefixIndex;

/// A [`PrefixIndex`] behind a reader/writer lock.
///
/// Clones share the same underlying index. Inserts take the write lock;
/// lookups and completions take the read lock, so many readers may query
/// while no insert is in progress.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixIndex {
    inner: Arc<RwLock<PrefixIndex>>,
}

impl SharedPrefixIndex {
    /// Wrap an existing index.
    pub fn new(index: PrefixIndex) -> Self {
        SharedPrefixIndex {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn insert<S: AsRef<str> + Into<String>>(&self, word: S) -> bool {
        self.inner.write().insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner.read().contains(word)
    }

    pub fn complete(&self, prefix: &str) -> Option<Vec<String>> {
        self.inner.read().complete(prefix)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current index contents.
    pub fn snapshot(&self) -> PrefixIndex {
        self.inner.read().clone()
    }
}

impl From<PrefixIndex> for SharedPrefixIndex {
    fn from(index: PrefixIndex) -> Self {
        Self::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedPrefixIndex::default();
        let other = shared.clone();

        assert!(shared.insert("Einstein"));
        assert!(other.contains("Einstein"));
        assert_eq!(other.complete("Ein"), Some(vec!["Einstein".to_string()]));
        assert_eq!(other.complete("E"), None);
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let shared = SharedPrefixIndex::new(PrefixIndex::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        shared.insert(format!("word-{t}-{i:03}"));
                        let _ = shared.complete("word");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 200);
        let matches = shared.complete("word-2-").unwrap();
        assert_eq!(matches.len(), 50);
        assert!(matches.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(shared.snapshot().len(), 200);
    }
}

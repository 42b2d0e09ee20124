use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::bucket::Bucket;

/// Registry of named buckets.
///
/// Cloning a `Stash` is cheap and yields another handle onto the same
///  registry. Names are listed in the order the buckets were created.
#[derive(Debug, Clone, Default)]
pub struct Stash {
    inner: Arc<RwLock<StashInner>>,
}

#[derive(Debug, Default)]
struct StashInner {
    /// name -> bucket
    buckets: HashMap<String, Arc<Bucket>>,
    /// bucket names in creation order
    order: Vec<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StashError {
    #[error("bucket '{0}' already exists")]
    DuplicateBucket(String),
    #[error("no bucket named '{0}'")]
    NotFound(String),
}

impl Stash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bucket under `name`.
    ///
    /// Fails with [`StashError::DuplicateBucket`] rather than replacing
    ///  an existing bucket.
    pub fn add(&self, name: impl Into<String>) -> Result<Arc<Bucket>, StashError> {
        let name = name.into();
        let mut inner = self.inner.write();

        if inner.buckets.contains_key(&name) {
            return Err(StashError::DuplicateBucket(name));
        }

        let bucket = Arc::new(Bucket::new());
        inner.buckets.insert(name.clone(), bucket.clone());
        inner.order.push(name);
        Ok(bucket)
    }

    /// Handle onto the bucket registered under `name`.
    ///
    /// The handle is meant to live for a single request. If the bucket is
    ///  deleted while the handle is held, further calls on it fail with
    ///  [`BucketError::Gone`](crate::bucket::BucketError::Gone).
    pub fn get(&self, name: &str) -> Result<Arc<Bucket>, StashError> {
        self.inner
            .read()
            .buckets
            .get(name)
            .cloned()
            .ok_or_else(|| StashError::NotFound(name.to_string()))
    }

    /// Remove the bucket registered under `name` and release its values.
    pub fn delete(&self, name: &str) -> Result<(), StashError> {
        let bucket = {
            let mut inner = self.inner.write();
            let bucket = inner
                .buckets
                .remove(name)
                .ok_or_else(|| StashError::NotFound(name.to_string()))?;
            inner.order.retain(|n| n != name);
            bucket
        };

        // outside the registry lock: waits only on this bucket's readers/writers
        bucket.retire();
        tracing::debug!(bucket = name, "bucket retired");
        Ok(())
    }

    pub fn list_names(&self) -> Vec<String> {
        self.inner.read().order.clone()
    }

    /// Handles onto every registered bucket, paired with their names.
    pub fn list_buckets(&self) -> Vec<(String, Arc<Bucket>)> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|name| {
                inner
                    .buckets
                    .get(name)
                    .map(|bucket| (name.clone(), bucket.clone()))
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().buckets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::BucketError;

    #[test]
    fn test_names_follow_creation_order() {
        let stash = Stash::new();
        for name in ["zeta", "alpha", "mu"] {
            stash.add(name).unwrap();
        }
        assert_eq!(stash.list_names(), vec!["zeta", "alpha", "mu"]);

        stash.delete("alpha").unwrap();
        assert_eq!(stash.list_names(), vec!["zeta", "mu"]);
        assert_eq!(stash.len(), 2);
    }

    #[test]
    fn test_duplicate_bucket_keeps_original() {
        let stash = Stash::new();
        let bucket = stash.add("users").unwrap();
        bucket.add("1", "alice").unwrap();

        assert_eq!(
            stash.add("users").unwrap_err(),
            StashError::DuplicateBucket("users".to_string())
        );
        assert_eq!(stash.get("users").unwrap().get("1").unwrap(), "alice");
    }

    #[test]
    fn test_stale_handle_after_delete() {
        let stash = Stash::new();
        let handle = stash.add("users").unwrap();
        handle.add("1", "alice").unwrap();

        stash.delete("users").unwrap();
        assert!(!stash.contains("users"));
        assert_eq!(handle.get("1").unwrap_err(), BucketError::Gone);

        // a fresh bucket under the same name is unrelated to the stale handle
        let fresh = stash.add("users").unwrap();
        assert!(fresh.is_empty());
        assert_eq!(handle.add("2", "bob").unwrap_err(), BucketError::Gone);
        assert!(fresh.get("2").is_err());
    }

    #[test]
    fn test_list_buckets_pairs_names() {
        let stash = Stash::new();
        stash.add("a").unwrap().add("k", "v").unwrap();
        stash.add("b").unwrap();

        let listed = stash.list_buckets();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].0, "a");
        assert_eq!(listed[0].1.len(), 1);
        assert_eq!(listed[1].0, "b");
        assert!(listed[1].1.is_empty());
    }

    #[test]
    fn test_clones_share_registry() {
        let stash = Stash::new();
        let other = stash.clone();
        stash.add("shared").unwrap();
        assert!(other.contains("shared"));
        other.delete("shared").unwrap();
        assert!(stash.is_empty());
    }
}

use std::collections::HashMap;

use parking_lot::RwLock;

/// An ordered, key-indexed collection of string values.
///
/// Values are stored in insertion order. Every value is reachable by its key
/// in O(1) through the index, and by position through [`Bucket::range`].
/// All access goes through the bucket's own reader/writer lock, so a shared
/// handle (`Arc<Bucket>`) can be used from any number of tasks at once.
#[derive(Debug, Default)]
pub struct Bucket {
    inner: RwLock<BucketInner>,
}

#[derive(Debug, Default)]
struct BucketInner {
    /// Stored values, in insertion order
    values: Vec<String>,
    /// key -> position in `values`
    index: HashMap<String, usize>,
    /// position -> key, the reverse of `index`
    keys: Vec<String>,
    /// Set once the owning stash has dropped this bucket
    retired: bool,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BucketError {
    #[error("value with key '{0}' already exists")]
    DuplicateKey(String),
    #[error("no value with key '{0}'")]
    NotFound(String),
    /// start, stop, length at the time of the call
    #[error("invalid range [{0}, {1}) for bucket of length {2}")]
    InvalidRange(i64, i64, usize),
    #[error("bucket has been deleted")]
    Gone,
}

impl BucketInner {
    fn ensure_live(&self) -> Result<(), BucketError> {
        if self.retired {
            return Err(BucketError::Gone);
        }
        Ok(())
    }

    /// Resolve a key to a position, guarding against an index that
    ///  points past the end of `values`.
    fn position(&self, key: &str) -> Result<usize, BucketError> {
        self.ensure_live()?;
        match self.index.get(key) {
            Some(&position) if position < self.values.len() => Ok(position),
            Some(&position) => {
                tracing::error!(
                    key,
                    position,
                    len = self.values.len(),
                    "bucket index points out of bounds"
                );
                Err(BucketError::NotFound(key.to_string()))
            }
            None => Err(BucketError::NotFound(key.to_string())),
        }
    }
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `key`.
    ///
    /// Fails with [`BucketError::DuplicateKey`] if the key is already
    ///  present, in which case the bucket is left untouched.
    pub fn add(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), BucketError> {
        let key = key.into();
        let mut inner = self.inner.write();
        inner.ensure_live()?;

        if inner.index.contains_key(&key) {
            return Err(BucketError::DuplicateKey(key));
        }

        let position = inner.values.len();
        inner.values.push(value.into());
        inner.keys.push(key.clone());
        inner.index.insert(key, position);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String, BucketError> {
        let inner = self.inner.read();
        let position = inner.position(key)?;
        Ok(inner.values[position].clone())
    }

    /// Copy of every value in insertion order.
    ///
    /// A retired bucket has no values left, so this returns an empty vector.
    pub fn get_all(&self) -> Vec<String> {
        self.inner.read().values.clone()
    }

    /// Copy of the `(key, value)` pairs in insertion order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let inner = self.inner.read();
        inner
            .keys
            .iter()
            .cloned()
            .zip(inner.values.iter().cloned())
            .collect()
    }

    /// Copy of the half-open slice `[start, stop)`.
    ///
    /// A `stop` of zero means "to the end", resolved against the length at
    ///  the time of the call. Negative bounds and a `stop` past the end are
    ///  rejected; a `start` at or past the resolved `stop` yields an empty
    ///  slice.
    pub fn range(&self, start: i64, stop: i64) -> Result<Vec<String>, BucketError> {
        let inner = self.inner.read();
        inner.ensure_live()?;

        let len = inner.values.len();
        let invalid = || BucketError::InvalidRange(start, stop, len);

        let start = usize::try_from(start).map_err(|_| invalid())?;
        let stop = usize::try_from(stop).map_err(|_| invalid())?;
        if stop > len {
            return Err(invalid());
        }

        let stop = if stop == 0 { len } else { stop };
        if start >= stop {
            return Ok(Vec::new());
        }

        Ok(inner.values[start..stop].to_vec())
    }

    /// Overwrite the value stored under `key`, keeping its position.
    pub fn update(&self, key: &str, value: impl Into<String>) -> Result<(), BucketError> {
        let mut inner = self.inner.write();
        let position = inner.position(key)?;
        inner.values[position] = value.into();
        Ok(())
    }

    /// Remove the value stored under `key`.
    ///
    /// Later values shift left by one, so every key positioned after the
    ///  removed one has its index entry decremented to keep the index in
    ///  step with `values`.
    pub fn delete(&self, key: &str) -> Result<(), BucketError> {
        let mut inner = self.inner.write();
        let position = inner.position(key)?;

        inner.values.remove(position);
        inner.keys.remove(position);
        inner.index.remove(key);

        let BucketInner { index, keys, .. } = &mut *inner;
        for shifted in &keys[position..] {
            if let Some(slot) = index.get_mut(shifted) {
                *slot -= 1;
            }
        }

        Ok(())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        let inner = self.inner.read();
        !inner.retired && inner.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the owning stash has dropped this bucket.
    pub fn is_retired(&self) -> bool {
        self.inner.read().retired
    }

    /// Release every value and fail all further operations with
    ///  [`BucketError::Gone`].
    ///
    /// Takes the write lock, so this waits for in-flight operations
    ///  on the bucket to finish.
    pub(crate) fn retire(&self) {
        let mut inner = self.inner.write();
        inner.retired = true;
        inner.values = Vec::new();
        inner.keys = Vec::new();
        inner.index = HashMap::new();
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        let inner = self.inner.read();
        assert_eq!(inner.values.len(), inner.keys.len());
        assert_eq!(inner.values.len(), inner.index.len());
        for (key, &position) in &inner.index {
            assert!(position < inner.values.len(), "{key} out of bounds");
            assert_eq!(&inner.keys[position], key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Bucket {
        let bucket = Bucket::new();
        bucket.add("a", "alpha").unwrap();
        bucket.add("b", "beta").unwrap();
        bucket.add("c", "gamma").unwrap();
        bucket
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let bucket = abc();
        assert_eq!(bucket.get_all(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(bucket.len(), 3);
        bucket.check_invariants();
    }

    #[test]
    fn test_duplicate_key_leaves_bucket_unchanged() {
        let bucket = abc();
        let err = bucket.add("b", "other").unwrap_err();
        assert_eq!(err, BucketError::DuplicateKey("b".to_string()));
        assert_eq!(bucket.get("b").unwrap(), "beta");
        assert_eq!(bucket.len(), 3);
        bucket.check_invariants();
    }

    #[test]
    fn test_delete_middle_reindexes_tail() {
        let bucket = abc();
        bucket.delete("b").unwrap();

        assert_eq!(bucket.get("a").unwrap(), "alpha");
        assert_eq!(bucket.get("c").unwrap(), "gamma");
        assert_eq!(bucket.get_all(), vec!["alpha", "gamma"]);
        bucket.check_invariants();

        // the freed key can be reused and lands at the end
        bucket.add("b", "beta again").unwrap();
        assert_eq!(bucket.get_all(), vec!["alpha", "gamma", "beta again"]);
        bucket.check_invariants();
    }

    #[test]
    fn test_delete_last_then_update_survivors() {
        let bucket = abc();
        bucket.delete("c").unwrap();
        bucket.update("a", "ALPHA").unwrap();
        bucket.update("b", "BETA").unwrap();
        assert_eq!(
            bucket.entries(),
            vec![
                ("a".to_string(), "ALPHA".to_string()),
                ("b".to_string(), "BETA".to_string()),
            ]
        );
        bucket.check_invariants();
    }

    #[test]
    fn test_range_start_past_stop_is_empty() {
        let bucket = abc();
        assert!(bucket.range(2, 1).unwrap().is_empty());
        assert!(bucket.range(3, 0).unwrap().is_empty());
        assert!(bucket.range(7, 0).unwrap().is_empty());
        assert_eq!(bucket.range(1, 3).unwrap(), vec!["beta", "gamma"]);
    }

    #[test]
    fn test_range_rejects_negative_stop() {
        let bucket = abc();
        assert_eq!(
            bucket.range(0, -1).unwrap_err(),
            BucketError::InvalidRange(0, -1, 3)
        );
    }

    #[test]
    fn test_range_on_empty_bucket() {
        let bucket = Bucket::new();
        assert!(bucket.range(0, 0).unwrap().is_empty());
        assert!(bucket.range(0, 1).is_err());
    }

    #[test]
    fn test_retired_bucket_is_gone() {
        let bucket = abc();
        bucket.retire();

        assert!(bucket.is_retired());
        assert!(bucket.is_empty());
        assert_eq!(bucket.get("a").unwrap_err(), BucketError::Gone);
        assert_eq!(bucket.add("d", "delta").unwrap_err(), BucketError::Gone);
        assert_eq!(bucket.update("a", "x").unwrap_err(), BucketError::Gone);
        assert_eq!(bucket.delete("a").unwrap_err(), BucketError::Gone);
        assert_eq!(bucket.range(0, 0).unwrap_err(), BucketError::Gone);
        assert!(!bucket.contains_key("a"));
    }
}

/**
 * Ordered, key-indexed container of string values.
 *  Values keep their insertion order and are
 *  addressable both by key and by position.
 */
pub mod bucket;
/**
 * Registry of named buckets, the process-wide
 *  state the HTTP layer operates on.
 */
pub mod stash;

pub mod prelude {
    pub use crate::bucket::{Bucket, BucketError};
    pub use crate::stash::{Stash, StashError};
}

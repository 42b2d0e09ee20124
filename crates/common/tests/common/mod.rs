//! Shared test utilities for bucket and stash tests
#![allow(dead_code)]

use std::sync::Arc;

use common::prelude::{Bucket, Stash};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Set up a stash holding a single bucket named `name`
pub fn setup_stash(name: &str) -> (Stash, Arc<Bucket>) {
    init_tracing();
    let stash = Stash::new();
    let bucket = stash.add(name).unwrap();
    (stash, bucket)
}

/// Fill a bucket with `(key, value)` pairs in order
pub fn fill(bucket: &Bucket, pairs: &[(&str, &str)]) {
    for (key, value) in pairs {
        bucket.add(*key, *value).unwrap();
    }
}

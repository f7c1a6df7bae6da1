//! Registry build errors.

use crate::registry::RegistrySource;

/// Errors from building a registry out of a raw batch.
///
/// Per-record problems (missing id, malformed pricing) are recovered inside
/// the builder and never surface here; only a batch with zero usable records
/// is a failure.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// No valid records survived filtering. For an `api` feed this almost
    /// always means an upstream outage rather than an empty catalog.
    // Named `feed` rather than `source`: thiserror reserves that name for
    // the error cause chain, and this is provenance, not a cause.
    #[error("no valid model records in {feed} feed ({rejected} rejected)")]
    EmptyUpstream {
        feed: RegistrySource,
        rejected: usize,
    },
}

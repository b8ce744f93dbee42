//! Content stamps used to decide whether a collection needs reindexing.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StampError {
    #[error("failed to encode record {index}: {source}")]
    Encode {
        index: usize,
        #[source]
        source: postcard::Error,
    },
}

/// Digest of a collection's full content, in order.
///
/// Two snapshots share a stamp only if they hold the same records with the
/// same field values in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionStamp(blake3::Hash);

impl CollectionStamp {
    pub fn of<R: Serialize>(items: &[R]) -> Result<Self, StampError> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(items.len() as u64).to_le_bytes());

        for (index, item) in items.iter().enumerate() {
            let bytes =
                postcard::to_allocvec(item).map_err(|source| StampError::Encode { index, source })?;
            hasher.update(&(bytes.len() as u64).to_le_bytes());
            hasher.update(&bytes);
        }

        Ok(Self(hasher.finalize()))
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }
}

impl fmt::Display for CollectionStamp {
    /// Short form for logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex()[..12])
    }
}

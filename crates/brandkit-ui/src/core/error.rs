//! Error types for personalization storage and preset handling.

use thiserror::Error;

/// Failure reported by a [`KeyValueStore`](crate::core::ports::KeyValueStore) write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store refused the value (quota exceeded, storage disabled).
    #[error("storage rejected write for '{key}': {detail}")]
    Write {
        /// Key that was being written.
        key: String,
        /// Message reported by the backing store.
        detail: String,
    },
}

/// Primary error type for personalization operations.
#[derive(Debug, Error)]
pub enum PersonalizationError {
    /// A stored value is not JSON or does not fit the expected record shape.
    #[error("stored value under '{key}' does not match the expected record shape")]
    Corrupt {
        /// Storage key holding the malformed value.
        key: &'static str,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// A value could not be encoded to JSON.
    #[error("failed to encode value for '{key}'")]
    Encode {
        /// Storage key the value was destined for.
        key: &'static str,
        /// Underlying encode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The backing store rejected a write.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A saved preset position does not exist.
    #[error("no saved setting at position {index} (list has {len})")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of saved presets.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{PersonalizationError, StoreError};

    #[test]
    fn messages_name_the_key_and_position() {
        let err = PersonalizationError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(err.to_string(), "no saved setting at position 3 (list has 1)");

        let err = PersonalizationError::from(StoreError::Write {
            key: "uiSavedSettingsList".to_string(),
            detail: "QuotaExceededError".to_string(),
        });
        assert!(err.to_string().contains("uiSavedSettingsList"));
        assert!(err.to_string().contains("QuotaExceededError"));
    }

    #[test]
    fn corrupt_keeps_parse_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        let err = PersonalizationError::Corrupt {
            key: "uiPersonalizationSettings",
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}

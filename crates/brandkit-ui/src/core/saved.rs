//! Saved preset list.
//!
//! # Design
//! - Position is the only identity; delete and apply take an index.
//! - Every change rewrites the whole list.

use crate::core::error::PersonalizationError;
use crate::core::modal::{AppliedPreset, ModalClose};
use crate::core::ports::Services;
use crate::core::records;
use crate::core::setting::Setting;

/// In-memory copy of the saved presets shown by the list view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedSettingsList {
    entries: Vec<Setting>,
}

impl SavedSettingsList {
    /// Read the saved presets; empty when none are stored.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalizationError::Corrupt`] when the stored list is malformed.
    pub fn load(services: Services<'_>) -> Result<Self, PersonalizationError> {
        let entries = records::read_saved_list(services.store, services.config)?;
        Ok(Self { entries })
    }

    /// Presets in stored order.
    #[must_use]
    pub const fn entries(&self) -> &[Setting] {
        self.entries.as_slice()
    }

    /// Number of presets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no presets are saved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove the preset at `index` and write the remaining list back.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalizationError::IndexOutOfRange`] without writing when
    /// `index` is past the end, or the store error when the write is rejected.
    pub fn delete(
        &mut self,
        index: usize,
        services: Services<'_>,
    ) -> Result<Setting, PersonalizationError> {
        let len = self.entries.len();
        if index >= len {
            return Err(PersonalizationError::IndexOutOfRange { index, len });
        }
        let removed = self.entries.remove(index);
        records::write_saved_list(services.store, services.config, &self.entries)?;
        Ok(removed)
    }

    /// Make the preset at `index` the active record and close with it.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalizationError::IndexOutOfRange`] when `index` is past
    /// the end, or the store error when the write is rejected.
    pub fn apply(
        &self,
        index: usize,
        services: Services<'_>,
    ) -> Result<ModalClose<AppliedPreset>, PersonalizationError> {
        let setting = self
            .entries
            .get(index)
            .cloned()
            .ok_or(PersonalizationError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })?;
        let config = services.config;
        records::write_current(services.store, config, &setting)?;
        services
            .notifier
            .notify(config.applied_notice.notice(config.notice_action));
        Ok(ModalClose::With(AppliedPreset { settings: setting }))
    }

    /// Close without choosing a preset.
    #[must_use]
    pub const fn close(&self) -> ModalClose<AppliedPreset> {
        ModalClose::Empty
    }
}

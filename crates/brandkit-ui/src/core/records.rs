//! JSON persistence of the active record and the saved preset list.
//!
//! Values are read and written wholesale; there is no partial update.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::config::PersonalizationConfig;
use crate::core::error::PersonalizationError;
use crate::core::ports::KeyValueStore;
use crate::core::setting::Setting;

fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &'static str,
) -> Result<Option<T>, PersonalizationError> {
    store
        .get(key)
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(|source| PersonalizationError::Corrupt { key, source })
}

fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &'static str,
    value: &T,
) -> Result<(), PersonalizationError> {
    let raw =
        serde_json::to_string(value).map_err(|source| PersonalizationError::Encode { key, source })?;
    store.set(key, &raw)?;
    Ok(())
}

/// Active branding record, if one has been stored.
///
/// # Errors
///
/// Returns [`PersonalizationError::Corrupt`] when the stored value is not a branding record.
pub fn read_current(
    store: &dyn KeyValueStore,
    config: &PersonalizationConfig,
) -> Result<Option<Setting>, PersonalizationError> {
    Ok(read_json::<Setting>(store, config.settings_key)?.map(Setting::normalized))
}

/// Overwrite the active branding record.
///
/// # Errors
///
/// Returns an error when the store rejects the write.
pub fn write_current(
    store: &dyn KeyValueStore,
    config: &PersonalizationConfig,
    setting: &Setting,
) -> Result<(), PersonalizationError> {
    write_json(store, config.settings_key, setting)
}

/// Delete the active branding record.
pub fn clear_current(store: &dyn KeyValueStore, config: &PersonalizationConfig) {
    store.remove(config.settings_key);
}

/// Saved presets in stored order; empty when nothing has been saved.
///
/// # Errors
///
/// Returns [`PersonalizationError::Corrupt`] when the stored value is not a JSON array of records.
pub fn read_saved_list(
    store: &dyn KeyValueStore,
    config: &PersonalizationConfig,
) -> Result<Vec<Setting>, PersonalizationError> {
    Ok(read_json(store, config.saved_list_key)?.unwrap_or_default())
}

/// Overwrite the saved preset list.
///
/// # Errors
///
/// Returns an error when the store rejects the write.
pub fn write_saved_list(
    store: &dyn KeyValueStore,
    config: &PersonalizationConfig,
    list: &[Setting],
) -> Result<(), PersonalizationError> {
    write_json(store, config.saved_list_key, list)
}

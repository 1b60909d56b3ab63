//! Branding record persisted as the active configuration and as saved presets.
//!
//! # Design
//! - The JSON shape is the storage contract: camelCase keys, flat strings.
//! - Missing or `null` fields are filled from [`Setting::default`] on read.
//! - Empty colors are normalized to the default so the theme always has a value.

use serde::{Deserialize, Deserializer, Serialize};

/// Accent color used when nothing has been chosen.
pub const DEFAULT_PRIMARY_COLOR: &str = "#3f51b5";

/// Branding triplet edited by the personalization dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Setting {
    /// Display name shown in the app header.
    #[serde(deserialize_with = "null_as_default")]
    pub brand_name: String,
    /// Logo image as a data URI, or empty when unset.
    #[serde(deserialize_with = "null_as_default")]
    pub logo: String,
    /// Accent color in `#RRGGBB` form.
    #[serde(deserialize_with = "null_as_default")]
    pub primary_color: String,
}

impl Default for Setting {
    fn default() -> Self {
        Self {
            brand_name: String::new(),
            logo: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }
}

impl Setting {
    /// Build a record from its three fields.
    #[must_use]
    pub fn new(
        brand_name: impl Into<String>,
        logo: impl Into<String>,
        primary_color: impl Into<String>,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            logo: logo.into(),
            primary_color: primary_color.into(),
        }
    }

    /// Replace an empty color with [`DEFAULT_PRIMARY_COLOR`].
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.primary_color.is_empty() {
            self.primary_color = DEFAULT_PRIMARY_COLOR.to_string();
        }
        self
    }

    /// Whether a logo image is set.
    #[must_use]
    pub const fn has_logo(&self) -> bool {
        !self.logo.is_empty()
    }

    /// Brand name, or `fallback` when the name is blank.
    #[must_use]
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        let trimmed = self.brand_name.trim();
        if trimmed.is_empty() { fallback } else { trimmed }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PRIMARY_COLOR, Setting};

    #[test]
    fn serializes_with_camel_case_keys() {
        let setting = Setting::new("Acme", "", "#ff0000");
        let json = serde_json::to_value(&setting).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"brandName": "Acme", "logo": "", "primaryColor": "#ff0000"})
        );
    }

    #[test]
    fn missing_fields_are_default_filled() {
        let setting: Setting =
            serde_json::from_str(r#"{"brandName":"Acme"}"#).expect("partial record");
        assert_eq!(setting.brand_name, "Acme");
        assert_eq!(setting.logo, "");
        assert_eq!(setting.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn null_fields_are_default_filled() {
        let setting: Setting =
            serde_json::from_str(r##"{"brandName":null,"logo":null,"primaryColor":"#112233"}"##)
                .expect("null fields");
        assert_eq!(setting.brand_name, "");
        assert_eq!(setting.logo, "");
        assert_eq!(setting.primary_color, "#112233");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let setting: Setting =
            serde_json::from_str(r#"{"brandName":"X","theme":"dark"}"#).expect("extra field");
        assert_eq!(setting.brand_name, "X");
    }

    #[test]
    fn normalized_restores_empty_color() {
        let setting = Setting::new("Acme", "", "").normalized();
        assert_eq!(setting.primary_color, DEFAULT_PRIMARY_COLOR);
        let blank = Setting::new("Acme", "", "  ").normalized();
        assert_eq!(blank.primary_color, "  ");
        let kept = Setting::new("Acme", "", "#000000").normalized();
        assert_eq!(kept.primary_color, "#000000");
    }

    #[test]
    fn display_name_falls_back_when_blank() {
        assert_eq!(Setting::default().display_name("Brandkit"), "Brandkit");
        assert_eq!(
            Setting::new(" Acme ", "", "#000000").display_name("Brandkit"),
            "Acme"
        );
    }
}

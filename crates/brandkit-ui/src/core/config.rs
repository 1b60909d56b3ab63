//! Storage keys, element ids and notice texts for the personalization dialog.

use crate::core::ports::{Notice, NoticePosition};

/// Storage key for the active branding record.
pub const SETTINGS_KEY: &str = "uiPersonalizationSettings";
/// Storage key for the ordered list of saved presets.
pub const SAVED_LIST_KEY: &str = "uiSavedSettingsList";
/// Id of the style element that carries the injected theme.
pub const THEME_STYLE_ID: &str = "dynamic-theme-styles";
/// Label of the dismiss action on every notice.
pub const NOTICE_ACTION: &str = "Close";

/// Static description of a notice raised by an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTemplate {
    /// Text shown to the user.
    pub message: &'static str,
    /// Visible duration in milliseconds.
    pub duration_ms: u32,
    /// Placement override.
    pub position: Option<NoticePosition>,
}

impl NoticeTemplate {
    /// Materialize the template with the given dismiss label.
    #[must_use]
    pub fn notice(&self, action: &str) -> Notice {
        Notice {
            message: self.message.to_string(),
            action: action.to_string(),
            duration_ms: self.duration_ms,
            position: self.position,
        }
    }
}

/// Configuration shared by the editor, the saved list and the app shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonalizationConfig {
    /// Key of the active branding record.
    pub settings_key: &'static str,
    /// Key of the saved preset list.
    pub saved_list_key: &'static str,
    /// Id of the injected theme style element.
    pub style_id: &'static str,
    /// Dismiss label attached to notices.
    pub notice_action: &'static str,
    /// Raised after a successful save.
    pub saved_notice: NoticeTemplate,
    /// Raised after a reset.
    pub reset_notice: NoticeTemplate,
    /// Raised after a preset is applied.
    pub applied_notice: NoticeTemplate,
}

impl Default for PersonalizationConfig {
    fn default() -> Self {
        Self {
            settings_key: SETTINGS_KEY,
            saved_list_key: SAVED_LIST_KEY,
            style_id: THEME_STYLE_ID,
            notice_action: NOTICE_ACTION,
            saved_notice: NoticeTemplate {
                message: "Settings saved successfully!",
                duration_ms: 3000,
                position: Some(NoticePosition::Center),
            },
            reset_notice: NoticeTemplate {
                message: "Settings reset to default!",
                duration_ms: 3000,
                position: Some(NoticePosition::Center),
            },
            applied_notice: NoticeTemplate {
                message: "Applied saved setting!",
                duration_ms: 2000,
                position: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NOTICE_ACTION, PersonalizationConfig};
    use crate::core::ports::NoticePosition;

    #[test]
    fn defaults_match_storage_contract() {
        let config = PersonalizationConfig::default();
        assert_eq!(config.settings_key, "uiPersonalizationSettings");
        assert_eq!(config.saved_list_key, "uiSavedSettingsList");
        assert_eq!(config.style_id, "dynamic-theme-styles");
    }

    #[test]
    fn template_carries_duration_and_position() {
        let config = PersonalizationConfig::default();
        let notice = config.saved_notice.notice(NOTICE_ACTION);
        assert_eq!(notice.duration_ms, 3000);
        assert_eq!(notice.position, Some(NoticePosition::Center));
        assert_eq!(notice.action, "Close");
        assert_eq!(config.applied_notice.notice(NOTICE_ACTION).position, None);
    }
}

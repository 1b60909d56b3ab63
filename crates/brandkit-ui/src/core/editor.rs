//! Settings editor state and operations.
//!
//! # Design
//! - `draft` mirrors the form; `active` mirrors what is applied to the document.
//! - Every operation is a synchronous read-mutate-write through [`Services`].
//! - Closing is reported as a [`ModalClose`] value; the view owns the dialog.

use crate::core::error::PersonalizationError;
use crate::core::modal::{AppliedPreset, ModalClose, ModalRequest, SavedListContext};
use crate::core::ports::Services;
use crate::core::records;
use crate::core::setting::Setting;
use crate::core::theme::{self, Rgb};

/// In-memory state of the personalization dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsEditor {
    /// Values bound to the form controls.
    pub draft: Setting,
    /// Values currently applied to the document.
    pub active: Setting,
}

impl SettingsEditor {
    /// Load the active record into both `draft` and `active`, then apply the theme.
    ///
    /// Defaults are kept when nothing is stored. The theme is applied even when
    /// the stored record is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`PersonalizationError::Corrupt`] when the stored record does not match the record shape.
    pub fn load(services: Services<'_>) -> Result<Self, PersonalizationError> {
        let mut editor = Self::default();
        let stored = records::read_current(services.store, services.config);
        if let Ok(Some(setting)) = &stored {
            editor.draft = setting.clone();
            editor.active = setting.clone();
        }
        editor.apply_theme(services);
        stored.map(|_| editor)
    }

    /// Update the draft brand name.
    pub fn set_brand_name(&mut self, value: impl Into<String>) {
        self.draft.brand_name = value.into();
    }

    /// Update the draft accent color.
    pub fn set_primary_color(&mut self, value: impl Into<String>) {
        self.draft.primary_color = value.into();
    }

    /// Store an encoded logo as the draft preview.
    pub fn set_logo(&mut self, data_uri: impl Into<String>) {
        self.draft.logo = data_uri.into();
    }

    /// Persist the draft as the active record and append it to the saved list.
    ///
    /// # Errors
    ///
    /// Returns an error when a write is rejected or the saved list is malformed;
    /// the active record may already have been written in that case.
    pub fn save(
        &mut self,
        services: Services<'_>,
    ) -> Result<ModalClose<()>, PersonalizationError> {
        let config = services.config;
        let setting = self.draft.clone();
        records::write_current(services.store, config, &setting)?;
        let mut list = records::read_saved_list(services.store, config)?;
        list.push(setting.clone());
        records::write_saved_list(services.store, config, &list)?;
        services
            .notifier
            .notify(config.saved_notice.notice(config.notice_action));
        self.active = setting;
        self.apply_theme(services);
        Ok(ModalClose::Empty)
    }

    /// Remove the active record and return every field to its default.
    pub fn reset(&mut self, services: Services<'_>) -> ModalClose<()> {
        let config = services.config;
        records::clear_current(services.store, config);
        *self = Self::default();
        self.apply_theme(services);
        services
            .notifier
            .notify(config.reset_notice.notice(config.notice_action));
        ModalClose::Empty
    }

    /// Request for opening the saved-settings list with the current draft.
    #[must_use]
    pub fn saved_list_request(&self) -> ModalRequest<SavedListContext> {
        ModalRequest::new(SavedListContext {
            current: self.draft.clone(),
        })
    }

    /// React to the saved-settings list closing.
    ///
    /// An applied preset replaces both `draft` and `active` and re-applies the
    /// theme. Returns whether anything changed.
    pub fn on_saved_list_closed(
        &mut self,
        close: ModalClose<AppliedPreset>,
        services: Services<'_>,
    ) -> bool {
        let Some(AppliedPreset { settings }) = close.into_value() else {
            return false;
        };
        self.draft = settings.clone();
        self.active = settings;
        self.apply_theme(services);
        true
    }

    fn apply_theme(&self, services: Services<'_>) -> Option<Rgb> {
        theme::apply_primary_color(
            services.styles,
            services.config.style_id,
            &self.active.primary_color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsEditor;
    use crate::core::config::PersonalizationConfig;
    use crate::core::error::PersonalizationError;
    use crate::core::modal::{AppliedPreset, ModalClose};
    use crate::core::ports::memory::{MemoryDocument, MemoryNotifier, MemoryStore};
    use crate::core::ports::{KeyValueStore, Services};
    use crate::core::records;
    use crate::core::setting::{DEFAULT_PRIMARY_COLOR, Setting};

    struct Harness {
        store: MemoryStore,
        document: MemoryDocument,
        notifier: MemoryNotifier,
        config: PersonalizationConfig,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                store: MemoryStore::new(),
                document: MemoryDocument::new(),
                notifier: MemoryNotifier::new(),
                config: PersonalizationConfig::default(),
            }
        }

        fn services(&self) -> Services<'_> {
            Services {
                store: &self.store,
                styles: &self.document,
                notifier: &self.notifier,
                config: &self.config,
            }
        }

        fn theme(&self) -> String {
            self.document
                .style(self.config.style_id)
                .expect("theme installed")
        }
    }

    #[test]
    fn load_without_record_keeps_defaults_and_applies_theme() {
        let harness = Harness::new();
        let editor = SettingsEditor::load(harness.services()).expect("load");
        assert_eq!(editor, SettingsEditor::default());
        assert_eq!(editor.draft.primary_color, DEFAULT_PRIMARY_COLOR);
        assert!(harness.theme().contains("--primary-color: #3f51b5;"));
    }

    #[test]
    fn load_copies_stored_record_with_defaults() {
        let harness = Harness::new();
        harness
            .store
            .set(harness.config.settings_key, r#"{"brandName":"Acme"}"#)
            .expect("seed");
        let editor = SettingsEditor::load(harness.services()).expect("load");
        assert_eq!(editor.draft.brand_name, "Acme");
        assert_eq!(editor.active.brand_name, "Acme");
        assert_eq!(editor.active.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn load_reports_corrupt_record_after_applying_default_theme() {
        let harness = Harness::new();
        harness
            .store
            .set(harness.config.settings_key, "not json")
            .expect("seed");
        let err = SettingsEditor::load(harness.services()).expect_err("corrupt");
        assert!(matches!(err, PersonalizationError::Corrupt { .. }));
        assert!(harness.theme().contains("#3f51b5"));
    }

    #[test]
    fn save_writes_record_appends_and_closes_empty() {
        let harness = Harness::new();
        let mut editor = SettingsEditor::default();
        editor.set_brand_name("Acme");
        editor.set_logo("");
        editor.set_primary_color("#ff0000");

        let close = editor.save(harness.services()).expect("save");

        assert_eq!(close, ModalClose::Empty);
        let expected = Setting::new("Acme", "", "#ff0000");
        let stored = records::read_current(&harness.store, &harness.config)
            .expect("read")
            .expect("record present");
        assert_eq!(stored, expected);
        assert_eq!(
            harness.store.get(harness.config.settings_key).as_deref(),
            Some(r##"{"brandName":"Acme","logo":"","primaryColor":"#ff0000"}"##)
        );
        let list = records::read_saved_list(&harness.store, &harness.config).expect("list");
        assert_eq!(list, vec![expected.clone()]);
        assert_eq!(editor.active, expected);
        assert!(harness.theme().contains("--primary-color-rgb: 255, 0, 0;"));
        let notices = harness.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Settings saved successfully!");
        assert_eq!(notices[0].duration_ms, 3000);
    }

    #[test]
    fn saved_record_is_what_next_load_sees() {
        let harness = Harness::new();
        let mut editor = SettingsEditor::default();
        editor.set_brand_name("Globex");
        editor.set_logo("data:image/png;base64,AAAA");
        editor.set_primary_color("#123456");
        editor.save(harness.services()).expect("save");

        let reloaded = SettingsEditor::load(harness.services()).expect("load");
        assert_eq!(reloaded.draft, editor.draft);
        assert_eq!(reloaded.active, editor.draft);
    }

    #[test]
    fn repeated_saves_append_in_order() {
        let harness = Harness::new();
        let mut editor = SettingsEditor::default();
        for name in ["one", "two", "three"] {
            editor.set_brand_name(name);
            editor.save(harness.services()).expect("save");
        }
        let names: Vec<String> = records::read_saved_list(&harness.store, &harness.config)
            .expect("list")
            .into_iter()
            .map(|setting| setting.brand_name)
            .collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[test]
    fn save_with_corrupt_list_fails_without_notice() {
        let harness = Harness::new();
        harness
            .store
            .set(harness.config.saved_list_key, "{oops")
            .expect("seed");
        let mut editor = SettingsEditor::default();
        editor.set_brand_name("Acme");
        let err = editor.save(harness.services()).expect_err("corrupt list");
        assert!(matches!(err, PersonalizationError::Corrupt { key, .. } if key == "uiSavedSettingsList"));
        assert!(harness.notifier.notices().is_empty());
        assert_eq!(editor.active, Setting::default());
    }

    #[test]
    fn save_surfaces_rejected_write() {
        let harness = Harness::new();
        harness.store.reject_writes(true);
        let mut editor = SettingsEditor::default();
        let err = editor.save(harness.services()).expect_err("quota");
        assert!(matches!(err, PersonalizationError::Store(_)));
    }

    #[test]
    fn reset_restores_defaults_and_removes_record() {
        let harness = Harness::new();
        let mut editor = SettingsEditor::default();
        editor.set_brand_name("Acme");
        editor.set_primary_color("#00ff00");
        editor.save(harness.services()).expect("save");

        let close = editor.reset(harness.services());

        assert_eq!(close, ModalClose::Empty);
        assert_eq!(editor, SettingsEditor::default());
        assert!(!harness.store.contains(harness.config.settings_key));
        assert!(harness.store.contains(harness.config.saved_list_key));
        assert!(harness.theme().contains("--primary-color: #3f51b5;"));
        let notices = harness.notifier.notices();
        assert_eq!(
            notices.last().map(|notice| notice.message.as_str()),
            Some("Settings reset to default!")
        );
    }

    #[test]
    fn saved_list_request_carries_draft() {
        let mut editor = SettingsEditor::default();
        editor.set_brand_name("Draft");
        let request = editor.saved_list_request();
        assert_eq!(request.context.current.brand_name, "Draft");
    }

    #[test]
    fn applied_preset_replaces_draft_and_active() {
        let harness = Harness::new();
        let mut editor = SettingsEditor::default();
        editor.set_brand_name("unsaved");
        let preset = Setting::new("Initech", "", "#3366cc");

        let changed = editor.on_saved_list_closed(
            ModalClose::With(AppliedPreset {
                settings: preset.clone(),
            }),
            harness.services(),
        );

        assert!(changed);
        assert_eq!(editor.draft, preset);
        assert_eq!(editor.active, preset);
        assert!(harness.theme().contains("51, 102, 204"));
    }

    #[test]
    fn dismissed_list_leaves_editor_untouched() {
        let harness = Harness::new();
        let mut editor = SettingsEditor::default();
        editor.set_brand_name("unsaved");
        let before = editor.clone();
        assert!(!editor.on_saved_list_closed(ModalClose::Empty, harness.services()));
        assert_eq!(editor, before);
        assert_eq!(harness.document.style_count(), 0);
    }
}

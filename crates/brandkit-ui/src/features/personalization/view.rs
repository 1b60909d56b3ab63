//! Personalization dialog view.
//!
//! # Design
//! - Form state lives in a reducer so a late logo read never overwrites newer edits.
//! - The pending logo reader is owned by the view; closing the dialog drops it and aborts the read.
//! - Saved presets open as a nested modal driven by a `ModalRequest`.

use std::rc::Rc;

use crate::app::{BrowserPorts, report_error};
use crate::components::fields::{ColorField, TextField};
use crate::components::logo_input::LogoInput;
use crate::components::modal::Modal;
use crate::core::config::PersonalizationConfig;
use crate::core::editor::SettingsEditor;
use crate::core::logo::encode_data_uri;
use crate::core::modal::{AppliedPreset, ModalClose, ModalRequest, SavedListContext};
use crate::core::store::AppStore;
use crate::features::personalization::saved_view::SavedSettingsDialog;
use gloo::console;
use gloo::file::File;
use gloo::file::callbacks::{FileReader, read_as_bytes};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

enum EditorAction {
    Replace(SettingsEditor),
    BrandName(String),
    PrimaryColor(String),
    Logo(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct EditorState {
    editor: SettingsEditor,
}

impl Reducible for EditorState {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let editor = match action {
            EditorAction::Replace(next) => next,
            EditorAction::BrandName(value) => {
                let mut editor = self.editor.clone();
                editor.set_brand_name(value);
                editor
            }
            EditorAction::PrimaryColor(value) => {
                let mut editor = self.editor.clone();
                editor.set_primary_color(value);
                editor
            }
            EditorAction::Logo(data_uri) => {
                let mut editor = self.editor.clone();
                editor.set_logo(data_uri);
                editor
            }
        };
        Rc::new(Self { editor })
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsDialogProps {
    pub open: bool,
    pub on_close: Callback<ModalClose<()>>,
}

#[function_component(SettingsDialog)]
pub(crate) fn settings_dialog(props: &SettingsDialogProps) -> Html {
    let config = use_context::<PersonalizationConfig>().unwrap_or_default();
    let dispatch = Dispatch::<AppStore>::new();
    let state = use_reducer(EditorState::default);
    let saved_request = use_state(|| None as Option<ModalRequest<SavedListContext>>);
    let logo_reader = use_mut_ref(|| None as Option<FileReader>);

    {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let config = config.clone();
        let logo_reader = logo_reader.clone();
        let saved_request = saved_request.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    let ports = BrowserPorts::new(dispatch.clone());
                    let editor =
                        SettingsEditor::load(ports.services(&config)).unwrap_or_else(|err| {
                            report_error(&dispatch, "Could not load branding", &err);
                            SettingsEditor::default()
                        });
                    state.dispatch(EditorAction::Replace(editor));
                } else {
                    logo_reader.borrow_mut().take();
                    saved_request.set(None);
                }
                || ()
            },
            props.open,
        );
    }

    let on_brand_name = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(EditorAction::BrandName(value)))
    };
    let on_primary_color = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(EditorAction::PrimaryColor(value)))
    };
    let on_logo_selected = {
        let state = state.clone();
        let logo_reader = logo_reader.clone();
        Callback::from(move |raw: web_sys::File| {
            let file = File::from(raw);
            let mime = file.raw_mime_type();
            let state = state.clone();
            let task = read_as_bytes(&file, move |result| match result {
                Ok(bytes) => state.dispatch(EditorAction::Logo(encode_data_uri(&mime, &bytes))),
                Err(err) => console::error!("logo read failed", err.to_string()),
            });
            *logo_reader.borrow_mut() = Some(task);
        })
    };

    let on_save = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let config = config.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let ports = BrowserPorts::new(dispatch.clone());
            let mut editor = state.editor.clone();
            match editor.save(ports.services(&config)) {
                Ok(close) => {
                    publish_branding(&dispatch, &editor);
                    state.dispatch(EditorAction::Replace(editor));
                    on_close.emit(close);
                }
                Err(err) => report_error(&dispatch, "Could not save settings", &err),
            }
        })
    };
    let on_reset = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let config = config.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let ports = BrowserPorts::new(dispatch.clone());
            let mut editor = state.editor.clone();
            let close = editor.reset(ports.services(&config));
            publish_branding(&dispatch, &editor);
            state.dispatch(EditorAction::Replace(editor));
            on_close.emit(close);
        })
    };
    let on_open_saved = {
        let state = state.clone();
        let saved_request = saved_request.clone();
        Callback::from(move |_: MouseEvent| {
            saved_request.set(Some(state.editor.saved_list_request()));
        })
    };
    let on_saved_closed = {
        let state = state.clone();
        let dispatch = dispatch.clone();
        let config = config.clone();
        let saved_request = saved_request.clone();
        Callback::from(move |close: ModalClose<AppliedPreset>| {
            saved_request.set(None);
            let ports = BrowserPorts::new(dispatch.clone());
            let mut editor = state.editor.clone();
            if editor.on_saved_list_closed(close, ports.services(&config)) {
                publish_branding(&dispatch, &editor);
                state.dispatch(EditorAction::Replace(editor));
            }
        })
    };
    let on_cancel = props.on_close.reform(|_: MouseEvent| ModalClose::Empty);
    let on_dismiss = props.on_close.reform(|()| ModalClose::Empty);

    let draft = &state.editor.draft;

    html! {
        <>
            <Modal open={props.open} title="Personalize" on_close={on_dismiss}>
                <TextField
                    label="Brand name"
                    placeholder={AttrValue::from("Your brand")}
                    value={draft.brand_name.clone()}
                    oninput={on_brand_name}
                />
                <div class="form-control w-full gap-1">
                    <span class="label-text text-xs">{"Logo"}</span>
                    <LogoInput onchange={on_logo_selected} />
                    if draft.has_logo() {
                        <img class="mt-2 h-16 w-auto rounded" src={draft.logo.clone()} alt="Logo preview" />
                    }
                </div>
                <ColorField
                    label="Primary color"
                    value={draft.primary_color.clone()}
                    oninput={on_primary_color}
                />
                <div class="flex flex-wrap items-center justify-between gap-2 pt-2">
                    <button class="btn btn-ghost btn-sm mat-button mat-primary" onclick={on_open_saved}>
                        {"Saved settings"}
                    </button>
                    <div class="flex gap-2">
                        <button class="btn btn-outline btn-sm mat-stroked-button mat-primary" onclick={on_reset}>
                            {"Reset"}
                        </button>
                        <button class="btn btn-ghost btn-sm" onclick={on_cancel}>{"Cancel"}</button>
                        <button class="btn btn-sm mat-flat-button mat-primary" onclick={on_save}>
                            {"Save"}
                        </button>
                    </div>
                </div>
            </Modal>
            if let Some(request) = (*saved_request).clone() {
                <SavedSettingsDialog {request} on_close={on_saved_closed} />
            }
        </>
    }
}

fn publish_branding(dispatch: &Dispatch<AppStore>, editor: &SettingsEditor) {
    let active = editor.active.clone();
    dispatch.reduce_mut(|store| store.branding = active);
}

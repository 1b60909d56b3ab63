//! Saved presets view.

use crate::app::{BrowserPorts, report_error};
use crate::components::modal::Modal;
use crate::core::config::PersonalizationConfig;
use crate::core::modal::{AppliedPreset, ModalClose, ModalRequest, SavedListContext};
use crate::core::saved::SavedSettingsList;
use crate::core::setting::Setting;
use crate::core::store::AppStore;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

const UNTITLED: &str = "Untitled";

#[derive(Properties, PartialEq)]
pub(crate) struct SavedSettingsDialogProps {
    /// Opener context; entries equal to the editor's draft are marked.
    pub request: ModalRequest<SavedListContext>,
    pub on_close: Callback<ModalClose<AppliedPreset>>,
}

#[function_component(SavedSettingsDialog)]
pub(crate) fn saved_settings_dialog(props: &SavedSettingsDialogProps) -> Html {
    let config = use_context::<PersonalizationConfig>().unwrap_or_default();
    let dispatch = Dispatch::<AppStore>::new();
    let list = use_state(SavedSettingsList::default);

    {
        let list = list.clone();
        let dispatch = dispatch.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                let ports = BrowserPorts::new(dispatch.clone());
                match SavedSettingsList::load(ports.services(&config)) {
                    Ok(loaded) => list.set(loaded),
                    Err(err) => report_error(&dispatch, "Could not read saved settings", &err),
                }
                || ()
            },
            (),
        );
    }

    let on_delete = {
        let list = list.clone();
        let dispatch = dispatch.clone();
        let config = config.clone();
        Callback::from(move |index: usize| {
            let ports = BrowserPorts::new(dispatch.clone());
            let mut next = (*list).clone();
            match next.delete(index, ports.services(&config)) {
                Ok(_) => list.set(next),
                Err(err) => report_error(&dispatch, "Could not delete saved setting", &err),
            }
        })
    };
    let on_apply = {
        let list = list.clone();
        let dispatch = dispatch.clone();
        let config = config.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |index: usize| {
            let ports = BrowserPorts::new(dispatch.clone());
            match list.apply(index, ports.services(&config)) {
                Ok(close) => on_close.emit(close),
                Err(err) => report_error(&dispatch, "Could not apply saved setting", &err),
            }
        })
    };
    let on_dismiss = {
        let list = list.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |()| on_close.emit(list.close()))
    };
    let on_close_click = on_dismiss.reform(|_: MouseEvent| ());
    let current = &props.request.context.current;

    html! {
        <Modal open={true} title="Saved settings" class="z-50" on_close={on_dismiss}>
            if list.is_empty() {
                <p class="text-sm text-base-content/60">{"No saved settings yet."}</p>
            } else {
                <ul class="space-y-2">
                    {for list.entries().iter().enumerate().map(|(index, setting)| {
                        render_entry(index, setting, setting == current, &on_apply, &on_delete)
                    })}
                </ul>
            }
            <div class="flex justify-end">
                <button class="btn btn-ghost btn-sm" onclick={on_close_click}>{"Close"}</button>
            </div>
        </Modal>
    }
}

fn render_entry(
    index: usize,
    setting: &Setting,
    is_current: bool,
    on_apply: &Callback<usize>,
    on_delete: &Callback<usize>,
) -> Html {
    let apply = on_apply.reform(move |_: MouseEvent| index);
    let delete = on_delete.reform(move |_: MouseEvent| index);
    let swatch = format!("background-color: {}", setting.primary_color);

    html! {
        <li key={index.to_string()} class="card card-compact bg-base-100 shadow-sm">
            <div class="card-body flex-row items-center gap-3">
                if setting.has_logo() {
                    <img class="h-10 w-10 rounded object-contain" src={setting.logo.clone()} alt="" />
                }
                <div class="flex-1">
                    <p class="font-medium">
                        {setting.display_name(UNTITLED).to_string()}
                        if is_current {
                            <span class="badge badge-ghost badge-sm ml-2">{"Current"}</span>
                        }
                    </p>
                    <p class="flex items-center gap-2 font-mono text-xs">
                        <span class="inline-block h-3 w-3 rounded-full" style={swatch}></span>
                        {setting.primary_color.clone()}
                    </p>
                </div>
                <button class="btn btn-xs mat-flat-button mat-primary" onclick={apply}>{"Apply"}</button>
                <button class="btn btn-ghost btn-xs text-error" onclick={delete}>{"Delete"}</button>
            </div>
        </li>
    }
}

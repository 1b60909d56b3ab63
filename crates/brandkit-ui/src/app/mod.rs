use crate::components::toast::ToastHost;
use crate::core::config::PersonalizationConfig;
use crate::core::editor::SettingsEditor;
use crate::core::modal::ModalClose;
use crate::core::ports::Services;
use crate::core::store::AppStore;
use crate::features::personalization::view::SettingsDialog;
use document::DocumentStyleHost;
use notify::StoreNotifier;
use preferences::BrowserStorage;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod document;
mod notify;
mod preferences;

pub(crate) use notify::report_error;

const PRODUCT_NAME: &str = "Brandkit";

/// Browser implementations of the personalization ports.
#[derive(Clone)]
pub(crate) struct BrowserPorts {
    store: BrowserStorage,
    styles: DocumentStyleHost,
    notifier: StoreNotifier,
}

impl BrowserPorts {
    pub(crate) const fn new(dispatch: Dispatch<AppStore>) -> Self {
        Self {
            store: BrowserStorage,
            styles: DocumentStyleHost,
            notifier: StoreNotifier::new(dispatch),
        }
    }

    pub(crate) const fn services<'a>(&'a self, config: &'a PersonalizationConfig) -> Services<'a> {
        Services {
            store: &self.store,
            styles: &self.styles,
            notifier: &self.notifier,
            config,
        }
    }
}

#[function_component(BrandkitApp)]
pub fn brandkit_app() -> Html {
    let config = use_memo(|_| PersonalizationConfig::default(), ());
    let dispatch = Dispatch::<AppStore>::new();
    let branding = use_selector(|store: &AppStore| store.branding.clone());
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());
    let settings_open = use_state(|| false);

    {
        let dispatch = dispatch.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                let ports = BrowserPorts::new(dispatch.clone());
                match SettingsEditor::load(ports.services(&config)) {
                    Ok(editor) => dispatch.reduce_mut(|store| store.branding = editor.active),
                    Err(err) => report_error(&dispatch, "Could not load branding", &err),
                }
                || ()
            },
            (),
        );
    }

    let open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_| settings_open.set(true))
    };
    let close_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: ModalClose<()>| settings_open.set(false))
    };
    let dismiss_toast = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| dispatch.reduce_mut(|store| store.toasts.dismiss(id)))
    };

    let title = branding.display_name(PRODUCT_NAME).to_string();
    let logo = branding
        .has_logo()
        .then(|| html! { <img class="brand-logo h-8 w-auto" src={branding.logo.clone()} alt={title.clone()} /> });

    html! {
        <ContextProvider<PersonalizationConfig> context={(*config).clone()}>
            <div class="app-shell min-h-screen bg-base-200">
                <header class="navbar mat-toolbar mat-primary gap-3 px-4" style="background-color: var(--primary-color); color: #fff;">
                    <div class="flex flex-1 items-center gap-3">
                        {for logo}
                        <span class="text-lg font-semibold">{title}</span>
                    </div>
                    <button class="btn btn-ghost btn-sm mat-button" onclick={open_settings}>
                        {"Personalize"}
                    </button>
                </header>
                <main class="p-6">
                    <p class="text-sm text-base-content/70">
                        {"Use Personalize to set the brand name, logo and accent color."}
                    </p>
                </main>
                <SettingsDialog open={*settings_open} on_close={close_settings} />
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
            </div>
        </ContextProvider<PersonalizationConfig>>
    }
}

/// Human-readable form of a JS exception value.
pub(crate) fn js_detail(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Mount the application into `#root`, or the body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BrandkitApp>::with_root(root).render();
    } else {
        yew::Renderer::<BrandkitApp>::new().render();
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LogoInputProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::from("image/*"))]
    pub accept: AttrValue,
    #[prop_or_default]
    pub onchange: Callback<web_sys::File>,
}

/// Single-file picker; emits the first selected file.
#[function_component(LogoInput)]
pub(crate) fn logo_input(props: &LogoInputProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                if let Some(file) = input.files().and_then(|files| files.item(0)) {
                    onchange.emit(file);
                }
            }
        })
    };

    html! {
        <input
            type="file"
            class={classes!("file-input", "file-input-bordered", "w-full", props.class.clone())}
            accept={props.accept.clone()}
            onchange={onchange}
        />
    }
}

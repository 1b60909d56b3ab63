use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(TextField)]
pub(crate) fn text_field(props: &TextFieldProps) -> Html {
    let oninput = input_value(props.oninput.clone());
    html! {
        <label class="form-control mat-form-field w-full gap-1">
            <span class="label-text text-xs mat-form-field-label">{props.label.clone()}</span>
            <input
                type="text"
                class="input input-bordered w-full"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ColorFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Native color picker paired with an editable hex text box.
#[function_component(ColorField)]
pub(crate) fn color_field(props: &ColorFieldProps) -> Html {
    let on_pick = input_value(props.oninput.clone());
    let on_text = input_value(props.oninput.clone());
    html! {
        <label class="form-control mat-form-field w-full gap-1">
            <span class="label-text text-xs mat-form-field-label">{props.label.clone()}</span>
            <div class="flex items-center gap-2">
                <input
                    type="color"
                    class="h-10 w-14 cursor-pointer rounded"
                    value={props.value.clone()}
                    oninput={on_pick}
                />
                <input
                    type="text"
                    class="input input-bordered w-32 font-mono"
                    value={props.value.clone()}
                    oninput={on_text}
                />
            </div>
        </label>
    }
}

fn input_value(target: Callback<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
            target.emit(input.value());
        }
    })
}

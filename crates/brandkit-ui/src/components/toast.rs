use std::collections::HashMap;

use crate::core::store::{Toast, plan_timers};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                let plan = plan_timers(timers.keys().copied(), list);
                for id in plan.cancel {
                    timers.remove(&id);
                }
                for (id, duration_ms) in plan.arm {
                    let on_dismiss = on_dismiss.clone();
                    timers.insert(id, Timeout::new(duration_ms, move || on_dismiss.emit(id)));
                }
                || ()
            },
            props.toasts.clone(),
        );
    }

    html! {
        <div class={classes!("toast-host", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, props.on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let placement = toast
        .position
        .map_or("toast-end", |position| position.as_class());
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div class={classes!("toast", "toast-bottom", placement)} role="status">
            <div class={classes!("alert", toast.kind.as_class(), "shadow")}>
                <span>{toast.message.clone()}</span>
                <button class="btn btn-ghost btn-xs" onclick={on_close}>{toast.action.clone()}</button>
            </div>
        </div>
    }
}

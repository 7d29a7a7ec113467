//! Transient toast notifications.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::icons;
use leptos_icons::Icon;

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Kind of a toast, selects its color accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Fixed overlay rendering the current toasts, newest at the bottom.
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class=css::stack>
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let kind_class = match toast.kind {
                        ToastKind::Success => css::success,
                        ToastKind::Error => css::error,
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!("{} {}", css::toast, kind_class)>
                            <span class=css::message>{toast.message}</span>
                            <button
                                class=css::dismiss
                                on:click=move |_| {
                                    ctx.toasts.update(|toasts| toasts.retain(|t| t.id != id));
                                }
                            >
                                <Icon icon=icons::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

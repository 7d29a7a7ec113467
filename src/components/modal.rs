//! Generic modal dialog shell.
//!
//! Renders children inside a centered dialog over a dimmed backdrop.
//! Clicking the backdrop or the close button runs `on_close`.

use leptos::prelude::*;

use crate::components::icons;
use leptos_icons::Icon;

stylance::import_crate_style!(css, "src/components/modal.module.css");

#[component]
pub fn Modal(
    title: &'static str,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())>
            <div class=css::dialog on:click=|ev| ev.stop_propagation()>
                <div class=css::header>
                    <h2 class=css::title>{title}</h2>
                    <button class=css::close on:click=move |_| on_close.run(())>
                        <Icon icon=icons::CLOSE />
                    </button>
                </div>
                <div class=css::body>{children()}</div>
            </div>
        </div>
    }
}

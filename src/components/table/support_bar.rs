//! Summary and action bar rendered above the table.

use leptos::prelude::*;

use crate::components::table::column::SupportButton;

stylance::import_crate_style!(css, "src/components/table/table.module.css");

/// Shows the total and selected counts, cross-page select-all controls, and
/// the page's action buttons.
#[component]
pub fn TableSupportBar(
    total_count: Signal<u64>,
    selected_count: Signal<usize>,
    visible_count: Signal<usize>,
    /// All rows on the current page are selected.
    page_fully_selected: Signal<bool>,
    /// Every row across all pages is selected.
    all_selected: Signal<bool>,
    on_select_all_pages: Option<Callback<bool>>,
    buttons: Vec<SupportButton>,
) -> impl IntoView {
    view! {
        <div class=css::support_bar>
            <div class=css::summary>
                <span>{move || format!("{} total", total_count.get())}</span>
                <Show when={move || selected_count.get() > 0}>
                    <span class=css::selected_summary>
                        {move || format!("{} selected", selected_count.get())}
                    </span>
                </Show>
                {on_select_all_pages.map(|select_all| {
                    view! {
                        <Show when={move || page_fully_selected.get() && visible_count.get() > 0}>
                            <Show
                                when=move || all_selected.get()
                                fallback=move || {
                                    view! {
                                        <button
                                            class=css::select_all
                                            on:click=move |_| select_all.run(true)
                                        >
                                            {move || {
                                                format!(
                                                    "Select all {} across every page",
                                                    total_count.get(),
                                                )
                                            }}
                                        </button>
                                    }
                                }
                            >
                                <button
                                    class=css::select_all
                                    on:click=move |_| select_all.run(false)
                                >
                                    "Clear selection"
                                </button>
                            </Show>
                        </Show>
                    }
                })}
            </div>
            <div class=css::actions>
                {buttons
                    .into_iter()
                    .map(|button| {
                        let disabled = move || button.needs_selection && selected_count.get() == 0;
                        view! {
                            <button
                                class=css::action_button
                                disabled=disabled
                                on:click=move |_| button.on_click.run(())
                            >
                                {button.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

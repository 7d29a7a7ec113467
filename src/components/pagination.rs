//! Page navigation controls rendered under tables.

use leptos::prelude::*;

use crate::components::icons;
use crate::config::PAGE_SIZES;
use crate::core::pagination::PageOptions;
use leptos_icons::Icon;

stylance::import_crate_style!(css, "src/components/pagination.module.css");

/// Bundled pagination wiring handed to `Table`.
#[derive(Clone, Copy)]
pub struct PaginationProps {
    pub options: Signal<PageOptions>,
    /// Receives the new 1-based page number.
    pub on_change_page: Callback<u32>,
    /// Receives the new page size; the current page resets to 1.
    pub on_change_size: Callback<u32>,
}

#[component]
pub fn PaginationControls(props: PaginationProps) -> impl IntoView {
    let options = props.options;
    let on_change_page = props.on_change_page;
    let on_change_size = props.on_change_size;

    view! {
        <div class=css::pagination>
            <div class=css::pages>
                <button
                    class=css::nav
                    disabled=move || !options.get().has_previous()
                    on:click=move |_| {
                        let current = options.get().current_page;
                        if current > 1 {
                            on_change_page.run(current - 1);
                        }
                    }
                >
                    <Icon icon=icons::CHEVRON_LEFT />
                </button>
                <For
                    each=move || options.get().page_numbers()
                    key=|page| *page
                    children=move |page| {
                        let is_current =
                            Signal::derive(move || options.get().current_page == page);
                        view! {
                            <button
                                class=move || {
                                    if is_current.get() {
                                        format!("{} {}", css::page, css::current)
                                    } else {
                                        css::page.to_string()
                                    }
                                }
                                on:click=move |_| {
                                    if !is_current.get_untracked() {
                                        on_change_page.run(page);
                                    }
                                }
                            >
                                {page}
                            </button>
                        }
                    }
                />
                <button
                    class=css::nav
                    disabled=move || !options.get().has_next()
                    on:click=move |_| {
                        let opts = options.get();
                        if opts.has_next() {
                            on_change_page.run(opts.current_page + 1);
                        }
                    }
                >
                    <Icon icon=icons::CHEVRON_RIGHT />
                </button>
            </div>
            <select
                class=css::size_select
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change_size.run(size);
                    }
                }
            >
                {PAGE_SIZES
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || options.get().page_size == size
                            >
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

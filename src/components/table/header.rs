//! Table header cells with three-state sort cycling.

use leptos::prelude::*;

use crate::components::icons;
use crate::components::table::column::{SortOptions, TableColumn};
use crate::core::sort::{SortDirection, cycle_column, direction_of};
use leptos_icons::Icon;

stylance::import_crate_style!(css, "src/components/table/table.module.css");

/// One `<th>`; clickable when the column appears in the sort spec.
#[component]
pub fn HeaderCell(column: TableColumn, sort: Option<SortOptions>) -> impl IntoView {
    let direction = Signal::derive(move || {
        let sort = sort?;
        let accessor = column.accessor?;
        sort.entries.with(|entries| direction_of(entries, accessor))
    });

    let handle_click = move |_| {
        if let Some(sort) = sort
            && let Some(accessor) = column.accessor
            && direction.get_untracked().is_some()
        {
            sort.entries
                .update(|entries| *entries = cycle_column(entries, accessor, sort.single_sort));
        }
    };

    view! {
        <th
            class=move || {
                if direction.get().is_some() {
                    format!("{} {}", css::header_cell, css::sortable)
                } else {
                    css::header_cell.to_string()
                }
            }
            on:click=handle_click
        >
            <span class=css::header_label>{column.title}</span>
            {move || {
                direction.get().map(|direction| {
                    let icon = match direction {
                        SortDirection::Default => icons::CARET_UPDOWN,
                        SortDirection::Asc => icons::CARET_UP,
                        SortDirection::Desc => icons::CARET_DOWN,
                    };
                    view! { <span class=css::sort_icon><Icon icon=icon /></span> }
                })
            }}
        </th>
    }
}

//! Column definitions and option bundles for the generic table.

use leptos::prelude::*;
use serde_json::Value;

use crate::core::sort::SortEntry;

/// Renders one cell from its extracted value.
///
/// Receives the value found at the column's accessor path (if any) and, when
/// the table was given a `row_link`, a callback that navigates to the row's
/// detail view. Plain function pointers keep column definitions `Copy`.
pub type CellRenderer = fn(Option<Value>, Option<Callback<()>>) -> AnyView;

/// Declarative definition of a single table column.
#[derive(Clone, Copy)]
pub struct TableColumn {
    pub title: &'static str,
    /// Dotted path into the row object; `None` for purely rendered columns.
    pub accessor: Option<&'static str>,
    /// Dotted path of the row field identifying the navigation target; cells
    /// of this column receive the table's `row_link` wired to that id.
    pub id_accessor: Option<&'static str>,
    /// Relative column width, e.g. `"15%"`.
    pub width_ratio: &'static str,
    /// Custom cell renderer; the default prints the value as text.
    pub render: Option<CellRenderer>,
}

impl TableColumn {
    pub const fn new(title: &'static str, accessor: &'static str, width_ratio: &'static str) -> Self {
        Self {
            title,
            accessor: Some(accessor),
            id_accessor: None,
            width_ratio,
            render: None,
        }
    }

    pub const fn with_render(mut self, render: CellRenderer) -> Self {
        self.render = Some(render);
        self
    }

    pub const fn with_link(mut self, id_accessor: &'static str) -> Self {
        self.id_accessor = Some(id_accessor);
        self
    }
}

/// Row selection wiring. The page owns the selection signal.
#[derive(Clone, Copy)]
pub struct SelectableRow {
    pub selected_rows: RwSignal<Vec<Value>>,
    /// Selects every row across all pages (`true`) or clears (`false`).
    pub on_select_all_pages: Option<Callback<bool>>,
}

/// Column sorting wiring. The page owns the ordered sort spec.
#[derive(Clone, Copy)]
pub struct SortOptions {
    pub entries: RwSignal<Vec<SortEntry>>,
    /// When set, cycling one column resets every other column to default.
    pub single_sort: bool,
}

/// An action button shown in the table's support bar.
///
/// Buttons that act on the selection are disabled while it is empty.
#[derive(Clone, Copy)]
pub struct SupportButton {
    pub label: &'static str,
    pub on_click: Callback<()>,
    pub needs_selection: bool,
}

impl SupportButton {
    pub fn new(label: &'static str, on_click: Callback<()>) -> Self {
        Self {
            label,
            on_click,
            needs_selection: false,
        }
    }

    pub fn selection_action(label: &'static str, on_click: Callback<()>) -> Self {
        Self {
            label,
            on_click,
            needs_selection: true,
        }
    }
}

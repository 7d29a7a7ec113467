//! Sort-direction state machine for table column headers.
//!
//! Each sortable column cycles Default -> Asc -> Desc -> Default. The sort
//! spec is an ordered sequence; the most recently cycled column is appended
//! last, and in single-sort mode it is the sole non-default entry.

/// Direction of a single sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Default,
    Asc,
    Desc,
}

impl SortDirection {
    /// Advance one step in the fixed Default -> Asc -> Desc -> Default cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Default => Self::Asc,
            Self::Asc => Self::Desc,
            Self::Desc => Self::Default,
        }
    }

    /// Wire rendering used in the `sort` request parameter.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Asc => Some("ASC"),
            Self::Desc => Some("DESC"),
        }
    }
}

/// One entry of the ordered sort spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortEntry {
    /// Dotted-path accessor of the column this entry belongs to.
    pub accessor: &'static str,
    pub direction: SortDirection,
}

impl SortEntry {
    pub fn new(accessor: &'static str) -> Self {
        Self {
            accessor,
            direction: SortDirection::Default,
        }
    }
}

/// Apply a header click to the sort spec and return the updated sequence.
///
/// The clicked column's entry advances one direction step, is removed from its
/// old position, and is re-appended at the end. With `single_sort` every other
/// entry is reset to [`SortDirection::Default`], so the clicked column is the
/// only one driving the request. Clicking a column with no entry is a no-op.
pub fn cycle_column(spec: &[SortEntry], accessor: &str, single_sort: bool) -> Vec<SortEntry> {
    let Some(index) = spec.iter().position(|entry| entry.accessor == accessor) else {
        return spec.to_vec();
    };

    let updated = SortEntry {
        accessor: spec[index].accessor,
        direction: spec[index].direction.next(),
    };

    let mut next: Vec<SortEntry> = spec
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, entry)| {
            if single_sort {
                SortEntry {
                    accessor: entry.accessor,
                    direction: SortDirection::Default,
                }
            } else {
                *entry
            }
        })
        .collect();
    next.push(updated);
    next
}

/// Render the active sort as a `"accessor,DIRECTION"` request parameter.
///
/// The active entry is the first one whose direction is not default.
pub fn active_param(spec: &[SortEntry]) -> Option<String> {
    spec.iter().find_map(|entry| {
        entry
            .direction
            .as_param()
            .map(|direction| format!("{},{}", entry.accessor, direction))
    })
}

/// Current direction of a column within the spec, if the column is sortable.
pub fn direction_of(spec: &[SortEntry], accessor: &str) -> Option<SortDirection> {
    spec.iter()
        .find(|entry| entry.accessor == accessor)
        .map(|entry| entry.direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> Vec<SortEntry> {
        vec![
            SortEntry::new("name"),
            SortEntry::new("submittedAt"),
            SortEntry::new("date"),
        ]
    }

    #[test]
    fn test_three_clicks_return_to_default() {
        let mut current = spec();
        for expected in [SortDirection::Asc, SortDirection::Desc, SortDirection::Default] {
            current = cycle_column(&current, "name", true);
            assert_eq!(direction_of(&current, "name"), Some(expected));
        }
        assert_eq!(active_param(&current), None);
    }

    #[test]
    fn test_clicked_column_moves_to_end() {
        let next = cycle_column(&spec(), "name", true);
        assert_eq!(next.last().unwrap().accessor, "name");
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn test_single_sort_resets_other_columns() {
        let first = cycle_column(&spec(), "name", true);
        assert_eq!(active_param(&first).as_deref(), Some("name,ASC"));

        let second = cycle_column(&first, "date", true);
        assert_eq!(active_param(&second).as_deref(), Some("date,ASC"));
        assert_eq!(direction_of(&second, "name"), Some(SortDirection::Default));
        let active: Vec<_> = second
            .iter()
            .filter(|e| e.direction != SortDirection::Default)
            .collect();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_multi_sort_keeps_other_columns() {
        let first = cycle_column(&spec(), "name", false);
        let second = cycle_column(&first, "date", false);
        assert_eq!(direction_of(&second, "name"), Some(SortDirection::Asc));
        assert_eq!(direction_of(&second, "date"), Some(SortDirection::Asc));
        // First non-default entry drives the request.
        assert_eq!(active_param(&second).as_deref(), Some("name,ASC"));
    }

    #[test]
    fn test_unknown_column_is_noop() {
        let next = cycle_column(&spec(), "unknown", true);
        assert_eq!(next, spec());
    }
}

//! Selection set operations over dynamic table rows.
//!
//! The selection is owned by the page and mutated only through these
//! operations. Membership is decided by [`is_same_object`], so rows refetched
//! from the server still count as selected.

use serde_json::Value;

use crate::core::object::is_same_object;

/// Whether a row is a member of the selection.
pub fn is_selected(selected: &[Value], row: &Value) -> bool {
    selected.iter().any(|candidate| is_same_object(candidate, row))
}

/// Toggle a single row.
///
/// Checked appends the row; unchecked removes every structurally equal copy.
pub fn toggle_row(selected: &mut Vec<Value>, row: &Value, checked: bool) {
    if checked {
        selected.push(row.clone());
    } else {
        selected.retain(|candidate| !is_same_object(candidate, row));
    }
}

/// Toggle every row visible on the current page.
///
/// Checked adds the visible rows not already present; unchecked removes all
/// visible rows. Rows selected on other pages are left untouched.
pub fn toggle_all_visible(selected: &mut Vec<Value>, visible: &[Value], checked: bool) {
    selected.retain(|candidate| !visible.iter().any(|row| is_same_object(row, candidate)));
    if checked {
        selected.extend(visible.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toggle_row_check_and_uncheck() {
        let mut selected = vec![json!({"id": 1})];
        toggle_row(&mut selected, &json!({"id": 2}), true);
        assert_eq!(selected.len(), 2);

        // Uncheck removes by structure, not identity.
        toggle_row(&mut selected, &json!({"id": 1}), false);
        assert_eq!(selected, vec![json!({"id": 2})]);
    }

    #[test]
    fn test_toggle_all_visible_is_idempotent() {
        let visible = vec![json!({"id": 1}), json!({"id": 2})];
        let mut selected = Vec::new();

        toggle_all_visible(&mut selected, &visible, true);
        let once = selected.clone();
        toggle_all_visible(&mut selected, &visible, true);
        assert_eq!(selected, once);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_toggle_all_visible_unchecked_removes_only_visible() {
        let mut selected = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 9})];
        let visible = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})];

        toggle_all_visible(&mut selected, &visible, false);
        // {id:3} was never selected so is unaffected; {id:9} is on another page.
        assert_eq!(selected, vec![json!({"id": 9})]);
    }

    #[test]
    fn test_toggle_all_visible_keeps_other_pages_selection() {
        let mut selected = vec![json!({"id": 9})];
        let visible = vec![json!({"id": 1})];

        toggle_all_visible(&mut selected, &visible, true);
        assert!(is_selected(&selected, &json!({"id": 9})));
        assert!(is_selected(&selected, &json!({"id": 1})));
    }
}

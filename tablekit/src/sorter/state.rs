//! Sort state machine.

/// Class added to every sortable header cell.
pub const HEADER_CLASS: &str = "header";
/// Class on the active header cell while sorted ascending.
pub const SORT_UP_CLASS: &str = "headerSortUp";
/// Class on the active header cell while sorted descending.
pub const SORT_DOWN_CLASS: &str = "headerSortDown";

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// Active sort column, `None` before the first sort.
    pub column: Option<usize>,
    /// True when the active column sorts descending.
    pub reversed: bool,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a header click on `column`.
    ///
    /// Clicking the active column toggles the direction; any other column
    /// becomes active in its default direction.
    pub fn click(&mut self, column: usize, reverse_by_default: bool) {
        if self.column == Some(column) {
            self.reversed = !self.reversed;
        } else {
            self.column = Some(column);
            self.reversed = reverse_by_default;
        }
    }

    /// Indicator class for `column`, if it is the active column.
    pub fn indicator(&self, column: usize) -> Option<&'static str> {
        match self.column {
            Some(active) if active == column && self.reversed => Some(SORT_DOWN_CLASS),
            Some(active) if active == column => Some(SORT_UP_CLASS),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_no_column() {
        let state = SortState::new();
        assert_eq!(state.column, None);
        assert!(!state.reversed);
        assert_eq!(state.indicator(0), None);
    }

    #[test]
    fn test_click_same_column_toggles() {
        let mut state = SortState::new();
        state.click(2, false);
        assert_eq!(state.column, Some(2));
        assert!(!state.reversed);
        state.click(2, false);
        assert!(state.reversed);
        state.click(2, false);
        assert!(!state.reversed);
    }

    #[test]
    fn test_click_new_column_uses_default_direction() {
        let mut state = SortState::new();
        state.click(0, false);
        state.click(0, false);
        assert!(state.reversed);

        state.click(1, false);
        assert_eq!(state.column, Some(1));
        assert!(!state.reversed);

        state.click(3, true);
        assert_eq!(state.column, Some(3));
        assert!(state.reversed);
    }

    #[test]
    fn test_indicator_only_on_active_column() {
        let mut state = SortState::new();
        state.click(1, false);
        assert_eq!(state.indicator(1), Some(SORT_UP_CLASS));
        assert_eq!(state.indicator(0), None);
        state.click(1, false);
        assert_eq!(state.indicator(1), Some(SORT_DOWN_CLASS));
    }
}

//! How a hidden row is represented.
//!
//! Pagination and any row filter must agree on one marker, otherwise they
//! undo each other's work.

use serde::{Deserialize, Serialize};
use tabledom::Element;

/// The marker used to hide rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowMarker {
    /// Inline `display: none`.
    #[default]
    Style,
    /// A class name, e.g. `hide`.
    Class(String),
}

impl RowMarker {
    /// Show or hide `row` with this marker.
    pub fn apply(&self, row: &mut Element, visible: bool) {
        match self {
            RowMarker::Style => row.set_displayed(visible),
            RowMarker::Class(class) if visible => {
                row.remove_class(class);
            }
            RowMarker::Class(class) => {
                row.add_class(class);
            }
        }
    }

    /// True when this marker currently hides `row`.
    pub fn hides(&self, row: &Element) -> bool {
        match self {
            RowMarker::Style => !row.is_displayed(),
            RowMarker::Class(class) => row.has_class(class),
        }
    }
}

/// True when `row` is hidden by inline style or carries `hide_class`.
pub fn is_row_hidden(row: &Element, hide_class: &str) -> bool {
    !row.is_displayed() || row.has_class(hide_class)
}

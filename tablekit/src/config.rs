//! Widget configuration.
//!
//! Every config deserializes from a partial document; missing fields take
//! their defaults.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::marker::RowMarker;

/// Sort engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SorterConfig {
    /// Offset within a block of the row whose cells are compared.
    pub representative_offset: usize,

    /// Number of consecutive rows sorted as one unit. 0 is treated as 1.
    pub rows_per_block: usize,

    /// Copy first-row cell widths onto the header cells at attach time.
    pub fixed_width: bool,

    /// Class selecting the sortable `thead` row. The first row when unset.
    pub header_row_class: Option<String>,

    /// Columns whose first sort is descending.
    pub reverse_by_default: BTreeSet<usize>,

    /// Per-column representative row offsets (column exceptions).
    pub column_offsets: BTreeMap<usize, usize>,

    /// Per-column parser ids replacing detection.
    pub parser_overrides: BTreeMap<usize, String>,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            representative_offset: 0,
            rows_per_block: 1,
            fixed_width: false,
            header_row_class: None,
            reverse_by_default: BTreeSet::new(),
            column_offsets: BTreeMap::new(),
            parser_overrides: BTreeMap::new(),
        }
    }
}

impl SorterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block size.
    pub fn rows_per_block(mut self, rows: usize) -> Self {
        self.rows_per_block = rows;
        self
    }

    /// Set the default representative row offset.
    pub fn representative_offset(mut self, offset: usize) -> Self {
        self.representative_offset = offset;
        self
    }

    /// Enable or disable fixed header widths.
    pub fn fixed_width(mut self, fixed: bool) -> Self {
        self.fixed_width = fixed;
        self
    }

    /// Select the header row by class.
    pub fn header_row_class(mut self, class: impl Into<String>) -> Self {
        self.header_row_class = Some(class.into());
        self
    }

    /// Make the first sort of `column` descending.
    pub fn reverse_by_default(mut self, column: usize) -> Self {
        self.reverse_by_default.insert(column);
        self
    }

    /// Compare `column` using the row at `offset` within each block.
    pub fn column_offset(mut self, column: usize, offset: usize) -> Self {
        self.column_offsets.insert(column, offset);
        self
    }

    /// Force `column` to use the parser named `parser_id`.
    pub fn override_parser(mut self, column: usize, parser_id: impl Into<String>) -> Self {
        self.parser_overrides.insert(column, parser_id.into());
        self
    }

    /// Effective block size, at least 1.
    pub fn block_size(&self) -> usize {
        self.rows_per_block.max(1)
    }

    /// Representative row offset for `column`.
    pub fn offset_for(&self, column: usize) -> usize {
        self.column_offsets
            .get(&column)
            .copied()
            .unwrap_or(self.representative_offset)
    }
}

/// Pagination controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Class of the "first page" control.
    pub css_first: String,
    /// Class of the "previous page" control.
    pub css_prev: String,
    /// Class of the "next page" control.
    pub css_next: String,
    /// Class of the "last page" control.
    pub css_last: String,
    /// Class of the page-size `select`.
    pub css_page_size: String,
    /// Class of the `input` showing `current/total`.
    pub css_page_display: String,
    /// Page size used until the page-size control says otherwise.
    pub rows_per_page: usize,
    /// How rows outside the current page are hidden.
    pub marker: RowMarker,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            css_first: "first".into(),
            css_prev: "prev".into(),
            css_next: "next".into(),
            css_last: "last".into(),
            css_page_size: "pagesize".into(),
            css_page_display: "pagedisplay".into(),
            rows_per_page: 10,
            marker: RowMarker::Style,
        }
    }
}

impl PaginatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows_per_page(mut self, rows: usize) -> Self {
        self.rows_per_page = rows;
        self
    }

    pub fn marker(mut self, marker: RowMarker) -> Self {
        self.marker = marker;
        self
    }

    pub fn css_first(mut self, class: impl Into<String>) -> Self {
        self.css_first = class.into();
        self
    }

    pub fn css_prev(mut self, class: impl Into<String>) -> Self {
        self.css_prev = class.into();
        self
    }

    pub fn css_next(mut self, class: impl Into<String>) -> Self {
        self.css_next = class.into();
        self
    }

    pub fn css_last(mut self, class: impl Into<String>) -> Self {
        self.css_last = class.into();
        self
    }

    pub fn css_page_size(mut self, class: impl Into<String>) -> Self {
        self.css_page_size = class.into();
        self
    }

    pub fn css_page_display(mut self, class: impl Into<String>) -> Self {
        self.css_page_display = class.into();
        self
    }
}

/// Striped table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripeConfig {
    /// Skip hidden rows when alternating.
    pub filter_hidden_rows: bool,
    /// Class marking a row as hidden.
    pub hide_class: String,
    pub odd_class: String,
    pub even_class: String,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            filter_hidden_rows: false,
            hide_class: "hide".into(),
            odd_class: "odd".into(),
            even_class: "even".into(),
        }
    }
}

impl StripeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_hidden_rows(mut self, filter: bool) -> Self {
        self.filter_hidden_rows = filter;
        self
    }

    pub fn hide_class(mut self, class: impl Into<String>) -> Self {
        self.hide_class = class.into();
        self
    }

    pub fn odd_class(mut self, class: impl Into<String>) -> Self {
        self.odd_class = class.into();
        self
    }

    pub fn even_class(mut self, class: impl Into<String>) -> Self {
        self.even_class = class.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_sorter_config_keeps_defaults() {
        let config: SorterConfig = serde_json::from_str(
            r#"{ "rows_per_block": 2, "column_offsets": { "3": 1 }, "parser_overrides": { "0": "text" } }"#,
        )
        .unwrap();
        assert_eq!(config.block_size(), 2);
        assert_eq!(config.offset_for(3), 1);
        assert_eq!(config.offset_for(0), 0);
        assert_eq!(config.parser_overrides.get(&0).map(String::as_str), Some("text"));
        assert!(!config.fixed_width);
    }

    #[test]
    fn test_zero_block_size_is_one() {
        assert_eq!(SorterConfig::new().rows_per_block(0).block_size(), 1);
    }

    #[test]
    fn test_paginator_config_marker_from_json() {
        let config: PaginatorConfig =
            serde_json::from_str(r#"{ "rows_per_page": 25, "marker": { "class": "hide" } }"#)
                .unwrap();
        assert_eq!(config.rows_per_page, 25);
        assert_eq!(config.marker, RowMarker::Class("hide".into()));
        assert_eq!(config.css_next, "next");
    }
}

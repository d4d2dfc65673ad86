//! Table documents: the JSON input of the demo.
//!
//! ```json
//! {
//!   "headers": ["Item", "Price"],
//!   "rows": [["apple", "$50"], ["banana", "($20)"]],
//!   "sorter": { "reverse_by_default": [1] },
//!   "paginator": { "rows_per_page": 5 },
//!   "stripes": { "filter_hidden_rows": true },
//!   "page_sizes": [5, 10, 25]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tabledom::Element;
use tablekit::{PaginatorConfig, SorterConfig, StripeConfig};

use crate::error::DemoError;

pub const ROOT_ID: &str = "demo";
pub const TABLE_ID: &str = "table";
pub const PAGER_ID: &str = "pager";
pub const PAGE_SIZE_ID: &str = "pager-size";

/// Id of the pager control for `class`.
pub fn control_id(class: &str) -> String {
    format!("{PAGER_ID}-{class}")
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableDocument {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(default)]
    pub sorter: SorterConfig,
    #[serde(default)]
    pub paginator: PaginatorConfig,
    /// Stripe rows when present.
    #[serde(default)]
    pub stripes: Option<StripeConfig>,
    /// Extra choices for the page-size select.
    #[serde(default)]
    pub page_sizes: Vec<usize>,
}

impl TableDocument {
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path).map_err(|source| DemoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DemoError::Document {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every row must have one cell per header.
    pub fn validate(&self) -> Result<(), DemoError> {
        let expected = self.headers.len();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row, cells)) => Err(DemoError::RowWidth {
                row,
                found: cells.len(),
                expected,
            }),
            None => Ok(()),
        }
    }

    /// Build the element tree: the table and its pagination host.
    pub fn build(&self) -> Result<Element, DemoError> {
        self.validate()?;

        let table = Element::table()
            .id(TABLE_ID)
            .child(Element::thead().child(Element::header_row_of(self.headers.iter().cloned())))
            .child(Element::tbody().children(self.rows.iter().enumerate().map(|(i, cells)| {
                Element::row_of(cells.iter().cloned()).id(format!("row-{i}"))
            })));

        Ok(Element::div().id(ROOT_ID).child(table).child(self.pager()))
    }

    fn pager(&self) -> Element {
        let config = &self.paginator;
        let mut sizes = vec![config.rows_per_page];
        sizes.extend(
            self.page_sizes
                .iter()
                .copied()
                .filter(|&n| n != config.rows_per_page),
        );

        let button = |class: &str, label: &str| {
            Element::button(label).id(control_id(class)).class(class)
        };
        Element::div()
            .id(PAGER_ID)
            .child(button(&config.css_first, "<<"))
            .child(button(&config.css_prev, "<"))
            .child(button(&config.css_next, ">"))
            .child(button(&config.css_last, ">>"))
            .child(
                Element::select(sizes.iter().map(usize::to_string))
                    .id(PAGE_SIZE_ID)
                    .class(&config.css_page_size),
            )
            .child(
                Element::input("")
                    .id(control_id(&config.css_page_display))
                    .class(&config.css_page_display),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabledom::{find_element, Tag};

    fn document(json: &str) -> TableDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_document_uses_defaults() {
        let doc = document(r#"{ "headers": ["A"], "rows": [["1"], ["2"]] }"#);
        assert_eq!(doc.paginator.rows_per_page, 10);
        assert!(doc.stripes.is_none());

        let root = doc.build().unwrap();
        assert_eq!(find_element(&root, TABLE_ID).unwrap().tag, Tag::Table);
        let select = find_element(&root, PAGE_SIZE_ID).unwrap();
        assert_eq!(select.value(), Some("10"));
        assert!(find_element(&root, &control_id("next")).is_some());
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let doc = document(r#"{ "headers": ["A", "B"], "rows": [["1", "2"], ["3"]] }"#);
        assert!(matches!(
            doc.build(),
            Err(DemoError::RowWidth {
                row: 1,
                found: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_page_sizes_follow_configured_size() {
        let doc = document(
            r#"{ "headers": ["A"], "rows": [], "paginator": { "rows_per_page": 5 }, "page_sizes": [5, 25] }"#,
        );
        let root = doc.build().unwrap();
        let options: Vec<_> = find_element(&root, PAGE_SIZE_ID)
            .unwrap()
            .child_elements()
            .iter()
            .filter_map(Element::value)
            .collect();
        assert_eq!(options, vec!["5", "25"]);
    }
}

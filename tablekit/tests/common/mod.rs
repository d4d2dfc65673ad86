//! Shared fixtures for the widget tests.

#![allow(dead_code)]

use std::sync::Arc;

use tabledom::{find_element, first_by_tag, Element, Tag};
use tablekit::ParserRegistry;

pub fn registry() -> Arc<ParserRegistry> {
    Arc::new(ParserRegistry::builtin().unwrap())
}

/// A table `id` inside a `div#root`, with one header row and rows `r0`, `r1`, ….
pub fn table(id: &str, headers: &[&str], rows: &[&[&str]]) -> Element {
    Element::div().id("root").child(table_element(id, headers, rows))
}

pub fn table_element(id: &str, headers: &[&str], rows: &[&[&str]]) -> Element {
    Element::table()
        .id(id)
        .child(
            Element::thead().child(
                Element::header_row_of(headers.iter().copied()).id(format!("{id}-head")),
            ),
        )
        .child(
            Element::tbody().id(format!("{id}-body")).children(
                rows.iter()
                    .enumerate()
                    .map(|(i, cells)| Element::row_of(cells.iter().copied()).id(format!("r{i}"))),
            ),
        )
}

/// A single-column table whose rows hold `0..count`.
pub fn numbered_table(id: &str, count: usize) -> Element {
    let texts: Vec<String> = (0..count).map(|i| i.to_string()).collect();
    let rows: Vec<[&str; 1]> = texts.iter().map(|t| [t.as_str()]).collect();
    let rows: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
    table(id, &["#"], &rows)
}

/// A pagination host with the default control classes.
pub fn pager(id: &str, page_size: &str) -> Element {
    Element::div()
        .id(id)
        .child(Element::button("«").id("first").class("first"))
        .child(Element::button("‹").id("prev").class("prev"))
        .child(Element::button("›").id("next").class("next"))
        .child(Element::button("»").id("last").class("last"))
        .child(
            Element::select([page_size, "10", "20", "50"])
                .id("size")
                .class("pagesize"),
        )
        .child(Element::input("").id("display").class("pagedisplay"))
}

fn body<'a>(root: &'a Element, table_id: &str) -> &'a Element {
    first_by_tag(find_element(root, table_id).unwrap(), Tag::TBody).unwrap()
}

/// Text of `column` for every body row, in order.
pub fn column_texts(root: &Element, table_id: &str, column: usize) -> Vec<String> {
    body(root, table_id)
        .child_elements()
        .iter()
        .map(|row| row.cells().nth(column).map(Element::text_content).unwrap_or_default())
        .collect()
}

/// Text of `column` for every displayed body row, in order.
pub fn visible_texts(root: &Element, table_id: &str, column: usize) -> Vec<String> {
    body(root, table_id)
        .child_elements()
        .iter()
        .filter(|row| row.is_displayed())
        .map(|row| row.cells().nth(column).map(Element::text_content).unwrap_or_default())
        .collect()
}

/// Ids of every body row, in order.
pub fn row_ids(root: &Element, table_id: &str) -> Vec<String> {
    body(root, table_id)
        .child_elements()
        .iter()
        .map(|row| row.id.clone())
        .collect()
}

pub fn strings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

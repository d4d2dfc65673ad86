//! Body row access shared by the widgets.

use tabledom::{find_element, find_element_mut, first_by_tag, first_by_tag_mut, Element, Tag};

/// The first `tbody` of table `table_id`.
pub(crate) fn body<'a>(root: &'a Element, table_id: &str) -> Option<&'a Element> {
    find_element(root, table_id).and_then(|table| first_by_tag(table, Tag::TBody))
}

pub(crate) fn body_mut<'a>(root: &'a mut Element, table_id: &str) -> Option<&'a mut Element> {
    find_element_mut(root, table_id).and_then(|table| first_by_tag_mut(table, Tag::TBody))
}

/// Number of body rows of table `table_id`, 0 when it has no body.
pub(crate) fn row_count(root: &Element, table_id: &str) -> usize {
    body(root, table_id).map_or(0, |body| {
        body.child_elements()
            .iter()
            .filter(|e| e.tag == Tag::Tr)
            .count()
    })
}

/// Mutable body rows of table `table_id`, in order.
pub(crate) fn rows_mut<'a>(
    root: &'a mut Element,
    table_id: &str,
) -> impl Iterator<Item = &'a mut Element> {
    body_mut(root, table_id)
        .map(|body| body.child_elements_mut())
        .unwrap_or_default()
        .iter_mut()
        .filter(|e| e.tag == Tag::Tr)
}

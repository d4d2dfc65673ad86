//! Tree queries by tag and class.

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element};
use crate::types::Tag;

/// All descendants (excluding `root`) in document order matching `pred`.
fn collect<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if let Content::Children(children) = &root.content {
        for child in children {
            if pred(child) {
                out.push(child);
            }
            collect(child, pred, out);
        }
    }
}

/// Descendants carrying `class`, in document order.
pub fn descendants_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect(root, &|e| e.has_class(class), &mut out);
    out
}

/// Descendants with the given tag, in document order.
pub fn descendants_by_tag(root: &Element, tag: Tag) -> Vec<&Element> {
    let mut out = Vec::new();
    collect(root, &|e| e.tag == tag, &mut out);
    out
}

/// Descendants with the given tag and, when `class` is set, that class.
pub fn descendants_by_tag_and_class<'a>(
    root: &'a Element,
    tag: Tag,
    class: Option<&str>,
) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect(
        root,
        &|e| e.tag == tag && class.is_none_or(|c| e.has_class(c)),
        &mut out,
    );
    out
}

/// First descendant with the given tag, depth first.
pub fn first_by_tag(root: &Element, tag: Tag) -> Option<&Element> {
    root.child_elements().iter().find_map(|child| {
        if child.tag == tag {
            Some(child)
        } else {
            first_by_tag(child, tag)
        }
    })
}

/// First descendant with the given tag, depth first, mutably.
pub fn first_by_tag_mut(root: &mut Element, tag: Tag) -> Option<&mut Element> {
    for child in root.child_elements_mut() {
        if child.tag == tag {
            return Some(child);
        }
        if let Some(found) = first_by_tag_mut(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Display width of a string in terminal columns.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Display, Style, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Visual
    pub style: Style,

    /// Form value for `input`, `select` and `option` elements.
    pub value: Option<String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            classes: Vec::new(),
            content: Content::None,
            style: Style::default(),
            value: None,
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TBody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th(text: impl Into<String>) -> Self {
        Self::new(Tag::Th).text(text)
    }

    pub fn td(text: impl Into<String>) -> Self {
        Self::new(Tag::Td).text(text)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(Tag::Button).text(text)
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(Tag::Input)
        }
    }

    /// Create a select element. The first option becomes the selected value.
    pub fn select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<Element> = options.into_iter().map(Self::option).collect();
        let value = options.first().and_then(|o| o.value.clone());
        Self {
            value,
            ..Self::new(Tag::Select).children(options)
        }
    }

    pub fn option(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            content: Content::Text(value.clone()),
            value: Some(value),
            ..Self::new(Tag::Option)
        }
    }

    /// Build a `tr` holding one `td` per text.
    pub fn row_of<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::tr().children(cells.into_iter().map(Self::td))
    }

    /// Build a `tr` holding one `th` per text.
    pub fn header_row_of<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::tr().children(cells.into_iter().map(Self::th))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Visual
    pub fn display(mut self, display: Display) -> Self {
        self.style.display = display;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Child elements, empty for text or empty content.
    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    /// Mutable child elements, empty for text or empty content.
    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Remove and return all child elements, leaving the element empty.
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            other => {
                self.content = other;
                Vec::new()
            }
        }
    }

    /// Replace all child elements.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    /// Cell children (`th`/`td`) of a row.
    pub fn cells(&self) -> impl Iterator<Item = &Element> {
        self.child_elements().iter().filter(|e| e.tag.is_cell())
    }

    /// Cell children (`th`/`td`) of a row, mutably.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.child_elements_mut()
            .iter_mut()
            .filter(|e| e.tag.is_cell())
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }

    // Classes
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns true if it was not present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if class.is_empty() || self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Remove every class in `remove`, then add every class in `add`.
    pub fn add_remove_classes(&mut self, remove: &[&str], add: &[&str]) {
        for class in remove {
            self.remove_class(class);
        }
        for class in add {
            self.add_class(class);
        }
    }

    // Visibility
    pub fn is_displayed(&self) -> bool {
        self.style.display != Display::None
    }

    pub fn set_displayed(&mut self, displayed: bool) {
        self.style.display = if displayed {
            Display::Default
        } else {
            Display::None
        };
    }

    // Form values
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }
}

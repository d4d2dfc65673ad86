use std::fmt;

/// Element tag names understood by the table widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Div,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
    Input,
    Select,
    Option,
    Button,
}

impl Tag {
    /// Lowercase HTML name of the tag.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Table => "table",
            Tag::THead => "thead",
            Tag::TBody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Input => "input",
            Tag::Select => "select",
            Tag::Option => "option",
            Tag::Button => "button",
        }
    }

    /// True for `th` and `td`.
    pub fn is_cell(self) -> bool {
        matches!(self, Tag::Th | Tag::Td)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inline `display` hook. `None` hides the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Default,
    None,
}

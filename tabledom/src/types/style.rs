use super::Display;

/// Inline style hooks. Only the properties the widgets read or write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub display: Display,
    /// Fixed width in display columns.
    pub width: Option<u16>,
}

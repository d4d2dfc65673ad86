//! Data parsers.
//!
//! A parser decides whether raw cell text has its format (`classify`), turns
//! the text into a [`SortKey`] (`normalize`), and orders two keys
//! (`compare`). Parsers live in a [`ParserRegistry`] whose registration order
//! is their priority.

mod builtin;
mod registry;

pub use registry::ParserRegistry;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Which default compare family a parser uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserKind {
    Numeric,
    Text,
}

/// A normalized cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Numeric view of the key. Text is parsed like `parseFloat`, with
    /// unparseable text coerced to 0.
    pub fn as_number(&self) -> f64 {
        match self {
            SortKey::Number(n) => *n,
            SortKey::Text(s) => parse_number(s),
        }
    }

    /// Text view of the key.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            SortKey::Number(n) => Cow::Owned(n.to_string()),
            SortKey::Text(s) => Cow::Borrowed(s),
        }
    }
}

type ClassifyFn = Box<dyn Fn(&str) -> bool + Send + Sync>;
type NormalizeFn = Box<dyn Fn(&str) -> SortKey + Send + Sync>;

/// Orders two normalized keys.
pub type CompareFn = fn(&SortKey, &SortKey) -> Ordering;

/// A classify/normalize/compare triple with a stable id.
pub struct Parser {
    id: String,
    kind: ParserKind,
    catch_all: bool,
    classify: ClassifyFn,
    normalize: NormalizeFn,
    compare: CompareFn,
}

impl Parser {
    /// Create a parser. The compare function defaults to the one for `kind`.
    pub fn new<C, N>(id: impl Into<String>, kind: ParserKind, classify: C, normalize: N) -> Self
    where
        C: Fn(&str) -> bool + Send + Sync + 'static,
        N: Fn(&str) -> SortKey + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            kind,
            catch_all: false,
            classify: Box::new(classify),
            normalize: Box::new(normalize),
            compare: default_compare(kind),
        }
    }

    /// Create a parser that classifies every input as its own.
    pub fn catch_all<N>(id: impl Into<String>, kind: ParserKind, normalize: N) -> Self
    where
        N: Fn(&str) -> SortKey + Send + Sync + 'static,
    {
        Self {
            catch_all: true,
            ..Self::new(id, kind, |_| true, normalize)
        }
    }

    /// Replace the compare function.
    pub fn with_compare(mut self, compare: CompareFn) -> Self {
        self.compare = compare;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ParserKind {
        self.kind
    }

    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    pub fn classify(&self, raw: &str) -> bool {
        (self.classify)(raw)
    }

    pub fn normalize(&self, raw: &str) -> SortKey {
        (self.normalize)(raw)
    }

    pub fn compare(&self, a: &SortKey, b: &SortKey) -> Ordering {
        (self.compare)(a, b)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("catch_all", &self.catch_all)
            .finish_non_exhaustive()
    }
}

/// Compare function used by parsers of `kind` unless they override it.
pub fn default_compare(kind: ParserKind) -> CompareFn {
    match kind {
        ParserKind::Numeric => numeric_compare,
        ParserKind::Text => text_compare,
    }
}

/// `float(a) - float(b)` as an ordering.
pub fn numeric_compare(a: &SortKey, b: &SortKey) -> Ordering {
    let diff = a.as_number() - b.as_number();
    diff.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Lexicographic ordering of the text forms.
pub fn text_compare(a: &SortKey, b: &SortKey) -> Ordering {
    a.as_text().cmp(&b.as_text())
}

/// Parse the longest leading float in `s`, ignoring leading whitespace.
///
/// Mirrors `parseFloat`: `"12px"` is 12, `"-3.5e2x"` is -350, `"abc"` is
/// `None`.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        let rest = &s[int_start..];
        return rest.starts_with("Infinity").then(|| {
            if int_start > 0 && bytes[0] == b'-' {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        });
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// [`parse_float_prefix`] with unparseable input coerced to 0.
pub fn parse_number(s: &str) -> f64 {
    parse_float_prefix(s).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12"), Some(12.0));
        assert_eq!(parse_float_prefix("  -12.5kg"), Some(-12.5));
        assert_eq!(parse_float_prefix("+3"), Some(3.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("1.234.567"), Some(1.234));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn test_numeric_compare_coerces_text() {
        let a = SortKey::Number(5.0);
        let b = SortKey::Text("50".into());
        assert_eq!(numeric_compare(&a, &b), Ordering::Less);
        assert_eq!(
            numeric_compare(&SortKey::Text("junk".into()), &SortKey::Number(0.0)),
            Ordering::Equal
        );
        assert_eq!(
            numeric_compare(&SortKey::Number(f64::NAN), &SortKey::Number(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_compare_is_lexicographic() {
        let apple = SortKey::Text("apple".into());
        let banana = SortKey::Text("banana".into());
        assert_eq!(text_compare(&apple, &banana), Ordering::Less);
        assert_eq!(text_compare(&banana, &banana), Ordering::Equal);
        // Upper case sorts before lower case.
        assert_eq!(
            text_compare(&SortKey::Text("Zed".into()), &apple),
            Ordering::Less
        );
    }
}

use std::cmp::Ordering;

use tablekit::{Parser, ParserKind, ParserRegistry, RegistryError, SortKey};

fn resolve_id(registry: &ParserRegistry, raw: &str) -> String {
    registry.resolve(raw).id().to_string()
}

fn normalized(registry: &ParserRegistry, raw: &str) -> f64 {
    registry.resolve(raw).normalize(raw).as_number()
}

// ============================================================================
// Priority
// ============================================================================

#[test]
fn test_builtin_priority_order() {
    let registry = ParserRegistry::builtin().unwrap();
    let ids: Vec<&str> = registry.iter().map(|p| p.id()).collect();
    assert_eq!(
        ids,
        vec![
            "digit",
            "currency",
            "usLongDate",
            "shortDate",
            "time",
            "blackFontCurrency",
            "text",
        ]
    );
    assert_eq!(registry.len(), 7);
    assert!(registry.catch_all().is_catch_all());
}

#[test]
fn test_parenthesized_digit_is_negative() {
    let registry = ParserRegistry::builtin().unwrap();
    assert_eq!(resolve_id(&registry, "(1,234)"), "digit");
    assert_eq!(normalized(&registry, "(1,234)"), -1234.0);
    assert_eq!(normalized(&registry, "(12)"), -12.0);
}

#[test]
fn test_parenthesized_currency_is_negative() {
    let registry = ParserRegistry::builtin().unwrap();
    assert_eq!(resolve_id(&registry, "$(1,234)"), "currency");
    assert_eq!(normalized(&registry, "$(1,234)"), -1234.0);
    assert_eq!(resolve_id(&registry, "($20)"), "currency");
    assert_eq!(normalized(&registry, "($20)"), -20.0);
}

#[test]
fn test_digit_formats() {
    let registry = ParserRegistry::builtin().unwrap();
    for raw in ["42", "-7", "+3", "1,000,000", "3.25", " 12 "] {
        assert_eq!(resolve_id(&registry, raw), "digit", "{raw:?}");
    }
    assert_eq!(normalized(&registry, "1,000,000"), 1_000_000.0);
    assert_eq!(normalized(&registry, "3.25"), 3.25);
    assert_eq!(normalized(&registry, "1'234"), 1234.0);
}

#[test]
fn test_currency_formats() {
    let registry = ParserRegistry::builtin().unwrap();
    assert_eq!(resolve_id(&registry, "$50"), "currency");
    assert_eq!(normalized(&registry, "$1,234.50"), 1234.5);
    assert_eq!(normalized(&registry, "£7"), 7.0);
    assert_eq!(normalized(&registry, "€0.99"), 0.99);
    assert_eq!(normalized(&registry, "¥300"), 300.0);
}

#[test]
fn test_us_long_date() {
    let registry = ParserRegistry::builtin().unwrap();
    let raw = "January 1, 2000, 1:30 PM";
    assert_eq!(resolve_id(&registry, raw), "usLongDate");
    // 2000-01-01T13:30:00Z
    assert_eq!(normalized(&registry, raw), 946_733_400_000.0);

    // Seconds are ignored.
    assert_eq!(
        normalized(&registry, "January 1, 2000, 1:30:59 p.m."),
        946_733_400_000.0
    );
}

#[test]
fn test_us_long_date_month_by_first_three_letters() {
    let registry = ParserRegistry::builtin().unwrap();
    // 2013-09-05T13:30:00Z
    for raw in [
        "Sept 5, 2013, 1:30 PM",
        "Sept. 5, 2013, 1:30 PM",
        "September 5, 2013, 1:30 PM",
        "SEP 5, 2013, 1:30 pm",
    ] {
        assert_eq!(resolve_id(&registry, raw), "usLongDate", "{raw:?}");
        assert_eq!(normalized(&registry, raw), 1_378_387_800_000.0, "{raw:?}");
    }
}

#[test]
fn test_us_long_date_rejects_unknown_month() {
    let registry = ParserRegistry::builtin().unwrap();
    assert_eq!(resolve_id(&registry, "Foo 5, 2013, 1:30 PM"), "text");
}

#[test]
fn test_us_long_date_twelve_oclock() {
    let registry = ParserRegistry::builtin().unwrap();
    // 12 AM is midnight, 12 PM is noon.
    assert_eq!(
        normalized(&registry, "Jan 1, 2000, 12:00 AM"),
        946_684_800_000.0
    );
    assert_eq!(
        normalized(&registry, "Jan 1, 2000, 12:00 PM"),
        946_728_000_000.0
    );
}

#[test]
fn test_short_date() {
    let registry = ParserRegistry::builtin().unwrap();
    assert_eq!(resolve_id(&registry, "2000/01/02"), "shortDate");
    assert_eq!(resolve_id(&registry, "2000-1-2"), "shortDate");
    assert_eq!(normalized(&registry, "2000/01/02"), 946_771_200_000.0);
    assert_eq!(
        normalized(&registry, "2000-1-2"),
        normalized(&registry, "2000/01/02")
    );
}

#[test]
fn test_time() {
    let registry = ParserRegistry::builtin().unwrap();
    assert_eq!(resolve_id(&registry, "13:45"), "time");
    assert_eq!(resolve_id(&registry, "1:45pm"), "time");
    assert_eq!(normalized(&registry, "13:45"), normalized(&registry, "1:45pm"));
    // 2000-01-01T13:45:00Z
    assert_eq!(normalized(&registry, "13:45"), 946_734_300_000.0);
    assert!(normalized(&registry, "9:05") < normalized(&registry, "10:00"));
}

#[test]
fn test_black_font_currency() {
    let registry = ParserRegistry::builtin().unwrap();
    let raw = r#"<font color="black">$1,234.50</font>"#;
    assert_eq!(resolve_id(&registry, raw), "blackFontCurrency");
    assert_eq!(normalized(&registry, raw), 1234.5);
    // Parentheses are dropped with the symbols, not read as a sign.
    assert_eq!(
        normalized(&registry, r#"<font color="black">($20)</font>"#),
        20.0
    );
    assert_eq!(
        normalized(&registry, r#"<font color="black">(1,234)</font>"#),
        1234.0
    );
    assert_eq!(normalized(&registry, r#"<font color="black">0</font>"#), 0.0);

    // Markup around non-numbers is plain text.
    assert_eq!(
        resolve_id(&registry, r#"<font color="black">n/a</font>"#),
        "text"
    );
}

#[test]
fn test_text_catch_all() {
    let registry = ParserRegistry::builtin().unwrap();
    for raw in ["banana", "", "   ", "12 apples", "N/A"] {
        assert_eq!(resolve_id(&registry, raw), "text", "{raw:?}");
    }
    assert_eq!(
        registry.resolve("  banana ").normalize("  banana "),
        SortKey::Text("banana".into())
    );
}

#[test]
fn test_numeric_parsers_never_produce_nan() {
    let registry = ParserRegistry::builtin().unwrap();
    for parser in registry.iter().filter(|p| p.kind() == ParserKind::Numeric) {
        for raw in ["", "garbage", "$", "()", "99:99"] {
            let key = parser.normalize(raw);
            assert!(!key.as_number().is_nan(), "{} on {raw:?}", parser.id());
        }
    }
}

#[test]
fn test_numeric_compare_orders_by_difference() {
    let registry = ParserRegistry::builtin().unwrap();
    let currency = registry.get("currency").unwrap();
    let a = currency.normalize("($20)");
    let b = currency.normalize("$5");
    assert_eq!(currency.compare(&a, &b), Ordering::Less);
    assert_eq!(currency.compare(&b, &a), Ordering::Greater);
    assert_eq!(currency.compare(&a, &a), Ordering::Equal);
}

// ============================================================================
// Construction
// ============================================================================

fn percent() -> Parser {
    Parser::new(
        "percent",
        ParserKind::Numeric,
        |raw| raw.trim_end().ends_with('%'),
        |raw| SortKey::Number(raw.trim().trim_end_matches('%').parse().unwrap_or(0.0)),
    )
}

fn upper_text() -> Parser {
    Parser::catch_all("upper", ParserKind::Text, |raw| {
        SortKey::Text(raw.trim().to_uppercase())
    })
}

#[test]
fn test_custom_registry() {
    let registry = ParserRegistry::new(vec![percent()], upper_text()).unwrap();
    assert_eq!(resolve_id(&registry, "50%"), "percent");
    assert_eq!(resolve_id(&registry, "50"), "upper");
    assert_eq!(
        registry.resolve("abc").normalize("abc"),
        SortKey::Text("ABC".into())
    );
    assert!(registry.get("digit").is_none());
}

#[test]
fn test_custom_compare_overrides_kind_default() {
    fn descending(a: &SortKey, b: &SortKey) -> Ordering {
        b.as_number().total_cmp(&a.as_number())
    }
    let parser = percent().with_compare(descending);
    let (low, high) = (parser.normalize("1%"), parser.normalize("2%"));
    assert_eq!(parser.compare(&low, &high), Ordering::Greater);
}

#[test]
fn test_registry_requires_catch_all_terminal() {
    let err = ParserRegistry::new(Vec::new(), percent()).unwrap_err();
    assert!(matches!(err, RegistryError::NotCatchAll(id) if id == "percent"));
}

#[test]
fn test_registry_rejects_shadowing_catch_all() {
    let err = ParserRegistry::new(vec![upper_text(), percent()], tablekit_text()).unwrap_err();
    assert!(matches!(err, RegistryError::ShadowingCatchAll(id) if id == "upper"));
}

#[test]
fn test_registry_rejects_duplicate_ids() {
    let err = ParserRegistry::new(vec![percent(), percent()], upper_text()).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateId(id) if id == "percent"));
}

fn tablekit_text() -> Parser {
    Parser::catch_all("text", ParserKind::Text, |raw| {
        SortKey::Text(raw.trim().to_string())
    })
}

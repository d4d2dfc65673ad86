//! Built-in parsers, most specific first.

use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::{parse_float_prefix, parse_number, Parser, ParserKind, SortKey};

const CURRENCY_SYMBOLS: [char; 4] = ['£', '$', '¥', '€'];

/// Matches a whole parenthesized amount, e.g. `(1234)` or `(20.50)`.
const PARENTHESIZED: &str = r"^\(([0-9]+(?:\.[0-9]+)?)\)";

/// The built-in parsers in priority order, without the catch-all.
pub(super) fn specific() -> Result<Vec<Parser>, regex::Error> {
    Ok(vec![
        digit()?,
        currency()?,
        us_long_date()?,
        short_date()?,
        time()?,
        black_font_currency()?,
    ])
}

/// The terminal `text` parser.
pub(super) fn text() -> Parser {
    Parser::catch_all("text", ParserKind::Text, |raw| {
        SortKey::Text(raw.trim().to_string())
    })
}

/// Replace a whole parenthesized amount with its negative.
fn negate_parenthesized<'a>(re: &Regex, s: &'a str) -> Cow<'a, str> {
    match re.captures(s) {
        Some(caps) => Cow::Owned(format!("-{}", &caps[1])),
        None => Cow::Borrowed(s),
    }
}

fn strip_chars(s: &str, strip: impl Fn(char) -> bool) -> String {
    s.chars().filter(|&c| !strip(c)).collect()
}

fn epoch_millis(datetime: Option<NaiveDateTime>) -> f64 {
    datetime.map_or(0.0, |dt| dt.and_utc().timestamp_millis() as f64)
}

/// Convert a 12-hour clock hour to 24-hour.
fn to_24_hour(hour: u32, pm: bool) -> u32 {
    match (pm, hour) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    }
}

fn digit() -> Result<Parser, regex::Error> {
    let shape = Regex::new(r"^[-+(]?[0-9]+\)?$")?;
    let parenthesized = Regex::new(PARENTHESIZED)?;
    Ok(Parser::new(
        "digit",
        ParserKind::Numeric,
        move |raw| {
            let bare = strip_chars(raw, |c| matches!(c, ',' | '.' | '\''));
            shape.is_match(bare.trim())
        },
        move |raw| {
            let bare = strip_chars(raw.trim(), |c| matches!(c, ',' | '\''));
            SortKey::Number(parse_number(&negate_parenthesized(&parenthesized, &bare)))
        },
    ))
}

fn currency() -> Result<Parser, regex::Error> {
    let shape = Regex::new(r"^\(?[£¥$€,.+-]\(?[0-9]+\)?")?;
    let parenthesized = Regex::new(PARENTHESIZED)?;
    Ok(Parser::new(
        "currency",
        ParserKind::Numeric,
        move |raw| shape.is_match(raw),
        move |raw| {
            let bare = strip_chars(raw.trim(), |c| c == ',' || CURRENCY_SYMBOLS.contains(&c));
            SortKey::Number(parse_number(&negate_parenthesized(&parenthesized, &bare)))
        },
    ))
}

fn us_long_date() -> Result<Parser, regex::Error> {
    let shape = Regex::new(
        r"^([A-Za-z]{3,10})[.,]? ([0-9]{1,2}, [0-9]{4}), ([0-9]{1,2}):([0-5][0-9])(:[0-5][0-9])? ([aApP]\.?\s?[mM]\.?)$",
    )?;
    let matcher = shape.clone();
    Ok(Parser::new(
        "usLongDate",
        ParserKind::Numeric,
        move |raw| parse_long_date(&matcher, raw).is_some(),
        move |raw| SortKey::Number(epoch_millis(parse_long_date(&shape, raw))),
    ))
}

/// The month is read by its first three letters, so `Sept` and `September`
/// both mean `Sep`. Seconds are ignored.
fn parse_long_date(shape: &Regex, raw: &str) -> Option<NaiveDateTime> {
    let caps = shape.captures(raw)?;
    let mut letters = caps[1].chars().take(3);
    let month: String = letters
        .next()
        .map(|c| c.to_ascii_uppercase())
        .into_iter()
        .chain(letters.map(|c| c.to_ascii_lowercase()))
        .collect();
    let date = NaiveDate::parse_from_str(&format!("{month} {}", &caps[2]), "%b %d, %Y").ok()?;

    let pm = caps[6].starts_with(['p', 'P']);
    let hour = to_24_hour(caps[3].parse().ok()?, pm);
    let minute = caps[4].parse().ok()?;
    date.and_hms_opt(hour, minute, 0)
}

fn short_date() -> Result<Parser, regex::Error> {
    let shape = Regex::new(r"([0-9]{4})[/-]([0-9]{1,2})[/-]([0-9]{1,2})")?;
    let matcher = shape.clone();
    Ok(Parser::new(
        "shortDate",
        ParserKind::Numeric,
        move |raw| matcher.is_match(raw),
        move |raw| {
            let datetime = shape.captures(raw).and_then(|caps| {
                let year: i32 = caps[1].parse().ok()?;
                let month: u32 = caps[2].parse().ok()?;
                let day: u32 = caps[3].parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
            });
            SortKey::Number(epoch_millis(datetime))
        },
    ))
}

fn time() -> Result<Parser, regex::Error> {
    let shape =
        Regex::new(r"^(([0-2]?[0-9]:[0-5][0-9])|([0-1]?[0-9]:[0-5][0-9].*(am|pm)))$")?;
    let clock = Regex::new(r"^([0-9]{1,2}):([0-5][0-9])(?::([0-5][0-9]))?")?;
    Ok(Parser::new(
        "time",
        ParserKind::Numeric,
        move |raw| shape.is_match(raw),
        move |raw| {
            let meridiem = if raw.ends_with("pm") {
                Some(true)
            } else if raw.ends_with("am") {
                Some(false)
            } else {
                None
            };
            let datetime = clock.captures(raw).and_then(|caps| {
                let hour: u32 = caps[1].parse().ok()?;
                let minute: u32 = caps[2].parse().ok()?;
                let second = caps.get(3).map_or(Ok(0), |s| s.as_str().parse::<u32>()).ok()?;
                let hour = meridiem.map_or(hour, |pm| to_24_hour(hour, pm));
                NaiveDate::from_ymd_opt(2000, 1, 1)?.and_hms_opt(hour, minute, second)
            });
            SortKey::Number(epoch_millis(datetime))
        },
    ))
}

fn black_font_currency() -> Result<Parser, regex::Error> {
    let markup = Regex::new(r#"<font color="black">(.*)</font>"#)?;
    let matcher = markup.clone();
    let is_noise = |c: char| matches!(c, '(' | ')' | ',') || CURRENCY_SYMBOLS.contains(&c);
    Ok(Parser::new(
        "blackFontCurrency",
        ParserKind::Numeric,
        move |raw| {
            matcher
                .captures(raw)
                .and_then(|caps| parse_float_prefix(&strip_chars(&caps[1], is_noise)))
                .is_some_and(f64::is_finite)
        },
        move |raw| {
            let Some(caps) = markup.captures(raw) else {
                return SortKey::Number(0.0);
            };
            SortKey::Number(parse_number(&strip_chars(caps[1].trim(), is_noise)))
        },
    ))
}

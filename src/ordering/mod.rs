//! Date parsing and newest-first ordering for content collections.
//!
//! Editors type news and article dates free-hand, usually as "1 يناير 2025",
//! sometimes as ISO dates. Anything that cannot be parsed sorts last.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Month names after [`normalize`], Egyptian Arabic spellings first.
const MONTHS: &[(&str, u32)] = &[
    ("يناير", 1),
    ("فبراير", 2),
    ("مارس", 3),
    ("ابريل", 4),
    ("مايو", 5),
    ("يونيو", 6),
    ("يونيه", 6),
    ("يوليو", 7),
    ("يوليه", 7),
    ("اغسطس", 8),
    ("سبتمبر", 9),
    ("اكتوبر", 10),
    ("نوفمبر", 11),
    ("ديسمبر", 12),
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// Parse an editor-entered display date.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let text = normalize(raw.trim());
    if text.is_empty() {
        return None;
    }

    if let Some(ts) = parse_timestamp(&text) {
        return Some(ts.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(&text, format) {
            return Some(date);
        }
    }

    parse_day_month_year(&text)
}

/// Parse an RFC 3339 timestamp such as a record's `createdAt`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Stable sort, newest first. Items without a key keep their relative order after the rest.
pub fn sort_newest_first<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> Option<K>,
{
    items.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// "1 يناير 2025", "يناير 1، 2025", "January 1, 2025", "1 Jan 2025".
fn parse_day_month_year(text: &str) -> Option<NaiveDate> {
    let mut numbers = Vec::new();
    let mut month = None;

    for token in text
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '،' | '-' | '/' | '.'))
        .filter(|t| !t.is_empty())
    {
        if let Ok(n) = token.parse::<u32>() {
            numbers.push(n);
        } else if let Some(m) = month_number(token) {
            if month.replace(m).is_some() {
                return None;
            }
        }
    }

    let month = month?;
    let &[a, b] = numbers.as_slice() else {
        return None;
    };
    let (day, year) = if a >= 1000 { (b, a) } else { (a, b) };
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn month_number(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    MONTHS.iter().find_map(|(name, number)| {
        let full = token == *name;
        let abbreviated = name.is_ascii() && token.len() >= 3 && name.starts_with(&token);
        (full || abbreviated).then_some(*number)
    })
}

/// Fold Arabic-Indic digits to ASCII and alef variants to bare alef.
fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            'أ' | 'إ' | 'آ' => 'ا',
            _ => c,
        })
        .collect()
}

//! Moment-style date pattern formatting
//!
//! The daily-note path pattern and the `{{date:...}}` template tokens use the
//! pattern language of the original plugin ecosystem (`YYYY-MM-DD.md` and
//! friends) rather than strftime. This module formats an instant against such a
//! pattern: known tokens are substituted longest-match-first, `[...]` escapes
//! literal text, and everything else passes through verbatim. A malformed
//! pattern degrades to best-effort output; it never fails.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use tracing::warn;

/// Default pattern for `{{date}}`
pub const DEFAULT_DATE: &str = "YYYY-MM-DD";
/// Default pattern for `{{time}}`
pub const DEFAULT_TIME: &str = "HH:mm";
/// Default pattern for `{{datetime}}`
pub const DEFAULT_DATETIME: &str = "YYYY-MM-DD HH:mm";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Pattern tokens, longest first so e.g. `YYYY` wins over `YY`
const TOKENS: [&str; 21] = [
    "YYYY", "MMMM", "dddd", "MMM", "ddd", "SSS", "YY", "MM", "DD", "HH", "hh", "mm", "ss", "M", "D", "H", "h", "m",
    "s", "A", "a",
];

/// Format an instant against a moment-style pattern
pub fn format_pattern<Tz: TimeZone>(dt: &DateTime<Tz>, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    'outer: while !rest.is_empty() {
        // Bracketed text is copied literally
        if let Some(stripped) = rest.strip_prefix('[') {
            match stripped.find(']') {
                Some(end) => {
                    out.push_str(&stripped[..end]);
                    rest = &stripped[end + 1..];
                }
                None => {
                    // Unterminated bracket: take the remainder as literal
                    out.push_str(stripped);
                    rest = "";
                }
            }
            continue;
        }

        for token in TOKENS {
            if rest.starts_with(token) {
                out.push_str(&substitute(dt, token));
                rest = &rest[token.len()..];
                continue 'outer;
            }
        }

        let ch = rest.chars().next().expect("rest is non-empty");
        if ch.is_ascii_alphabetic() {
            warn!(%ch, %pattern, "unrecognized pattern letter, passing through");
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

fn substitute<Tz: TimeZone>(dt: &DateTime<Tz>, token: &str) -> String {
    let (is_pm, hour12) = dt.hour12();
    match token {
        "YYYY" => format!("{:04}", dt.year()),
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "MMMM" => MONTHS[dt.month0() as usize].to_string(),
        "MMM" => MONTHS[dt.month0() as usize][..3].to_string(),
        "MM" => format!("{:02}", dt.month()),
        "M" => dt.month().to_string(),
        "DD" => format!("{:02}", dt.day()),
        "D" => dt.day().to_string(),
        "dddd" => WEEKDAYS[dt.weekday().num_days_from_monday() as usize].to_string(),
        "ddd" => WEEKDAYS[dt.weekday().num_days_from_monday() as usize][..3].to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "H" => dt.hour().to_string(),
        "hh" => format!("{:02}", hour12),
        "h" => hour12.to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        "SSS" => format!("{:03}", dt.timestamp_subsec_millis()),
        "A" => if is_pm { "PM" } else { "AM" }.to_string(),
        "a" => if is_pm { "pm" } else { "am" }.to_string(),
        _ => unreachable!("token table and substitution table out of sync"),
    }
}

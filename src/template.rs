//! Output template rendering
//!
//! Turns a [`DrawResult`] plus a user template into the literal text that gets
//! inserted into a note. The placeholder syntax is the one user-facing file
//! format of this tool and stays byte-stable: `{{card}}`, `{{index}}`,
//! `{{intention}}`, `{{timestamp}}`, and `{{date}}` / `{{time}}` /
//! `{{datetime}}` with an optional `:FORMAT` suffix handed to [`crate::timefmt`].
//! Every occurrence of a token is replaced; anything unrecognized (including an
//! unterminated `{{`) passes through untouched. Rendering never fails — a bad
//! date format degrades to best-effort output instead of aborting the draw.

use chrono::Local;

use crate::draw::DrawResult;
use crate::timefmt;

/// The default output block, matching the original plugin's record format
pub const DEFAULT_TEMPLATE: &str = "## Tarot Draw - {{datetime}}\n\n**Intention:** {{intention}}\n**Card:** {{card}} (Index: {{index}})\n**Drawn at:** {{timestamp}}\n\n---\n\n";

/// Render a template against a draw result
pub fn render(template: &str, result: &DrawResult) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // Unterminated opener: nothing past here can form a token
            out.push_str("{{");
            out.push_str(after);
            return out;
        };
        let token = &after[..end];
        match substitute(token, result) {
            Some(value) => out.push_str(&value),
            None => {
                out.push_str("{{");
                out.push_str(token);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn substitute(token: &str, result: &DrawResult) -> Option<String> {
    let local = result.timestamp.with_timezone(&Local);
    match token {
        "card" => Some(result.card_name.clone()),
        "index" => Some(result.card_index.to_string()),
        "intention" => Some(result.intention.clone()),
        "timestamp" => Some(result.timestamp_iso()),
        "date" => Some(timefmt::format_pattern(&local, timefmt::DEFAULT_DATE)),
        "time" => Some(timefmt::format_pattern(&local, timefmt::DEFAULT_TIME)),
        "datetime" => Some(timefmt::format_pattern(&local, timefmt::DEFAULT_DATETIME)),
        _ => {
            // `{{date:FORMAT}}` family: the text after the first `:` is a
            // literal pattern for the date formatter
            let (name, pattern) = token.split_once(':')?;
            match name {
                "date" | "time" | "datetime" => Some(timefmt::format_pattern(&local, pattern)),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Draw, DrawResult};
    use chrono::{DateTime, Datelike, Utc};
    use proptest::prelude::*;

    fn sample() -> DrawResult {
        let draw = Draw {
            index: 0,
            timestamp: DateTime::parse_from_rfc3339("2026-01-11T16:20:00.000Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        DrawResult::from_draw("focus", &draw).unwrap()
    }

    #[test]
    fn test_basic_tokens() {
        let result = sample();
        assert_eq!(render("{{card}}", &result), "The Fool");
        assert_eq!(render("{{index}}", &result), "0");
        assert_eq!(render("{{intention}}", &result), "focus");
        assert_eq!(render("{{timestamp}}", &result), "2026-01-11T16:20:00.000Z");
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let result = sample();
        assert_eq!(render("{{card}} is {{card}}", &result), "The Fool is The Fool");
    }

    #[test]
    fn test_unknown_tokens_untouched() {
        let result = sample();
        assert_eq!(render("{{nope}} and {{card }}", &result), "{{nope}} and {{card }}");
        assert_eq!(render("{{CARD}}", &result), "{{CARD}}");
    }

    #[test]
    fn test_unterminated_opener_untouched() {
        let result = sample();
        assert_eq!(render("{{card", &result), "{{card");
        assert_eq!(render("ok {{card}} then {{oops", &result), "ok The Fool then {{oops");
    }

    #[test]
    fn test_explicit_date_format() {
        let result = sample();
        let local = result.timestamp.with_timezone(&Local);
        assert_eq!(render("{{date:YYYY}}", &result), format!("{:04}", local.year()));
        assert_eq!(
            render("{{datetime:YYYY/MM}}", &result),
            format!("{:04}/{:02}", local.year(), local.month())
        );
    }

    #[test]
    fn test_default_date_formats_are_stable() {
        let result = sample();
        let local = result.timestamp.with_timezone(&Local);
        assert_eq!(
            render("{{date}}", &result),
            timefmt::format_pattern(&local, timefmt::DEFAULT_DATE)
        );
        assert_eq!(
            render("{{time}}", &result),
            timefmt::format_pattern(&local, timefmt::DEFAULT_TIME)
        );
        assert_eq!(
            render("{{datetime}}", &result),
            timefmt::format_pattern(&local, timefmt::DEFAULT_DATETIME)
        );
    }

    #[test]
    fn test_malformed_format_degrades_without_error() {
        let result = sample();
        // Unknown pattern letters pass through rather than aborting the render
        assert_eq!(render("{{date:Qx}} {{card}}", &result), "Qx The Fool");
    }

    #[test]
    fn test_default_template_contains_record_fields() {
        let result = sample();
        let rendered = render(DEFAULT_TEMPLATE, &result);
        assert!(rendered.contains("**Intention:** focus"));
        assert!(rendered.contains("**Card:** The Fool (Index: 0)"));
        assert!(rendered.contains("**Drawn at:** 2026-01-11T16:20:00.000Z"));
        assert!(rendered.starts_with("## Tarot Draw - "));
        assert!(rendered.contains("---"));
    }

    proptest! {
        #[test]
        fn prop_unknown_tokens_pass_through(name in "[a-z]{1,12}") {
            prop_assume!(!matches!(
                name.as_str(),
                "card" | "index" | "intention" | "timestamp" | "date" | "time" | "datetime"
            ));
            let template = format!("before {{{{{}}}}} after", name);
            prop_assert_eq!(render(&template, &sample()), template);
        }
    }
}

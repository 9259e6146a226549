//! Insertion-point computation
//!
//! Pure functions that decide where a rendered draw block lands in an existing
//! note and produce the new content. Heading insertion is two-phase: locate the
//! splice line, then splice — both independently testable. Everything here is
//! compute-only; a single write happens at the session boundary.

use serde::{Deserialize, Serialize};

/// Where a rendered block goes when no live cursor takes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertLocation {
    #[default]
    Append,
    Prepend,
    Heading,
}

impl std::fmt::Display for InsertLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Prepend => write!(f, "prepend"),
            Self::Heading => write!(f, "heading"),
        }
    }
}

impl std::str::FromStr for InsertLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "prepend" => Ok(Self::Prepend),
            "heading" => Ok(Self::Heading),
            _ => Err(format!("Unknown insert location: {}. Use: append, prepend, or heading", s)),
        }
    }
}

/// Append: old content, a single separating `\n` if one is missing, then the block
pub fn append(content: &str, rendered: &str) -> String {
    if content.is_empty() {
        rendered.to_string()
    } else if content.ends_with('\n') {
        format!("{content}{rendered}")
    } else {
        format!("{content}\n{rendered}")
    }
}

/// Prepend: the block, then old content, no injected separator
pub fn prepend(content: &str, rendered: &str) -> String {
    format!("{rendered}{content}")
}

/// Locate the line index at which to splice under the given heading
///
/// The heading line must match exactly after trimming surrounding whitespace
/// (no case folding, no partial match). The section runs to the next line whose
/// trimmed form starts with `#` (any level) or to end of buffer; trailing blank
/// lines of the section are skipped so the splice lands right after its last
/// non-empty line. Returns `None` when the heading is absent.
pub fn heading_insert_line(content: &str, heading: &str) -> Option<usize> {
    let lines: Vec<&str> = content.split('\n').collect();
    let target = heading.trim();
    let heading_at = lines.iter().position(|line| line.trim() == target)?;

    let mut boundary = lines.len();
    for (i, line) in lines.iter().enumerate().skip(heading_at + 1) {
        if line.trim().starts_with('#') {
            boundary = i;
            break;
        }
    }
    while boundary > heading_at + 1 && lines[boundary - 1].trim().is_empty() {
        boundary -= 1;
    }
    Some(boundary)
}

/// Insert a block under a heading, synthesizing the section at the bottom when absent
pub fn insert_under_heading(content: &str, heading: &str, rendered: &str) -> String {
    let rendered = rendered.trim();
    match heading_insert_line(content, heading) {
        Some(at) => {
            let mut lines: Vec<&str> = content.split('\n').collect();
            lines.splice(at..at, ["", rendered]);
            lines.join("\n")
        }
        None => {
            let heading = heading.trim();
            let base = content.trim_end_matches('\n');
            if base.is_empty() {
                format!("{heading}\n\n{rendered}")
            } else {
                format!("{base}\n\n{heading}\n\n{rendered}")
            }
        }
    }
}

/// Dispatch over the three buffer-level outcomes
pub fn apply(content: &str, rendered: &str, location: InsertLocation, heading: &str) -> String {
    match location {
        InsertLocation::Append => append(content, rendered),
        InsertLocation::Prepend => prepend(content, rendered),
        InsertLocation::Heading => insert_under_heading(content, heading, rendered),
    }
}

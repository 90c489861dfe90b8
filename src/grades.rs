//! Tolerant grade-list parsing
//!
//! Grade lists arrive as free-form user text: comma- or semicolon-separated
//! numbers, optionally wrapped in brackets, with arbitrary whitespace.
//! Parsing never aborts on a bad token; instead each failure is recorded as
//! a [`SkippedToken`] so callers can log, ignore, or surface the diagnostics.

/// Result of parsing a grade list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeParse {
    /// Successfully parsed grades, in input order
    pub values: Vec<f64>,

    /// Tokens that failed numeric parsing, in input order
    pub skipped: Vec<SkippedToken>,
}

impl GradeParse {
    /// True if at least one token failed to parse
    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// One token that failed to parse as a grade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// The offending text, trimmed
    pub token: String,
}

/// Parse a grade list from user-supplied text
///
/// Rules:
/// - A single surrounding `[` `]` pair is stripped
/// - Tokens split on `,` or `;`
/// - Whitespace around tokens is trimmed
/// - Empty tokens are ignored silently (trailing separators are common)
/// - Tokens that fail `f64` parsing land in `skipped`, never abort the parse
///
/// ```
/// use rosterdb::parse_grades;
///
/// let parsed = parse_grades("[80, 90;85]");
/// assert_eq!(parsed.values, vec![80.0, 90.0, 85.0]);
/// assert!(parsed.skipped.is_empty());
/// ```
pub fn parse_grades(text: &str) -> GradeParse {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    let mut parse = GradeParse::default();

    for token in inner.split(|c| c == ',' || c == ';') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match token.parse::<f64>() {
            Ok(value) => parse.values.push(value),
            Err(_) => {
                tracing::warn!(token, "skipping unparseable grade token");
                parse.skipped.push(SkippedToken {
                    token: token.to_string(),
                });
            }
        }
    }

    parse
}

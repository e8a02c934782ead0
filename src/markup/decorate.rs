//! Markup decoration
//!
//! Line-based post-processing over rendered markup. Relies on the
//! renderer never emitting a span that contains a line break.

use std::collections::BTreeSet;

use crate::error::{Result, SnipError};

/// Class of the per-line number marker
pub const LINE_NUMBER_CLASS: &str = "code-line-number";

/// Class of the emphasis container
pub const EMPHASIS_CLASS: &str = "line-emphasis";

/// Highest line number accepted by `parse_line_spec`
pub const MAX_LINE_NUMBER: usize = 100_000;

/// What to apply in `decorate_markup`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorateOptions {
    pub line_numbers: bool,
    /// 1-indexed lines to emphasize
    pub emphasized_lines: BTreeSet<usize>,
}

/// Prefix every line with a 1-indexed line number marker
pub fn add_line_numbers(markup: &str) -> String {
    markup
        .split('\n')
        .enumerate()
        .map(|(i, line)| format!("<span class=\"{}\">{}</span>{}", LINE_NUMBER_CLASS, i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap the listed 1-indexed lines in an emphasis container
pub fn emphasize_lines(markup: &str, lines: &BTreeSet<usize>) -> String {
    if lines.is_empty() {
        return markup.to_string();
    }

    markup
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if lines.contains(&(i + 1)) {
                format!("<div class=\"{}\">{}</div>", EMPHASIS_CLASS, line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply numbering, then emphasis
pub fn decorate_markup(markup: &str, options: &DecorateOptions) -> String {
    let numbered = if options.line_numbers {
        add_line_numbers(markup)
    } else {
        markup.to_string()
    };
    emphasize_lines(&numbered, &options.emphasized_lines)
}

/// Keep only the first `lines` lines of the code
pub fn preview(code: &str, lines: usize) -> &str {
    match code.match_indices('\n').nth(lines.saturating_sub(1)) {
        Some((idx, _)) if lines > 0 => &code[..idx],
        _ if lines == 0 => "",
        _ => code,
    }
}

/// Parse a line list such as `1,3-5,8` into a set
///
/// Line numbers are 1-indexed and capped at `MAX_LINE_NUMBER`.
pub fn parse_line_spec(spec: &str) -> Result<BTreeSet<usize>> {
    let mut lines = BTreeSet::new();

    for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let invalid = || SnipError::InvalidArgument(format!("bad line range '{}'", part));
        match part.split_once('-') {
            Some((from, to)) => {
                let from: usize = from.trim().parse().map_err(|_| invalid())?;
                let to: usize = to.trim().parse().map_err(|_| invalid())?;
                if from == 0 || to < from || to > MAX_LINE_NUMBER {
                    return Err(invalid());
                }
                lines.extend(from..=to);
            }
            None => {
                let line: usize = part.parse().map_err(|_| invalid())?;
                if line == 0 || line > MAX_LINE_NUMBER {
                    return Err(invalid());
                }
                lines.insert(line);
            }
        }
    }

    Ok(lines)
}

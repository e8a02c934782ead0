//! Terminal rendering of annotated text

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute, SetForegroundColor};

use crate::error::Result;
use crate::syntax::{AnnotatedText, Style};

/// Render annotated text with ANSI escape sequences
///
/// With `line_numbers`, each line gets a dim right-aligned gutter.
pub fn to_ansi(text: &AnnotatedText, line_numbers: bool) -> Result<String> {
    let mut out: Vec<u8> = Vec::new();
    let total_lines = text.plain_text().split('\n').count();
    let width = total_lines.to_string().len();
    let mut line_no = 1;

    if line_numbers {
        write_gutter(&mut out, line_no, width)?;
    }

    for segment in text.segments() {
        for (i, part) in segment.text.split('\n').enumerate() {
            if i > 0 {
                queue!(out, Print('\n'))?;
                line_no += 1;
                if line_numbers {
                    write_gutter(&mut out, line_no, width)?;
                }
            }
            if part.is_empty() {
                continue;
            }
            match segment.token {
                Some(token) => write_styled(&mut out, part, token.default_style())?,
                None => queue!(out, Print(part))?,
            }
        }
    }

    out.flush()?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn write_gutter<W: Write>(out: &mut W, line_no: usize, width: usize) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Dim),
        Print(format!("{:>width$} │ ", line_no, width = width)),
        SetAttribute(Attribute::NormalIntensity)
    )?;
    Ok(())
}

fn write_styled<W: Write>(out: &mut W, text: &str, style: Style) -> Result<()> {
    if style.is_default() {
        queue!(out, Print(text))?;
        return Ok(());
    }

    queue!(out, SetForegroundColor(style.fg.into()))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset))?;
    Ok(())
}

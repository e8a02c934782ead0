//! Output formats for annotated text
//!
//! `html` and `ansi` turn annotated text into markup or escape sequences.
//! `decorate` post-processes HTML markup line by line.

mod ansi;
mod decorate;
mod html;

pub use ansi::to_ansi;
pub use decorate::{
    add_line_numbers, decorate_markup, emphasize_lines, parse_line_spec, preview,
    DecorateOptions, EMPHASIS_CLASS, LINE_NUMBER_CLASS, MAX_LINE_NUMBER,
};
pub use html::{escape_html, markup_to_text, to_html};

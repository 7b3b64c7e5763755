//! Word wrapping for replies.
//!
//! Each line of the reply is wrapped on its own so paragraph breaks and
//! list items survive. Widths are display columns, not bytes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fallback when the terminal size cannot be detected (output piped).
pub const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns.
pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| usize::from(cols))
        .filter(|cols| *cols > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Wrap `text` to `width` columns. Blank lines are kept as empty lines.
pub fn wrap_reply(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            out.push(String::new());
        } else {
            out.extend(wrap_line(line, width));
        }
    }
    out
}

/// Split a line into alternating runs of whitespace and non-whitespace.
fn chunks(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let space = rest.chars().next()?.is_whitespace();
        let end = rest
            .find(|c: char| c.is_whitespace() != space)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(chunk)
    })
}

/// Finish the line in progress, minus trailing whitespace.
fn flush(current: &mut String, out: &mut Vec<String>) {
    let done = current.trim_end();
    if !done.is_empty() {
        out.push(done.to_string());
    }
    current.clear();
}

/// Greedy fill of one line. Inner whitespace runs are kept as written;
/// whitespace at a break is dropped, so only the first output line keeps
/// the leading indentation. Words wider than `width` are split.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for chunk in chunks(line) {
        let chunk_width = chunk.width();

        if chunk.starts_with(char::is_whitespace) {
            if current.is_empty() && !out.is_empty() {
                continue;
            }
            if current_width + chunk_width <= width {
                current.push_str(chunk);
                current_width += chunk_width;
            } else {
                flush(&mut current, &mut out);
                current_width = 0;
            }
            continue;
        }

        if current_width > 0 && current_width + chunk_width > width {
            flush(&mut current, &mut out);
            current_width = 0;
        }

        if current_width + chunk_width <= width {
            current.push_str(chunk);
            current_width += chunk_width;
            continue;
        }

        for ch in chunk.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && current_width > 0 {
                flush(&mut current, &mut out);
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    flush(&mut current, &mut out);
    out
}

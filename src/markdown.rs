//! Post-processing of converted Markdown text.
//!
//! The converter produces Markdown; these helpers apply the rendering
//! settings it has no knob for: ASCII fallback and line wrapping.

/// Replace common typographic characters with ASCII equivalents.
///
/// Characters without a mapping pass through.
#[must_use]
pub fn ascii_fallback(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' => out.push(' '),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2212}' => out.push('-'),
            '\u{2014}' | '\u{2015}' => out.push_str("--"),
            '\u{2022}' => out.push('*'),
            '\u{2026}' => out.push_str("..."),
            '\u{00AB}' => out.push_str("<<"),
            '\u{00BB}' => out.push_str(">>"),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Greedily wrap each prose line of `text` at `width` characters.
///
/// Fenced and indented code, table rows, and quoted lines are left alone.
/// Words longer than the width are not split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut in_fence = false;
    text.split('\n')
        .map(|line| {
            if line.trim_start().starts_with("```") {
                in_fence = !in_fence;
                return line.to_string();
            }
            if in_fence || !is_prose(line) || line.chars().count() <= width {
                line.to_string()
            } else {
                wrap_line(line, width)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_prose(line: &str) -> bool {
    let trimmed = line.trim_start();
    !(line.starts_with("    ") || trimmed.starts_with('|') || trimmed.starts_with('>'))
}

fn wrap_line(line: &str, width: usize) -> String {
    let indent: String = line.chars().take_while(|c| *c == ' ').collect();
    let mut out = String::with_capacity(line.len() + line.len() / width);
    let mut current = indent.clone();
    let mut current_len = indent.len();

    for word in line.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > indent.len() && current_len + 1 + word_len > width {
            out.push_str(&current);
            out.push('\n');
            current.clone_from(&indent);
            current_len = indent.len();
        }
        if current_len > indent.len() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    out.push_str(&current);
    out
}

pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if display_width(&current) + 1 + display_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if display_width(s) <= max_len {
        return s.to_string();
    }
    if max_len == 1 {
        return "…".to_string();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// Width in terminal columns, counting one column per `char`.
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Left-aligns `s` in a cell of `width` columns, truncating if needed.
pub fn pad(s: &str, width: usize) -> String {
    let cell = truncate(s, width);
    let fill = width.saturating_sub(display_width(&cell));
    format!("{}{}", cell, " ".repeat(fill))
}

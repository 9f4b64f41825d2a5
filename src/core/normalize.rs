//! Comment stripping.

/// Strip comments from script text.
///
/// Line-oriented: everything from the first unescaped `#` to the end of
/// each line is removed; newlines are preserved. A `#` inside a quoted
/// string is not protected - the pass is not shell-aware, which keeps
/// extraction reproducible at the cost of known false positives in quoted
/// text.
pub fn strip_comments(text: &str) -> String {
    text.split('\n')
        .map(strip_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_line(line: &str) -> &str {
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        if ch == '#' && !escaped {
            return &line[..idx];
        }
        escaped = ch == '\\' && !escaped;
    }
    line
}

//! Line-numbering decorator for rendered editor markup.

/// Wrap a per-line renderer with a numbered gutter.
///
/// Empty content still yields a single numbered row, so an empty editor shows
/// one line instead of collapsing to nothing.
pub fn with_line_numbers(code: &str, render_line: impl Fn(&str) -> String) -> String {
    let mut out = String::new();
    let mut lines = code.lines().peekable();
    if lines.peek().is_none() {
        push_row(&mut out, 1, "");
        return out;
    }
    for (index, line) in lines.enumerate() {
        push_row(&mut out, index + 1, &render_line(line));
    }
    out
}

fn push_row(out: &mut String, number: usize, body: &str) {
    out.push_str(&format!(
        "<div class=\"line\"><span class=\"gutter\">{number}</span>{body}</div>\n"
    ));
}

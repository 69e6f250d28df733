// src/ui/helpers.rs

/// Escapa los caracteres con significado en HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `90` y no `90.0`; los decimales reales se conservan (`87.5`).
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

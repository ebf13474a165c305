// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Column names are joined with underscores so they survive CSV headers and
/// line up across categories ("Rush Yds" → "Rush_Yds").
pub fn normalize_column(name: &str) -> String {
    name.replace(' ', "_")
}

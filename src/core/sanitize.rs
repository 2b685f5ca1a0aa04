// src/core/sanitize.rs

/// Collapse every whitespace run to a single space and trim the ends.
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

/// `normalize_ws` each line, drop the blank ones, rejoin with `\n`.
pub fn collapse_lines(s: &str) -> String {
    s.lines()
        .map(normalize_ws)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \t b\u{a0}\u{a0}c  "), "a b c");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn collapse_lines_drops_blank_lines() {
        assert_eq!(collapse_lines("\n  one  \n\n \t \n two   three\n"), "one\ntwo three");
        assert_eq!(collapse_lines(""), "");
    }
}

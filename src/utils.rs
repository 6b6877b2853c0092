use regex::Regex;

lazy_static::lazy_static! {
    /// Line terminator: bare `\n` or `\r\n`.
    static ref LINE_BREAK: Regex = Regex::new(r"\r?\n").unwrap();
}

/// Splits source text into physical lines, paired with their 1-indexed number.
///
/// Both Unix and Windows line endings are accepted, so a CRLF file reports
/// the same line numbers as its LF twin.
pub fn split_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    LINE_BREAK
        .split(source)
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_handles_crlf() {
        let source = "$a: 1;\r\n$b: 2;\n$c: 3;";
        let lines: Vec<(usize, &str)> = split_lines(source).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (1, "$a: 1;"));
        assert_eq!(lines[1], (2, "$b: 2;"));
        assert_eq!(lines[2], (3, "$c: 3;"));
    }

    #[test]
    fn test_trailing_newline_yields_empty_line() {
        let lines: Vec<(usize, &str)> = split_lines("a\n").collect();
        assert_eq!(lines, vec![(1, "a"), (2, "")]);
    }
}

//! Line input helpers shared by the interactive commands.

use std::io::{BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or read errors. Bytes that are
/// not valid UTF-8 come back as replacement characters, so the line still
/// reaches the parser and gets rejected there.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use blackjack_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  hit \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("hit"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut buf = Vec::new();
    match stdin.read_until(b'\n', &mut buf) {
        Ok(0) => None,
        Ok(_) => Some(String::from_utf8_lossy(&buf).trim().to_string()),
        Err(_) => None,
    }
}

/// Write `prompt` without a newline, flush, and read one answer.
pub fn prompt_line(
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    Ok(read_stdin_line(stdin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_is_written_before_reading() {
        let mut out = Vec::new();
        let mut input = Cursor::new("3\n");
        let answer = prompt_line(&mut out, &mut input, "How many? ").unwrap();
        assert_eq!(answer.as_deref(), Some("3"));
        assert_eq!(String::from_utf8(out).unwrap(), "How many? ");
    }

    #[test]
    fn blank_line_is_not_eof() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some(""));
    }

    #[test]
    fn invalid_utf8_is_a_line_not_eof() {
        let mut input = Cursor::new(b"\xff\xfe\nok\n".to_vec());
        let first = read_stdin_line(&mut input).unwrap();
        assert!(first.contains('\u{FFFD}'));
        assert_eq!(read_stdin_line(&mut input).as_deref(), Some("ok"));
        assert_eq!(read_stdin_line(&mut input), None);
    }
}

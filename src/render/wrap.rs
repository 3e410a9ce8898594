//! Line-numbered, hard-wrapped text blocks

use super::{INDENT, STAGING_SIZE, STAGING_SLACK};
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Column budget of one rendered line, excluding the line-number gutter
pub const HARD_WRAP: usize = 80;

/// Distance between tab stops
pub const TAB_WIDTH: usize = 4;

const CONTINUATION: &str = " +\n";

/// Width of the gutter written before each line: indent, 4-digit number, space
pub const GUTTER_WIDTH: usize = INDENT.len() + 5;

fn is_printable(ch: char) -> bool {
    !ch.is_control() && ch.width().is_some()
}

/// Write `txt` as numbered lines, hard-wrapping at [`HARD_WRAP`] columns.
///
/// `\n`, `\r` and `\r\n` each end a numbered line. Tabs expand to the next
/// tab stop and unprintable characters render as `?`.
pub fn write_text(w: &mut dyn Write, txt: &str) -> io::Result<()> {
    let mut buf: Vec<u8> = Vec::with_capacity(STAGING_SIZE);
    let mut newline = true;
    let mut cr = false;
    let mut line = 0usize;
    let mut column = 0usize;

    for mut ch in txt.chars() {
        if cr && ch == '\n' {
            cr = false;
            continue;
        }
        cr = ch == '\r';
        if newline {
            line += 1;
            let _ = write!(buf, "{INDENT}{line:4} ");
            newline = false;
        }

        let mut width = match ch {
            '\r' | '\n' => {
                buf.push(b'\n');
                w.write_all(&buf)?;
                buf.clear();
                column = 0;
                newline = true;
                continue;
            }
            '\t' => TAB_WIDTH - column % TAB_WIDTH,
            _ => {
                if !is_printable(ch) {
                    ch = '?';
                }
                ch.width().unwrap_or(1)
            }
        };

        if column + width > HARD_WRAP {
            let _ = write!(buf, "{CONTINUATION}{:GUTTER_WIDTH$}", "");
            w.write_all(&buf)?;
            buf.clear();
            column = 0;
            if ch == '\t' {
                width = TAB_WIDTH;
            }
        }

        if ch == '\t' {
            buf.resize(buf.len() + width, b' ');
        } else {
            let mut utf8 = [0u8; 4];
            buf.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
        column += width;

        if buf.len() > STAGING_SIZE - STAGING_SLACK {
            w.write_all(&buf)?;
            buf.clear();
        }
    }

    if column > 0 {
        buf.push(b'\n');
    }
    if !buf.is_empty() {
        w.write_all(&buf)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(txt: &str) -> String {
        let mut out = Vec::new();
        write_text(&mut out, txt).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_numbered_lines() {
        assert_eq!(render("foo\nbar"), "     1 foo\n     2 bar\n");
    }

    #[test]
    fn test_crlf_is_one_break() {
        assert_eq!(render("a\r\nb"), render("a\nb"));
        assert_eq!(render("a\r\nb").lines().count(), 2);
        // A lone CR still ends a line.
        assert_eq!(render("a\rb").lines().count(), 2);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        assert_eq!(render("a\n"), "     1 a\n");
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n"), "     1 \n     2 \n");
    }

    #[test]
    fn test_tab_stops_depend_on_column() {
        assert_eq!(render("\tx"), "     1     x\n");
        assert_eq!(render("ab\tx"), "     1 ab  x\n");
        assert_eq!(render("abcd\tx"), "     1 abcd    x\n");
    }

    #[test]
    fn test_unprintable_replaced() {
        assert_eq!(render("a\u{1}b\u{7f}"), "     1 a?b?\n");
    }

    #[test]
    fn test_hard_wrap_before_overflow() {
        let txt = "x".repeat(HARD_WRAP + 5);
        let out = render(&txt);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("     1 {} +", "x".repeat(HARD_WRAP)));
        assert_eq!(lines[1], format!("       {}", "x".repeat(5)));
    }

    #[test]
    fn test_wide_characters_wrap_early() {
        // 79 narrow columns leave no room for a 2-column character.
        let txt = format!("{}好", "x".repeat(HARD_WRAP - 1));
        let out = render(&txt);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('好'));
    }

    #[test]
    fn test_tab_at_wrap_takes_full_stop() {
        let txt = format!("{}\tz", "x".repeat(HARD_WRAP - 6));
        let out = render(&txt);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("x  z"));

        let txt = format!("{}\tz", "x".repeat(HARD_WRAP));
        let out = render(&txt);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], format!("       {}z", " ".repeat(TAB_WIDTH)));
    }
}

//! The bracket-and-quote-aware reader (spec §4.B).
//!
//! Used by the attributes scanner (for each attribute value) and the
//! control-statement scanners (for parenthesized subjects). Tracks string
//! and nesting depth so that commas, parens and brackets inside a quoted
//! string or a nested call don't prematurely end the read.

use super::cursor::Cursor;

/// Read a substring honoring quotes and `()[]{}` nesting, stopping (without
/// consuming) at the first unescaped, unquoted `)` at depth 0, or at the
/// first unescaped, unquoted character in `breaks` at depth 0.
///
/// `]` and `{` `}` are tracked for depth but do not themselves terminate the
/// read at depth 0 the way `)` does: `depth` can go negative for an
/// unbalanced trailing `]`/`}`, matching the original design's asymmetric
/// bracket handling (spec §4.B).
pub fn read_bracketed(cursor: &mut Cursor, breaks: &[char]) -> String {
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut string_kind = '"';
    let mut prev: Option<char> = None;
    let mut acc = String::new();

    loop {
        let ch = match cursor.peek(1).chars().next() {
            Some(c) => c,
            None => break,
        };

        if ch == '"' || ch == '\'' {
            if in_string {
                if ch == string_kind && prev != Some('\\') {
                    in_string = false;
                }
            } else {
                in_string = true;
                string_kind = ch;
            }
        } else if !in_string {
            match ch {
                '(' | '[' | '{' => depth += 1,
                ')' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                ']' | '}' => depth -= 1,
                _ => {
                    if depth == 0 && breaks.contains(&ch) {
                        break;
                    }
                }
            }
        }

        let _ = cursor.consume(1);
        acc.push(ch);
        prev = Some(ch);
    }

    acc.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_unbalanced_close_paren() {
        let mut c = Cursor::new("foo, bar)".to_string());
        let s = read_bracketed(&mut c, &[',']);
        assert_eq!(s, "foo");
        assert_eq!(c.peek(1), ",");
    }

    #[test]
    fn keeps_comma_inside_parens() {
        let mut c = Cursor::new("fn(a, b), next".to_string());
        let s = read_bracketed(&mut c, &[',']);
        assert_eq!(s, "fn(a, b)");
        assert_eq!(c.peek(1), ",");
    }

    #[test]
    fn ignores_brackets_inside_strings() {
        let mut c = Cursor::new("\"a)b,c\" , rest".to_string());
        let s = read_bracketed(&mut c, &[',']);
        assert_eq!(s, "\"a)b,c\"");
    }

    #[test]
    fn square_and_curly_close_do_not_stop_at_depth_zero() {
        let mut c = Cursor::new("a] b} )".to_string());
        let s = read_bracketed(&mut c, &[]);
        assert_eq!(s, "a] b}");
        assert_eq!(c.peek(1), ")");
    }
}

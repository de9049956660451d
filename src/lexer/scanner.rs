use super::*;

/// Advance the character iterator and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 0;
        } else {
            lexer.column += 1;
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// Skip whitespace (newlines included) and `#` comments
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek {
        match c {
            c if c.is_whitespace() => {
                bump(lexer);
            }
            '#' => {
                while let Some(ch) = bump(lexer) {
                    if ch == '\n' {
                        break;
                    }
                }
            }
            _ => break,
        }
    }
}

/// Characters that end an unquoted word
pub(super) fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '=' | '{' | '}' | ',' | '"' | '\'' | '#')
}

use super::*;
use super::scanner::{bump, is_delimiter, skip_whitespace_and_comments};

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, Error> {
    skip_whitespace_and_comments(lexer);

    lexer.token_line = lexer.line;
    lexer.token_column = lexer.column;

    match lexer.peek {
        Some('=') => tokenize_symbol(lexer, Token::Equals),
        Some('{') => tokenize_symbol(lexer, Token::LBrace),
        Some('}') => tokenize_symbol(lexer, Token::RBrace),
        Some(',') => tokenize_symbol(lexer, Token::Comma),
        Some('"') | Some('\'') => tokenize_string(lexer),
        Some(c) if !is_delimiter(c) && !c.is_control() => tokenize_word(lexer),
        Some(ch) => tokenize_unexpected_char(lexer, ch),
        None => Ok(Token::Eof),
    }
}

fn tokenize_symbol(lexer: &mut Lexer, token: Token) -> Result<Token, Error> {
    bump(lexer);
    Ok(token)
}

fn tokenize_string(lexer: &mut Lexer) -> Result<Token, Error> {
    let quote = bump(lexer).unwrap_or('"');
    let (line, column) = (lexer.token_line, lexer.token_column);
    let mut content = String::new();

    loop {
        match bump(lexer) {
            Some(ch) if ch == quote => return Ok(Token::Quoted(content)),
            Some('\\') => {
                let Some(next_ch) = bump(lexer) else {
                    break;
                };
                let escaped = match next_ch {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    other => other,
                };
                content.push(escaped);
            }
            Some(ch) => content.push(ch),
            None => break,
        }
    }

    Err(Error::UnclosedString { quote, line, column })
}

fn tokenize_word(lexer: &mut Lexer) -> Result<Token, Error> {
    let mut word = String::new();

    while let Some(ch) = lexer.peek {
        if is_delimiter(ch) || ch.is_control() {
            break;
        }
        word.push(ch);
        bump(lexer);
    }

    Ok(Token::Word(word))
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: char) -> Result<Token, Error> {
    bump(lexer);
    Err(Error::UnexpectedCharacter {
        character: ch,
        line: lexer.token_line,
        column: lexer.token_column,
    })
}

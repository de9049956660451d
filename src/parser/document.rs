use super::*;
use crate::ast::Entry;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, Error> {
    let entries = parse_entries(parser, false)?;
    Ok(Document { entries })
}

/// Parse entries until end of input, or until the closing brace of a block.
fn parse_entries(parser: &mut Parser, in_block: bool) -> Result<Vec<Entry>, Error> {
    let mut entries = Vec::new();

    loop {
        match parser.peek() {
            Some(Token::Word(_)) | Some(Token::Quoted(_)) => {
                entries.push(parse_entry(parser)?);
            }
            Some(Token::RBrace) if in_block => {
                parser.bump()?;
                break;
            }
            Some(Token::Eof) | None if !in_block => break,
            Some(tok) => {
                let tok = tok.clone();
                let wanted = if in_block { "an option name or '}'" } else { "an option name" };
                return Err(unexpected(&tok, wanted, parser.line(), parser.column()));
            }
            None => {
                return Err(Error::UnexpectedEof {
                    message: "expected '}'".into(),
                    line: parser.line(),
                    column: parser.column(),
                });
            }
        }
    }

    Ok(entries)
}

fn parse_entry(parser: &mut Parser) -> Result<Entry, Error> {
    let line = parser.line();
    let name = match parser.bump()? {
        Token::Word(name) | Token::Quoted(name) => name,
        other => return Err(unexpected(&other, "an option name", line, parser.column())),
    };

    match parser.peek() {
        Some(Token::Equals) => {
            parser.bump()?;
            let value = value::parse_value(parser)?;
            Ok(Entry::Assign { name, value, line })
        }
        Some(Token::LBrace) => {
            parser.bump()?;
            let entries = parse_entries(parser, true)?;
            Ok(Entry::Block { name, title: None, entries, line })
        }
        Some(Token::Word(_)) | Some(Token::Quoted(_)) => {
            let title = match parser.bump()? {
                Token::Word(title) | Token::Quoted(title) => title,
                _ => unreachable!(),
            };
            parser.expect(Token::LBrace)?;
            let entries = parse_entries(parser, true)?;
            Ok(Entry::Block { name, title: Some(title), entries, line })
        }
        _ => {
            let (line, column) = (parser.line(), parser.column());
            let tok = parser.bump()?;
            Err(Error::Syntax {
                message: format!("expected '=' or '{{' after '{}', found {}", name, tok.describe()),
                line,
                column,
                hint: Some("options are assigned with '=', sections open with '{'".into()),
            })
        }
    }
}

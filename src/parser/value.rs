use super::*;
use crate::ast::RawValue;

pub(super) fn parse_value(parser: &mut Parser) -> Result<RawValue, Error> {
    match parser.peek() {
        Some(Token::LBrace) => parse_list(parser).map(RawValue::List),
        _ => parse_atom(parser).map(RawValue::Atom),
    }
}

fn parse_atom(parser: &mut Parser) -> Result<Literal, Error> {
    let (line, column) = (parser.line(), parser.column());
    match parser.bump()? {
        Token::Word(text) => Ok(Literal { text, quoted: false }),
        Token::Quoted(text) => Ok(Literal { text, quoted: true }),
        other => Err(unexpected(&other, "a value", line, column)),
    }
}

/// `{` [atom (`,` atom)* [`,`]] `}`
pub(super) fn parse_list(parser: &mut Parser) -> Result<Vec<Literal>, Error> {
    parser.expect(Token::LBrace)?;
    let mut items = Vec::new();

    loop {
        if let Some(Token::RBrace) = parser.peek() {
            parser.bump()?;
            break;
        }

        items.push(parse_atom(parser)?);

        let (line, column) = (parser.line(), parser.column());
        match parser.bump()? {
            Token::Comma => {}
            Token::RBrace => break,
            other => return Err(unexpected(&other, "',' or '}'", line, column)),
        }
    }

    Ok(items)
}

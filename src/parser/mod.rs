// Author: Dustin Pilgrim
// License: MIT

use crate::lexer::{Lexer, Token};
use crate::Error;
use crate::ast::{Document, Literal};

mod document;
mod value;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Option<Token>,
    peek_line: usize,
    peek_column: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(input);
        let peek = Some(lexer.next_token()?);
        let (peek_line, peek_column) = (lexer.token_line(), lexer.token_column());
        Ok(Self {
            lexer,
            peek,
            peek_line,
            peek_column,
        })
    }

    pub(crate) fn bump(&mut self) -> Result<Token, Error> {
        let curr = self.peek.take().ok_or(Error::UnexpectedEof {
            message: "Unexpected end of input".into(),
            line: self.lexer.line(),
            column: self.lexer.column(),
        })?;
        if curr != Token::Eof {
            self.peek = Some(self.lexer.next_token()?);
            self.peek_line = self.lexer.token_line();
            self.peek_column = self.lexer.token_column();
        } else {
            self.peek = Some(Token::Eof);
        }
        Ok(curr)
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.peek.as_ref()
    }

    pub(crate) fn expect(&mut self, expected: Token) -> Result<Token, Error> {
        let (line, column) = (self.line(), self.column());
        let token = self.bump()?;
        if token != expected {
            return Err(unexpected(&token, &expected.describe(), line, column));
        }
        Ok(token)
    }

    /// Line of the token currently under the cursor.
    pub(crate) fn line(&self) -> usize {
        self.peek_line
    }

    pub(crate) fn column(&self) -> usize {
        self.peek_column
    }

    pub fn parse_document(&mut self) -> Result<Document, Error> {
        document::parse_document(self)
    }

    /// Parse a standalone braced list such as a declared list default.
    pub fn parse_list_literal(&mut self) -> Result<Vec<Literal>, Error> {
        let items = value::parse_list(self)?;
        self.expect(Token::Eof)?;
        Ok(items)
    }
}

pub(crate) fn unexpected(token: &Token, wanted: &str, line: usize, column: usize) -> Error {
    if *token == Token::Eof {
        return Error::UnexpectedEof {
            message: format!("expected {}", wanted),
            line,
            column,
        };
    }
    Error::Syntax {
        message: format!("expected {}, found {}", wanted, token.describe()),
        line,
        column,
        hint: None,
    }
}

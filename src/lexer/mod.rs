// Author: Dustin Pilgrim
// License: MIT

use std::str::Chars;
use crate::Error;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // --- literals ---
    /// Unquoted text: names, numbers, booleans and bare strings.
    Word(String),
    /// Quoted text with escapes already resolved.
    Quoted(String),

    // --- structure ---
    Equals,
    LBrace,
    RBrace,
    Comma,

    Eof,
}

impl Token {
    /// Human readable form used in syntax errors.
    pub fn describe(&self) -> String {
        match self {
            Token::Word(w) => format!("'{}'", w),
            Token::Quoted(s) => format!("\"{}\"", s),
            Token::Equals => "'='".into(),
            Token::LBrace => "'{'".into(),
            Token::RBrace => "'}'".into(),
            Token::Comma => "','".into(),
            Token::Eof => "end of input".into(),
        }
    }
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
    token_line: usize,
    token_column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 0,
            token_line: 1,
            token_column: 0,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Line where the most recently returned token started.
    pub fn token_line(&self) -> usize {
        self.token_line
    }

    pub fn token_column(&self) -> usize {
        self.token_column
    }

    /// Newlines are insignificant, so there is a single tokenization mode.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        tokenizer::next_token(self)
    }
}

#[cfg(test)]
mod tests;

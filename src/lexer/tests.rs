#[cfg(test)]
use super::*;

fn collect(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token().expect("Failed to get token");
        let done = tok == Token::Eof;
        tokens.push(tok);
        if done {
            break;
        }
    }
    tokens
}

#[test]
fn test_full_document_tokens() {
    let input = r#"
target = "Neighbour"
repeat = 3
lotto_numbers = {4, 8, 15}
person euler {
  male = true
}
"#;

    let expected_tokens = vec![
        Token::Word("target".into()),
        Token::Equals,
        Token::Quoted("Neighbour".into()),
        Token::Word("repeat".into()),
        Token::Equals,
        Token::Word("3".into()),
        Token::Word("lotto_numbers".into()),
        Token::Equals,
        Token::LBrace,
        Token::Word("4".into()),
        Token::Comma,
        Token::Word("8".into()),
        Token::Comma,
        Token::Word("15".into()),
        Token::RBrace,
        Token::Word("person".into()),
        Token::Word("euler".into()),
        Token::LBrace,
        Token::Word("male".into()),
        Token::Equals,
        Token::Word("true".into()),
        Token::RBrace,
        Token::Eof,
    ];

    assert_eq!(collect(input), expected_tokens);
}

#[test]
fn test_comments_are_skipped() {
    let input = "# leading comment\nage = 41 # trailing\n";
    assert_eq!(
        collect(input),
        vec![
            Token::Word("age".into()),
            Token::Equals,
            Token::Word("41".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_words_keep_signs_dots_and_hyphens() {
    let input = "-7 3.14159 Baden-Württemberg 0x1F";
    assert_eq!(
        collect(input),
        vec![
            Token::Word("-7".into()),
            Token::Word("3.14159".into()),
            Token::Word("Baden-Württemberg".into()),
            Token::Word("0x1F".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_string_escapes() {
    let input = r#""\n\t\\\"" 'single "quoted"'"#;
    assert_eq!(
        collect(input),
        vec![
            Token::Quoted("\n\t\\\"".into()),
            Token::Quoted("single \"quoted\"".into()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_unclosed_string_error() {
    let mut lexer = Lexer::new("name = \"World");
    assert_eq!(lexer.next_token(), Ok(Token::Word("name".into())));
    assert_eq!(lexer.next_token(), Ok(Token::Equals));

    match lexer.next_token() {
        Err(Error::UnclosedString { quote, line, column }) => {
            assert_eq!(quote, '"');
            assert_eq!(line, 1);
            assert_eq!(column, 7);
        }
        other => panic!("expected unclosed string, got {:?}", other),
    }
}

#[test]
fn test_token_positions() {
    let mut lexer = Lexer::new("a = 1\n  b = 2");
    for _ in 0..3 {
        lexer.next_token().expect("Failed to get token");
    }
    assert_eq!(lexer.next_token(), Ok(Token::Word("b".into())));
    assert_eq!(lexer.token_line(), 2);
    assert_eq!(lexer.token_column(), 2);
}

#[test]
fn test_control_character_is_rejected() {
    let mut lexer = Lexer::new("\u{7}");
    assert!(matches!(
        lexer.next_token(),
        Err(Error::UnexpectedCharacter { character: '\u{7}', .. })
    ));
}

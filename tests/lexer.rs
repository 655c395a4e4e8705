use arithmo::{
    ast::Position,
    error::LexError,
    interpreter::lexer::{Lexer, TokenKind, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn operators_and_punctuation() {
    use TokenKind::{Caret, Eof, LParen, Minus, Plus, RParen, Slash, Star};

    assert_eq!(kinds("+-*/^()"),
               vec![Plus, Minus, Star, Slash, Caret, LParen, RParen, Eof]);
}

#[test]
fn integer_and_float_literals() {
    let tokens = tokenize("42 3.14 .5 2.").unwrap();
    let pairs: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text)).collect();

    assert_eq!(pairs,
               vec![(TokenKind::Integer, "42"),
                    (TokenKind::Float, "3.14"),
                    (TokenKind::Float, ".5"),
                    (TokenKind::Float, "2."),
                    (TokenKind::Eof, "")]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(kinds(" \t2 +\n 3 "), kinds("2+3"));
}

#[test]
fn empty_input_is_a_single_eof() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].position, Position::new(0, 1, 1));
}

#[test]
fn eof_is_positioned_at_end_of_input() {
    let tokens = tokenize("12 + 3  ").unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.position, Position::new(8, 1, 9));
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = tokenize("1 +\n  22").unwrap();

    assert_eq!(tokens[0].position, Position::new(0, 1, 1));
    assert_eq!(tokens[1].position, Position::new(2, 1, 3));
    assert_eq!(tokens[2].position, Position::new(6, 2, 3));
}

#[test]
fn unexpected_character_points_at_it() {
    let err = tokenize("2 $ 3").unwrap_err();
    assert_eq!(err,
               LexError::UnexpectedCharacter { character: '$',
                                               position:  Position::new(2, 1, 3), });
}

#[test]
fn unexpected_character_on_later_line() {
    let err = tokenize("1\n+ x").unwrap_err();
    assert_eq!(err.character(), 'x');
    assert_eq!(err.position(), Position::new(4, 2, 3));
}

#[test]
fn lone_decimal_point_is_unexpected() {
    let err = tokenize("1 + .").unwrap_err();
    assert!(matches!(err, LexError::UnexpectedCharacter { character: '.', .. }));
}

#[test]
fn second_decimal_point_is_malformed() {
    let err = tokenize("1 + 1.2.3").unwrap_err();
    assert_eq!(err,
               LexError::MalformedNumber { literal:  "1.2.3".to_string(),
                                           position: Position::new(7, 1, 8), });

    let err = tokenize("1..5").unwrap_err();
    assert_eq!(err.position().offset, 2);
}

#[test]
fn lexer_stops_after_an_error() {
    let mut lexer = Lexer::new("1 # 2");
    assert!(lexer.next().unwrap().is_ok());
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}

#[test]
fn lexer_ends_after_single_eof() {
    let mut lexer = Lexer::new("7");
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Integer);
    assert_eq!(lexer.next().unwrap().unwrap().kind, TokenKind::Eof);
    assert!(lexer.next().is_none());
}

#[test]
fn retokenizing_yields_identical_tokens() {
    let source = "(1.5 + 2) ^ -3 / 4";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn tokens_render_like_their_kind() {
    let rendered: Vec<String> = tokenize("3 + 1.5").unwrap()
                                                    .iter()
                                                    .map(ToString::to_string)
                                                    .collect();
    assert_eq!(rendered, vec!["(INTEGER:3)", "(PLUS)", "(FLOAT:1.5)", "(EOF)"]);
}

#[test]
fn long_single_line_keeps_exact_columns() {
    let source = "1 ".repeat(100_000);
    let tokens = tokenize(&source).unwrap();

    assert_eq!(tokens.len(), 100_001);
    assert_eq!(tokens[99_999].position, Position::new(199_998, 1, 199_999));
    assert_eq!(tokens[100_000].position, Position::new(200_000, 1, 200_001));
}

#[test]
fn columns_restart_after_each_newline() {
    let err = tokenize("1 +\n\t2 é").unwrap_err();
    assert_eq!(err.position(), Position::new(7, 2, 4));

    let tokens = tokenize("1\n\n   2").unwrap();
    assert_eq!(tokens[1].position, Position::new(5, 3, 4));
}

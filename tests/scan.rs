use lox_scan::{ErrorKind, Literal, Scanner, Token, TokenKind};
use pretty_assertions::assert_eq;
use std::{fs::File, path::Path};

fn scan_file(name: &str) -> lox_scan::Result<Vec<Token>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name);
    Scanner::scan_reader(File::open(path)?)
}

fn tok(kind: TokenKind, lexeme: &str, line: usize) -> Token {
    Token::new(kind, lexeme, line)
}

fn ident(name: &str, line: usize) -> Token {
    Token::new(TokenKind::Identifier, name, line).with_literal(Literal::Text(name.into()))
}

#[test]
fn scans_valid_source_file() -> lox_scan::Result<()> {
    use TokenKind::*;
    let expected = vec![
        tok(Class, "class", 1), ident("foo", 1), tok(LeftBrace, "{", 1),
        tok(Fun, "fun", 2), ident("bar", 2), tok(LeftParen, "(", 2), tok(RightParen, ")", 2), tok(LeftBrace, "{", 2),
        tok(If, "if", 3), ident("x", 3), tok(EqualEqual, "==", 3), tok(True, "true", 3), tok(LeftBrace, "{", 3),
        tok(Return, "return", 4), tok(Number, "45", 4).with_literal(Literal::Number(45.0)),
        tok(RightBrace, "}", 5),
        tok(Var, "var", 6), ident("baz", 6), tok(Equal, "=", 6),
        tok(String, "testing", 6).with_literal(Literal::Text("testing".into())),
        tok(RightBrace, "}", 7),
        tok(RightBrace, "}", 8),
        Token::end_of_file(9),
    ];
    assert_eq!(expected, scan_file("source-1.txt")?);
    Ok(())
}

#[test]
fn rejects_source_file_with_illegal_character() {
    let e = scan_file("source-2.txt").err().unwrap();
    assert!(matches!(e.kind(), ErrorKind::IllegalCharacter { line: 4, character: '#' }));
    assert_eq!("[line 4] Error: Illegal character '#'.", e.to_string());
}

#[test]
fn multi_line_strings_and_numbers() -> lox_scan::Result<()> {
    use TokenKind::*;
    let tokens = scan_file("source-3.txt")?;

    let string = &tokens[1];
    assert_eq!(String, string.kind);
    assert_eq!(Some("multi\nline"), string.literal.as_text());
    assert_eq!(3, string.line);

    let numbers: Vec<(f64, usize)> = tokens
        .iter()
        .filter_map(|t| t.literal.as_number().map(|n| (n, t.line)))
        .collect();
    assert_eq!(vec![(3.25, 4), (86723.0, 5), (3.0, 6), (1.0, 6)], numbers);

    assert_eq!(Some(&Token::end_of_file(7)), tokens.last());
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let e = scan_file("does-not-exist.txt").err().unwrap();
    assert!(matches!(e.kind(), ErrorKind::Io(_)));
    assert_eq!(None, e.line());
}

#[test]
fn top_level_scan_matches_scanner() -> lox_scan::Result<()> {
    let src = "print 1 + 2;";
    assert_eq!(Scanner::new(src)?.scan()?, lox_scan::scan(src)?);
    Ok(())
}

#[test]
fn renders_tokens_for_diagnostics() -> lox_scan::Result<()> {
    let rendered: Vec<String> =
        lox_scan::scan("x = \"y\"")?.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        vec![
            "{type:IDENTIFIER, lexeme:x, literal:x, line:1}",
            "{type:EQUAL, lexeme:=, literal:nil, line:1}",
            "{type:STRING, lexeme:y, literal:y, line:1}",
            "{type:EOF, lexeme:, literal:nil, line:1}",
        ],
        rendered
    );
    Ok(())
}

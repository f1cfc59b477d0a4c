use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum TokenKind {
    #[default]
    Unknown,

    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    Identifier, String, Number,

    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    EndOfFile,
}

impl TokenKind {
    /// Looks up `text` in the reserved word table.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        crate::scanner::KEYWORDS.get(text).copied()
    }

    pub fn is_keyword(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            And | Class | Else | False | Fun | For | If | Nil | Or
                | Print | Return | Super | This | True | Var | While
        )
    }

    fn name(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Unknown => "UNKNOWN",
            LeftParen => "LEFT_PAREN",
            RightParen => "RIGHT_PAREN",
            LeftBrace => "LEFT_BRACE",
            RightBrace => "RIGHT_BRACE",
            Comma => "COMMA",
            Dot => "DOT",
            Minus => "MINUS",
            Plus => "PLUS",
            Semicolon => "SEMICOLON",
            Slash => "SLASH",
            Star => "STAR",
            Bang => "BANG",
            BangEqual => "BANG_EQUAL",
            Equal => "EQUAL",
            EqualEqual => "EQUAL_EQUAL",
            Greater => "GREATER",
            GreaterEqual => "GREATER_EQUAL",
            Less => "LESS",
            LessEqual => "LESS_EQUAL",
            Identifier => "IDENTIFIER",
            String => "STRING",
            Number => "NUMBER",
            And => "AND",
            Class => "CLASS",
            Else => "ELSE",
            False => "FALSE",
            Fun => "FUN",
            For => "FOR",
            If => "IF",
            Nil => "NIL",
            Or => "OR",
            Print => "PRINT",
            Return => "RETURN",
            Super => "SUPER",
            This => "THIS",
            True => "TRUE",
            Var => "VAR",
            While => "WHILE",
            EndOfFile => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value carried by a token.
#[derive(Debug, PartialEq, Clone, Default)]
pub enum Literal {
    #[default]
    None,
    Text(String),
    Number(f64),
}

impl Literal {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("nil"),
            Literal::Text(s) => f.write_str(s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Literal,
    pub line: usize,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, line: usize) -> Token {
        Token { kind, lexeme: lexeme.into(), literal: Literal::None, line }
    }

    pub fn with_literal(mut self, literal: Literal) -> Token {
        self.literal = literal;
        self
    }

    pub fn end_of_file(line: usize) -> Token {
        Token::new(TokenKind::EndOfFile, "", line)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{type:{}, lexeme:{}, literal:{}, line:{}}}",
            self.kind, self.lexeme, self.literal, self.line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_the_default_kind() {
        assert_eq!(TokenKind::Unknown, TokenKind::default());
    }

    #[test]
    fn kinds_display_as_screaming_snake_case() {
        assert_eq!("BANG_EQUAL", TokenKind::BangEqual.to_string());
        assert_eq!("EOF", TokenKind::EndOfFile.to_string());
        assert_eq!("IDENTIFIER", TokenKind::Identifier.to_string());
    }

    #[test]
    fn keyword_lookup_is_exact() {
        assert_eq!(Some(TokenKind::While), TokenKind::keyword("while"));
        assert_eq!(None, TokenKind::keyword("While"));
        assert_eq!(None, TokenKind::keyword("iffy"));
    }

    #[test]
    fn is_keyword_only_for_reserved_words() {
        assert!(TokenKind::Super.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::EndOfFile.is_keyword());
    }

    #[test]
    fn renders_string_token() {
        let token = Token::new(TokenKind::String, "bar", 2)
            .with_literal(Literal::Text("bar".into()));
        assert_eq!("{type:STRING, lexeme:bar, literal:bar, line:2}", token.to_string());
    }

    #[test]
    fn renders_number_token() {
        let token = Token::new(TokenKind::Number, "86723", 3)
            .with_literal(Literal::Number(86723.0));
        assert_eq!("{type:NUMBER, lexeme:86723, literal:86723, line:3}", token.to_string());
    }

    #[test]
    fn renders_end_of_file() {
        assert_eq!("{type:EOF, lexeme:, literal:nil, line:9}", Token::end_of_file(9).to_string());
    }

    #[test]
    fn literal_accessors() {
        assert_eq!(Some("x"), Literal::Text("x".into()).as_text());
        assert_eq!(None, Literal::Number(1.0).as_text());
        assert_eq!(Some(1.5), Literal::Number(1.5).as_number());
        assert_eq!(None, Literal::None.as_number());
    }
}

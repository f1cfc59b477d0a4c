use crate::{
    error::{Error, Result},
    token::{Literal, Token, TokenKind},
};
use peekmore::{PeekMore, PeekMoreIterator};
use phf::phf_map;
use std::{io::Read, str::CharIndices};
use tracing::{debug, trace};

pub(crate) static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "and" => TokenKind::And,
    "class" => TokenKind::Class,
    "else" => TokenKind::Else,
    "false" => TokenKind::False,
    "for" => TokenKind::For,
    "fun" => TokenKind::Fun,
    "if" => TokenKind::If,
    "nil" => TokenKind::Nil,
    "or" => TokenKind::Or,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "super" => TokenKind::Super,
    "this" => TokenKind::This,
    "true" => TokenKind::True,
    "var" => TokenKind::Var,
    "while" => TokenKind::While,
};

/// Read position within a source buffer.
///
/// `start` marks where the current lexeme began and `current` is the byte
/// index of the next unconsumed character.
struct Cursor<'a> {
    src: &'a str,
    chars: PeekMoreIterator<CharIndices<'a>>,
    start: usize,
    current: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekmore(),
            start: 0,
            current: 0,
        }
    }

    fn mark_start(&mut self) {
        self.start = self.current;
    }

    fn lexeme(&self) -> &'a str {
        &self.src[self.start..self.current]
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_next(&mut self) -> Option<char> {
        self.chars.peek_nth(1).map(|&(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let (idx, c) = self.chars.next()?;
        self.current = idx + c.len_utf8();
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, should_continue: impl Fn(char) -> bool) {
        while self.peek().map_or(false, &should_continue) {
            self.advance();
        }
    }
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    line: usize,
    failed: bool,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    /// Yields the next token, skipping whitespace and comments. The end of
    /// input marker is not produced here; see [`Scanner::scan`].
    fn next(&mut self) -> Option<Result<Token>> {
        if self.failed {
            return None;
        }

        loop {
            self.cursor.mark_start();
            let c = self.cursor.advance()?;

            match self.scan_token(c) {
                None => continue,
                Some(Ok(token)) => {
                    trace!(kind = %token.kind, lexeme = token.lexeme.as_str(), line = token.line, "token");
                    return Some(Ok(token));
                },
                Some(Err(e)) => {
                    self.failed = true;
                    return Some(Err(e));
                },
            }
        }
    }
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `src`. An empty source is rejected since there
    /// is nothing to scan.
    pub fn new(src: &'a str) -> Result<Self> {
        if src.is_empty() {
            return Err(Error::invalid_input("Empty source."));
        }

        Ok(Self {
            cursor: Cursor::new(src),
            line: 1,
            failed: false,
        })
    }

    /// Reads all of `reader` into memory and scans it.
    pub fn scan_reader<R: Read>(mut reader: R) -> Result<Vec<Token>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let src = String::from_utf8(bytes)
            .map_err(|_| Error::invalid_input("Source is not valid UTF-8."))?;
        Scanner::new(&src)?.scan()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Scans the whole buffer. On success the tokens always end with a
    /// single `EndOfFile`; on failure no tokens are returned.
    pub fn scan(mut self) -> Result<Vec<Token>> {
        let mut tokens = match self.by_ref().collect::<Result<Vec<Token>>>() {
            Ok(tokens) => tokens,
            Err(e) => {
                debug!(error = %e, line = self.line, "scan aborted");
                return Err(e);
            },
        };
        tokens.push(Token::end_of_file(self.line));

        debug!(tokens = tokens.len(), line = self.line, "scan complete");
        Ok(tokens)
    }

    fn scan_token(&mut self, c: char) -> Option<Result<Token>> {
        use TokenKind::*;
        match c {
            '(' => Some(Ok(self.token(LeftParen))),
            ')' => Some(Ok(self.token(RightParen))),
            '{' => Some(Ok(self.token(LeftBrace))),
            '}' => Some(Ok(self.token(RightBrace))),
            ',' => Some(Ok(self.token(Comma))),
            '.' => Some(Ok(self.token(Dot))),
            '-' => Some(Ok(self.token(Minus))),
            '+' => Some(Ok(self.token(Plus))),
            ';' => Some(Ok(self.token(Semicolon))),
            '*' => Some(Ok(self.token(Star))),
            '!' => Some(Ok(self.token_if_next('=', BangEqual, Bang))),
            '=' => Some(Ok(self.token_if_next('=', EqualEqual, Equal))),
            '<' => Some(Ok(self.token_if_next('=', LessEqual, Less))),
            '>' => Some(Ok(self.token_if_next('=', GreaterEqual, Greater))),
            '/' => {
                if self.cursor.match_char('/') {
                    self.cursor.advance_while(|n| n != '\n');
                    None
                } else {
                    Some(Ok(self.token(Slash)))
                }
            },
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            },
            '"' => Some(self.extract_string()),
            c if c.is_ascii_digit() => Some(self.extract_number()),
            c if can_start_identifier(c) => Some(Ok(self.extract_identifier())),
            c => Some(Err(Error::illegal_character(self.line, c))),
        }
    }

    fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.cursor.lexeme(), self.line)
    }

    fn token_if_next(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) -> Token {
        let kind = if self.cursor.match_char(expected) { matched } else { otherwise };
        self.token(kind)
    }

    fn extract_string(&mut self) -> Result<Token> {
        while let Some(c) = self.cursor.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.cursor.advance();
        }

        if !self.cursor.match_char('"') {
            return Err(Error::unterminated_string(self.line));
        }

        let quoted = self.cursor.lexeme();
        let text = &quoted[1..quoted.len() - 1];
        Ok(Token::new(TokenKind::String, text, self.line).with_literal(Literal::Text(text.into())))
    }

    fn extract_number(&mut self) -> Result<Token> {
        self.cursor.advance_while(|n| n.is_ascii_digit());

        if self.cursor.peek() == Some('.') && self.cursor.peek_next().map_or(false, |n| n.is_ascii_digit()) {
            self.cursor.advance();
            self.cursor.advance_while(|n| n.is_ascii_digit());
        }

        let text = self.cursor.lexeme();
        match text.parse::<f64>() {
            Ok(number) if number.is_finite() => {
                Ok(self.token(TokenKind::Number).with_literal(Literal::Number(number)))
            },
            _ => Err(Error::malformed_number(self.line, text)),
        }
    }

    fn extract_identifier(&mut self) -> Token {
        self.cursor.advance_while(is_part_of_valid_identifier);

        let text = self.cursor.lexeme();
        match KEYWORDS.get(text) {
            Some(kind) => self.token(*kind),
            None => self.token(TokenKind::Identifier).with_literal(Literal::Text(text.into())),
        }
    }
}

fn can_start_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_part_of_valid_identifier(c: char) -> bool {
    can_start_identifier(c) || c.is_ascii_digit()
}

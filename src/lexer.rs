use crate::ast::{Span, Token, TokenKind};

/// Error raised while turning source text into tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    UnexpectedCharacter { ch: char, span: Span },
    UnterminatedString { span: Span },
    InvalidEscape { ch: char, span: Span },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedCharacter { ch, span } => {
                write!(f, "Unexpected character '{}' at {}", ch, span)
            }
            LexError::UnterminatedString { span } => {
                write!(f, "Unterminated string starting at {}", span)
            }
            LexError::InvalidEscape { ch, span } => {
                write!(f, "Invalid escape sequence '\\{}' at {}", ch, span)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        if self.current_char() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '/' && self.peek_char(1) == Some('/') {
                while let Some(c) = self.current_char() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char) -> Result<String, LexError> {
        let opening = Span::new(self.line, self.column, self.column + 1);
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\n' => break,
                '\\' => {
                    let escape_span = Span::new(self.line, self.column, self.column + 2);
                    self.advance();
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        Some('"') => result.push('"'),
                        Some('\'') => result.push('\''),
                        Some('\\') => result.push('\\'),
                        Some(ch) => return Err(LexError::InvalidEscape { ch, span: escape_span }),
                        None => return Err(LexError::UnterminatedString { span: opening }),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { span: opening })
    }

    fn read_number(&mut self) -> String {
        let mut number = String::new();
        let mut is_decimal = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_decimal
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_decimal = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        number
    }

    fn single(&mut self, kind: TokenKind, text: &str) -> (TokenKind, String) {
        self.advance();
        (kind, text.to_string())
    }

    /// Produces the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace_and_comments();

        let line = self.line;
        let start = self.column;

        let (kind, value) = match self.current_char() {
            None => return Ok(None),
            Some(':') => self.single(TokenKind::Colon, ":"),
            Some(';') => self.single(TokenKind::Semicolon, ";"),
            Some(',') => self.single(TokenKind::Comma, ","),
            Some('=') => self.single(TokenKind::Assign, "="),
            Some('+') => self.single(TokenKind::Plus, "+"),
            Some('-') => self.single(TokenKind::Minus, "-"),
            Some('*') => self.single(TokenKind::Multiply, "*"),
            Some('/') => self.single(TokenKind::Divide, "/"),
            Some('(') => self.single(TokenKind::OParen, "("),
            Some(')') => self.single(TokenKind::CParen, ")"),
            Some('{') => self.single(TokenKind::OBrace, "{"),
            Some('}') => self.single(TokenKind::CBrace, "}"),
            Some('"') => (TokenKind::String, self.read_string('"')?),
            Some('\'') => (TokenKind::String, self.read_string('\'')?),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();
                let kind = match ident.as_str() {
                    "let" => TokenKind::Let,
                    "const" => TokenKind::Const,
                    "if" => TokenKind::If,
                    "else" => TokenKind::Else,
                    "number" => TokenKind::NumberType,
                    "string" => TokenKind::StringType,
                    "boolean" => TokenKind::BooleanType,
                    "true" | "false" => TokenKind::Boolean,
                    _ => TokenKind::Identifier,
                };
                (kind, ident)
            }
            Some(ch) if ch.is_ascii_digit() => (TokenKind::Number, self.read_number()),
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    span: Span::new(line, start, start + 1),
                });
            }
        };

        // Strings may not span lines, so the token ends on its starting line.
        Ok(Some(Token::new(kind, value, Span::new(line, start, self.column))))
    }

    /// Tokenizes the whole input.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        tracing::trace!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }
}

#[test]
fn test_keywords() {
    let tokens = Lexer::new("let const if else true false").tokenize().unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Const,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Boolean,
            TokenKind::Boolean,
        ]
    );
}

#[test]
fn test_columns_are_one_based() {
    let tokens = Lexer::new("x = 10;").tokenize().unwrap();
    assert_eq!(tokens[0].span, Span::new(1, 1, 2));
    assert_eq!(tokens[1].span, Span::new(1, 3, 4));
    assert_eq!(tokens[2].span, Span::new(1, 5, 7));
    assert_eq!(tokens[3].span, Span::new(1, 7, 8));
}

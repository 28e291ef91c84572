use serde::Serialize;

/// Source location of a token or node.
///
/// All fields are 1-based. `start` is the column of the first character and
/// `end` is the column one past the last character. A node spanning several
/// tokens takes `line`/`start` from its first token and `end` from its last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(line: usize, start: usize, end: usize) -> Self {
        Span { line, start, end }
    }

    /// Span running from the start of `first` to the end of `last`.
    pub fn cover(first: Span, last: Span) -> Self {
        Span {
            line: first.line,
            start: first.start,
            end: last.end,
        }
    }

    /// Zero-width span right after this one, used to point at a missing token.
    pub fn after(self) -> Self {
        Span {
            line: self.line,
            start: self.end,
            end: self.end,
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}:{})", self.line, self.start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    // Keywords
    /// Mutable declaration keyword
    ///
    /// # Examples
    /// ```text
    /// let count: number = 0;
    /// ```
    Let,

    /// Immutable declaration keyword
    ///
    /// # Examples
    /// ```text
    /// const name: string = "slate";
    /// ```
    Const,

    /// Conditional keyword
    ///
    /// # Examples
    /// ```text
    /// if (ready) { println("go"); }
    /// ```
    If,

    /// Alternate branch of a conditional
    Else,

    // Type annotations
    /// `number`
    NumberType,
    /// `string`
    StringType,
    /// `boolean`
    BooleanType,

    // Literals and names
    /// Variable or function name
    ///
    /// Must start with a letter or underscore, followed by letters, digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// total
    /// readInput
    /// _tmp1
    /// ```
    Identifier,

    /// Decimal number literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// ```
    Number,

    /// String literal; the token value holds the text without quotes
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'item #1'
    /// ```
    String,

    /// `true` or `false`
    Boolean,

    // Punctuation
    Colon,
    Semicolon,
    Comma,
    /// `=`
    Assign,

    // Arithmetic
    Plus,
    Minus,
    Multiply,
    Divide,

    // Delimiters
    OParen,
    CParen,
    OBrace,
    CBrace,
}

impl TokenKind {
    /// How the token is written in source, for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Let => "'let'",
            TokenKind::Const => "'const'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::NumberType => "'number'",
            TokenKind::StringType => "'string'",
            TokenKind::BooleanType => "'boolean'",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number literal",
            TokenKind::String => "string literal",
            TokenKind::Boolean => "boolean literal",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Assign => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Multiply => "'*'",
            TokenKind::Divide => "'/'",
            TokenKind::OParen => "'('",
            TokenKind::CParen => "')'",
            TokenKind::OBrace => "'{'",
            TokenKind::CBrace => "'}'",
        }
    }
}

/// A lexical unit: kind, literal text and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

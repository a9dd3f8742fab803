use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // keywords
    Def,
    Extern,
    If,
    Then,
    Else,
    For,
    In,
    Var,

    Identifier,
    Number,

    // operators
    Plus,
    Minus,
    Star,
    Less,
    Equals,
    Bang,

    // delimiters
    LeftParen,
    RightParen,
    Comma,
    Semicolon,

    End,
    Unknown,
}

/// Reserved words, looked up after an identifier has been scanned.
const KEYWORDS: [(&str, TokenKind); 8] = [
    ("def", TokenKind::Def),
    ("extern", TokenKind::Extern),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("in", TokenKind::In),
    ("var", TokenKind::Var),
];

pub(crate) fn keyword(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|(_, kind)| *kind)
}

pub(crate) fn symbol(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        ',' => Some(TokenKind::Comma),
        ';' => Some(TokenKind::Semicolon),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '<' => Some(TokenKind::Less),
        '=' => Some(TokenKind::Equals),
        '!' => Some(TokenKind::Bang),
        _ => None,
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        let s = match self {
            Def => "'def'",
            Extern => "'extern'",
            If => "'if'",
            Then => "'then'",
            Else => "'else'",
            For => "'for'",
            In => "'in'",
            Var => "'var'",
            Identifier => "identifier",
            Number => "number",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Less => "'<'",
            Equals => "'='",
            Bang => "'!'",
            LeftParen => "'('",
            RightParen => "')'",
            Comma => "','",
            Semicolon => "';'",
            End => "end of input",
            Unknown => "unknown token",
        };
        f.write_str(s)
    }
}

/// A classified lexeme. Numbers keep their source text; conversion happens in
/// the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn end() -> Self {
        Token::new(TokenKind::End, "")
    }

    /// The operator character, if this token is one of the single-character
    /// operators.
    pub fn operator(&self) -> Option<char> {
        match self.kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Less
            | TokenKind::Equals
            | TokenKind::Bang => self.lexeme.chars().next(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::Number => write!(f, "number '{}'", self.lexeme),
            TokenKind::Unknown => write!(f, "unknown token '{}'", self.lexeme),
            kind => write!(f, "{}", kind),
        }
    }
}

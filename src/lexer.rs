use super::error::{Error, ErrorKind, Result};
use super::token::{keyword, symbol as symbol_kind, Token, TokenKind};
use combine::error::ParseError;
use combine::parser::char::digit;
use combine::parser::Parser;
use combine::stream::Stream;
use combine::{any, choice, eof, many, many1, optional, satisfy, satisfy_map, skip_many, token};

fn fraction<Input>() -> impl Parser<Input, Output = String>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (token('.'), many::<String, _, _>(digit())).map(|(dot, digits)| format!("{}{}", dot, digits))
}

// A second '.' ends the literal without being consumed, so "1.2.3" scans as
// "1.2" followed by ".3".
fn number<Input>() -> impl Parser<Input, Output = Token>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    choice((
        (many1::<String, _, _>(digit()), optional(fraction())).map(|(int, frac)| match frac {
            Some(frac) => int + &frac,
            None => int,
        }),
        fraction(),
    ))
    .map(|lexeme| Token::new(TokenKind::Number, lexeme))
}

fn ident<Input>() -> impl Parser<Input, Output = Token>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (
        satisfy(|c: char| c.is_ascii_alphabetic() || c == '_'),
        many::<String, _, _>(satisfy(|c: char| c.is_ascii_alphanumeric() || c == '_')),
    )
        .map(|(first, rest)| {
            let id = format!("{}{}", first, rest);
            match keyword(&id) {
                Some(kind) => Token::new(kind, id),
                None => Token::new(TokenKind::Identifier, id),
            }
        })
}

fn symbol<Input>() -> impl Parser<Input, Output = Token>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    satisfy_map(|c: char| symbol_kind(c).map(|kind| Token::new(kind, c.to_string())))
}

// Never fails: a character that starts no token comes back as `Unknown`.
pub(crate) fn lex<Input>() -> impl Parser<Input, Output = Token>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    skip_many(satisfy(|c: char| c.is_ascii_whitespace())).with(choice((
        ident(),
        number(),
        symbol(),
        eof().map(|_| Token::end()),
        any().map(|c: char| Token::new(TokenKind::Unknown, c.to_string())),
    )))
}

/// Pull-based cursor over a source buffer.
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Tokenizer { rest: source }
    }

    /// Returns the next token. Once the buffer is exhausted every call yields
    /// `End`.
    pub fn next_token(&mut self) -> Result<Token> {
        let (token, rest) = match lex().parse(self.rest) {
            Ok(scanned) => scanned,
            Err(_) => return Err(self.unknown_character()),
        };
        if token.kind == TokenKind::Unknown {
            return Err(self.unknown_character());
        }
        self.rest = rest;
        Ok(token)
    }

    fn unknown_character(&self) -> Error {
        let character = self
            .rest
            .chars()
            .find(|c| !c.is_ascii_whitespace())
            .unwrap_or_default();
        Error::from(ErrorKind::Lex { character })
    }
}

/// Tokenizes the whole buffer. The returned list always ends with `End`.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token()?;
        let end = token.kind == TokenKind::End;
        tokens.push(token);
        if end {
            break;
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod test {
    use super::super::token::TokenKind::*;
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_number() {
        assert_eq!(
            number().parse("3.14").map(|x| x.0),
            Ok(Token::new(Number, "3.14"))
        );
        assert_eq!(
            number().parse(".5").map(|x| x.0),
            Ok(Token::new(Number, ".5"))
        );
        assert_eq!(number().parse("42)").map(|x| x.0), Ok(Token::new(Number, "42")));
    }

    #[test]
    fn test_ident() {
        assert_eq!(
            ident().parse("test").map(|x| x.0),
            Ok(Token::new(Identifier, "test"))
        );
        assert_eq!(
            ident().parse("_x1 y").map(|x| x.0),
            Ok(Token::new(Identifier, "_x1"))
        );
        assert_eq!(ident().parse("def").map(|x| x.0), Ok(Token::new(Def, "def")));
    }

    #[test]
    fn test_lex() {
        assert_eq!(
            lex().parse("  \n\t(x").map(|x| x.0),
            Ok(Token::new(LeftParen, "("))
        );
        assert_eq!(lex().parse("   ").map(|x| x.0), Ok(Token::end()));
        assert_eq!(
            lex().parse("$").map(|x| x.0),
            Ok(Token::new(Unknown, "$"))
        );
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(tokenize("").unwrap(), vec![Token::end()]);
        assert_eq!(tokenize(" \t\r\n  ").unwrap(), vec![Token::end()]);
    }

    #[test]
    fn test_non_ascii_whitespace_rejected() {
        assert_eq!(
            tokenize("a\u{00A0}b").unwrap_err().kind(),
            &ErrorKind::Lex {
                character: '\u{00A0}'
            }
        );
    }

    #[test]
    fn test_end_is_repeated() {
        let mut tokenizer = Tokenizer::new("x");
        assert_eq!(
            tokenizer.next_token().unwrap(),
            Token::new(Identifier, "x")
        );
        assert_eq!(tokenizer.next_token().unwrap(), Token::end());
        assert_eq!(tokenizer.next_token().unwrap(), Token::end());
    }

    #[test]
    fn test_decimal() {
        assert_eq!(
            tokenize("3.14").unwrap(),
            vec![Token::new(Number, "3.14"), Token::end()]
        );
    }

    #[test]
    fn test_second_dot_splits_number() {
        assert_eq!(
            tokenize("1.2.3").unwrap(),
            vec![Token::new(Number, "1.2"), Token::new(Number, ".3"), Token::end()]
        );
    }

    #[test]
    fn test_keywords_and_symbols() {
        assert_eq!(
            kinds("def extern if then else for in var foo"),
            vec![Def, Extern, If, Then, Else, For, In, Var, Identifier, End]
        );
        assert_eq!(
            kinds("( ) , ; + - * < = !"),
            vec![
                LeftParen, RightParen, Comma, Semicolon, Plus, Minus, Star, Less, Equals, Bang,
                End
            ]
        );
    }

    #[test]
    fn test_definition_tokens() {
        assert_eq!(
            tokenize("def foo(a, b) a+b*2").unwrap(),
            vec![
                Token::new(Def, "def"),
                Token::new(Identifier, "foo"),
                Token::new(LeftParen, "("),
                Token::new(Identifier, "a"),
                Token::new(Comma, ","),
                Token::new(Identifier, "b"),
                Token::new(RightParen, ")"),
                Token::new(Identifier, "a"),
                Token::new(Plus, "+"),
                Token::new(Identifier, "b"),
                Token::new(Star, "*"),
                Token::new(Number, "2"),
                Token::end(),
            ]
        );
    }

    #[test]
    fn test_unknown_character() {
        let e = tokenize("1 $ 2").unwrap_err();
        assert_eq!(e.kind(), &ErrorKind::Lex { character: '$' });
    }

    #[test]
    fn test_idempotent() {
        let source = "def f(x) if x < 1 then 1 else f(x - 1) * 2.5";
        assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
    }
}

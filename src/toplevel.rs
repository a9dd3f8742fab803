use std::fs;
use std::path::Path;

use super::ast::Node;
use super::error::Result;
use super::lexer;
use super::parser::Parser;

/// Tokenizes the whole buffer up front, then parses every top-level unit in it.
pub fn parse_program(source: &str) -> Result<Vec<Node>> {
    let tokens = lexer::tokenize(source)?;
    Parser::new(tokens).parse_program()
}

/// Parses exactly one top-level unit. Tokens after it are ignored.
pub fn parse(source: &str) -> Result<Node> {
    let tokens = lexer::tokenize(source)?;
    Parser::new(tokens).parse_top_level()
}

/// Reads `path` and prints the tree of every unit it contains.
pub fn run(path: &Path) -> std::result::Result<(), failure::Error> {
    let source = fs::read_to_string(path)?;

    eprintln!("Parsing {}...", path.display());
    let nodes = parse_program(&source)?;
    eprintln!("Parsed {} top-level unit(s).", nodes.len());

    for node in &nodes {
        match node {
            Node::Function(f) if f.proto.is_anonymous() => println!("parsed a top-level expr"),
            Node::Function(_) => println!("parsed a function definition."),
            Node::Prototype(_) => println!("parsed an extern."),
            Node::Expr(_) => println!("parsed an if expression."),
        }
        print!("{}", node);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::super::ast::{Expr, Function, Prototype};
    use super::super::error::ErrorKind;
    use super::super::token::{Token, TokenKind};
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            parse("foo(1,2,3)").unwrap(),
            Node::Function(Function::new(
                Prototype::anonymous(),
                Expr::Call(
                    "foo".to_owned(),
                    vec![Expr::Number(1.0), Expr::Number(2.0), Expr::Number(3.0)]
                )
            ))
        );
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        assert_eq!(
            parse("x y").unwrap(),
            Node::Function(Function::new(Prototype::anonymous(), Expr::variable("x")))
        );
    }

    #[test]
    fn test_lex_error_wins() {
        assert_eq!(
            parse_program("def f(x) x; 1 $ 2").unwrap_err().kind(),
            &ErrorKind::Lex { character: '$' }
        );
    }

    #[test]
    fn test_first_error_aborts() {
        assert_eq!(
            parse_program("def f(x) x; def (").unwrap_err().kind(),
            &ErrorKind::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: Token::new(TokenKind::LeftParen, "(")
            }
        );
    }
}

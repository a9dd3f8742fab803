//! Front end for a small Kaleidoscope-style expression language.
//!
//! Source text is tokenized eagerly by [`lexer`] and the resulting token list
//! is parsed by [`parser::Parser`] into [`ast::Node`] trees, one per top-level
//! unit (definition, extern, conditional or bare expression).

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod toplevel;

pub use error::{Error, ErrorKind};
pub use lexer::tokenize;
pub use toplevel::{parse, parse_program};

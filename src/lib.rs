pub mod fmt;
pub mod lexer;

pub use lexer::{Cursor, Lexer, Operator, Span, Token, TokenKind};

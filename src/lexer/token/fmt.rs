use std::fmt::Display as _;

use bstr::ByteSlice;

use super::{Operator, Token, TokenKind};
use crate::fmt::Display;


impl std::fmt::Display for Operator {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Output { append: true } => ">>".fmt(f),
			Self::Output { append: false } => ">".fmt(f),
			Self::Input => "<".fmt(f),
		}
	}
}


impl<'a> Display<'a> for Token {
	type Context = &'a [u8];

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self.kind {
			TokenKind::Word => self.span.slice(context).as_bstr().fmt(f),
			TokenKind::Operator(op) => op.fmt(f),
			TokenKind::OpenParens => "(".fmt(f),
			TokenKind::CloseParens => ")".fmt(f),
			TokenKind::Semicolon => ";".fmt(f),
			TokenKind::Pipe => "|".fmt(f),
			TokenKind::Ampersand => "&".fmt(f),
			TokenKind::EndOfInput => "<end of input>".fmt(f),
		}
	}
}

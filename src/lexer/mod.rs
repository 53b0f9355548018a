mod cursor;
mod token;

use bstr::ByteSlice;
use log::trace;

pub use cursor::Cursor;
pub use token::{Operator, Span, Token, TokenKind};


/// Helper trait for classifying input bytes.
///
/// Every byte is either blank, a symbol, or a word constituent. The same symbol set
/// delimits words and dispatches operators.
trait CharClass {
	/// Blank characters: space, tab, carriage return, newline, vertical tab.
	fn is_blank(&self) -> bool;
	/// Symbol characters: the operator bytes.
	fn is_symbol(&self) -> bool;
	/// Word constituents: everything else.
	fn is_word(&self) -> bool;
}


impl CharClass for u8 {
	fn is_blank(&self) -> bool {
		// Note that this set is not the same as u8::is_ascii_whitespace, which includes
		// form feed, but not vertical tab.
		matches!(self, b' ' | b'\t' | b'\r' | b'\n' | 0x0B)
	}

	fn is_symbol(&self) -> bool {
		matches!(self, b'<' | b'|' | b'>' | b'&' | b';' | b'(' | b')')
	}

	fn is_word(&self) -> bool {
		!self.is_blank() && !self.is_symbol()
	}
}


/// The lexer for command lines.
///
/// Tokens carry positions instead of text, and therefore the lexer never allocates.
/// Slicing text out of the input is up to the caller.
#[derive(Debug)]
pub struct Lexer<'a> {
	cursor: Cursor<'a>,
}


impl<'a> Lexer<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self { cursor }
	}


	/// The scan position. Canonicalized past whitespace by every call to next_token
	/// or peek.
	pub fn cursor(&self) -> &Cursor<'a> {
		&self.cursor
	}


	/// Scan the next token, skipping surrounding whitespace.
	///
	/// This is total: once the input is exhausted, every further call produces
	/// EndOfInput with a zero length span at the end of the input.
	pub fn next_token(&mut self) -> Token {
		self.skip_blanks();

		let start = self.cursor.offset();

		let kind = match self.cursor.peek() {
			None => TokenKind::EndOfInput,

			Some(b'|') => self.single(TokenKind::Pipe),
			Some(b'(') => self.single(TokenKind::OpenParens),
			Some(b')') => self.single(TokenKind::CloseParens),
			Some(b';') => self.single(TokenKind::Semicolon),
			Some(b'&') => self.single(TokenKind::Ampersand),

			Some(b'<') => self.single(TokenKind::Operator(Operator::Input)),

			Some(b'>') => {
				self.cursor.step();

				// The lookahead for the second character must not read past the end of
				// the input. A trailing '>' is a plain output redirection.
				let append = self.cursor.peek() == Some(b'>');
				if append {
					self.cursor.step();
				}

				TokenKind::Operator(Operator::Output { append })
			}

			Some(_) => {
				while matches!(self.cursor.peek(), Some(c) if c.is_word()) {
					self.cursor.step();
				}

				TokenKind::Word
			}
		};

		let span = Span { start, end: self.cursor.offset() };

		// The cursor is left past trailing whitespace, for the next call and for the
		// caller to inspect.
		self.skip_blanks();

		trace!("token: {:?} at {} .. {}", kind, span.start, span.end);

		Token { kind, span }
	}


	/// Check whether the next significant byte is one of the given candidates.
	///
	/// Leading whitespace is skipped, and that advancement persists, but the byte
	/// itself is never consumed. At the end of the input, or with an empty candidate
	/// set, this is always false.
	pub fn peek(&mut self, candidates: &[u8]) -> bool {
		self.skip_blanks();

		let matched = match self.cursor.peek() {
			Some(c) => candidates.contains(&c),
			None => false,
		};

		trace!("peek: {:?} at {}: {}", candidates.as_bstr(), self.cursor.offset(), matched);

		matched
	}


	fn single(&mut self, kind: TokenKind) -> TokenKind {
		self.cursor.step();
		kind
	}


	fn skip_blanks(&mut self) {
		while matches!(self.cursor.peek(), Some(c) if c.is_blank()) {
			self.cursor.step();
		}
	}
}


impl<'a> Iterator for Lexer<'a> {
	type Item = Token;

	fn next(&mut self) -> Option<Self::Item> {
		match self.next_token() {
			Token { kind: TokenKind::EndOfInput, .. } => None,
			token => Some(token),
		}
	}
}

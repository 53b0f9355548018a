mod fmt;


/// Redirection operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Output { append: bool }, // >, >>
	Input,                   // <
}


/// A contiguous region of the input buffer, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
	pub start: usize,
	pub end: usize,
}


impl Span {
	pub fn len(&self) -> usize {
		self.end - self.start
	}


	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}


	/// The text delimited by this span.
	pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
		&input[self.start .. self.end]
	}
}


/// All possible kinds of token in the command language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	/// A maximal run of bytes that are neither whitespace nor symbols. Quote
	/// characters are ordinary word constituents.
	Word,

	/// Redirection operators.
	Operator(Operator),

	OpenParens,  // (
	CloseParens, // )

	// Semicolons, pipes and ampersands are not considered operators because they
	// separate different commands, instead of being attributed to a single command.
	Semicolon, // ;
	Pipe,      // |
	Ampersand, // &

	/// The end of the input. Scanning past it produces it again, indefinitely.
	EndOfInput,
}


/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub span: Span,
}

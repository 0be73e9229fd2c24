//--> Imports <--

use std::{
	fmt,
	ops::Range,
};

use logos::Logos;

//--> Structs <--

/// A source line broken into a command and its parameter text.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	pub command: String,
	pub param: String,
	pub span: Range<usize>,
}

/// Text the lexer couldn't make sense of.
#[derive(Clone, Debug, PartialEq)]
pub struct LexError {
	pub span: Range<usize>,
	pub source: String,
}

struct Word {
	text: String,
	span: Range<usize>,
}

//--> Enums <--

#[derive(Clone, Copy, Debug, PartialEq, Logos)]
enum TokenInner {
	#[regex(r"//[^\n]*")]
	Comment,

	#[regex(r"[^ \t\r\n\x0B\x0C/]+")]
	#[token("/")]
	Text,

	#[error]
	#[regex(r"[ \t\r\n\x0B\x0C]+", logos::skip)]
	Error,
}

//--> Functions <--

/// Splits a line into its command and parameter text.
///
/// Everything from `//` onward is a comment. Pieces of text that touch each other form one word, so `a/b` stays
/// whole while `a//b` is just `a`. Parameter words are joined back together with single spaces.
pub fn scan(line_text: &str) -> Result<Option<Line>, LexError> {
	let mut words: Vec<Word> = Vec::new();

	for (token, span) in TokenInner::lexer(line_text).spanned() {
		match token {
			TokenInner::Comment => break,
			TokenInner::Error => return Err(LexError { source: String::from(&line_text[span.clone()]), span }),
			TokenInner::Text => match words.last_mut() {
				Some(word) if word.span.end == span.start => {
					word.text.push_str(&line_text[span.clone()]);
					word.span.end = span.end;
				},
				_ => words.push(Word { text: String::from(&line_text[span.clone()]), span }),
			},
		}
	}

	let mut words = words.into_iter();

	let command = match words.next() {
		Some(word) => word,
		None => return Ok(None),
	};

	let param = words.map(|w| w.text).collect::<Vec<String>>().join(" ");

	Ok(Some(Line { command: command.text, param, span: command.span }))
}

impl fmt::Display for LexError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Couldn't lex this text: {}", self.source)
	}
}

//--> Unit Tests <--

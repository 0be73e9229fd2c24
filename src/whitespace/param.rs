//--> Imports <--

use std::{
	fmt,
	num::{IntErrorKind, ParseIntError},
};

use super::emitter::{
	NEWLINE,
	SPACE,
	TAB,
};

//--> Type Aliases <--

pub(crate) type Result = std::result::Result<String, ParamError>;

//--> Enums <--

#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
	Missing,
	Malformed(String),
}

//--> Functions <--

/// Encodes parameter text as tokens, terminator included.
///
/// `0b` literals are already signed token bodies and are only remapped (`0` is a space, `1` a tab). Decimal and
/// `0x` hexadecimal numbers are parsed as 32-bit signed integers and written as a sign token followed by the
/// magnitude in binary, most significant bit first.
///
/// A `0b` literal must have at least one digit, and its digits may only be `0` or `1`.
pub fn encode(text: &str) -> Result {
	let text = text.trim();

	if text.is_empty() { return Err(ParamError::Missing) }

	if let Some(body) = text.strip_prefix("0b") {
		encode_literal(body)
	} else if let Some(digits) = text.strip_prefix("0x") {
		match i32::from_str_radix(digits, 16) {
			Ok(p) => Ok(encode_number(p)),
			Err(err) => Err(ParamError::malformed(text, "hexadecimal", err)),
		}
	} else {
		match text.parse::<i32>() {
			Ok(p) => Ok(encode_number(p)),
			Err(err) => Err(ParamError::malformed(text, "decimal", err)),
		}
	}
}

fn encode_literal(body: &str) -> Result {
	if body.is_empty() { return Err(ParamError::Malformed(String::from("binary literal `0b` has no digits"))) }

	let mut tokens = String::with_capacity(body.len() + 1);

	for digit in body.chars() {
		match digit {
			'0' => tokens.push(SPACE),
			'1' => tokens.push(TAB),
			other => return Err(ParamError::Malformed(format!("binary literal `0b{}` contains `{}`", body, other))),
		}
	}

	tokens.push(NEWLINE);

	Ok(tokens)
}

fn encode_number(p: i32) -> String {
	let magnitude = format!("{:b}", p.unsigned_abs());
	let mut tokens = String::with_capacity(magnitude.len() + 2);

	tokens.push(if p < 0 { TAB } else { SPACE });

	for bit in magnitude.chars() {
		tokens.push(if bit == '1' { TAB } else { SPACE });
	}

	tokens.push(NEWLINE);

	tokens
}

impl ParamError {
	fn malformed(text: &str, form: &str, err: ParseIntError) -> ParamError {
		match err.kind() {
			IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParamError::Malformed(format!("{} number `{}` doesn't fit in 32 bits", form, text)),
			_ => ParamError::Malformed(format!("`{}` isn't a valid {} number", text, form)),
		}
	}
}

impl fmt::Display for ParamError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ParamError::Missing => write!(f, "no parameter given"),
			ParamError::Malformed(reason) => write!(f, "{}", reason),
		}
	}
}

//--> Unit Tests <--

//--> Imports <--

use super::{
	param::{self, ParamError},
	EncodeError,
};

//--> Constants <--

pub const SPACE: char = ' ';
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';

//--> Functions <--

/// Writes a primitive instruction: its prefix, then its encoded parameter if it takes one.
///
/// The parameter is encoded before anything is written, so a bad parameter leaves `out` untouched.
pub fn emit(mnemonic: &str, prefix: &str, takes_parameter: bool, param_text: &str, out: &mut String) -> Result<(), EncodeError> {
	if takes_parameter {
		let tokens = param::encode(param_text).map_err(|err| match err {
			ParamError::Missing => EncodeError::MissingParameter(String::from(mnemonic)),
			ParamError::Malformed(reason) => EncodeError::MalformedParameter { mnemonic: String::from(mnemonic), reason },
		})?;

		out.push_str(prefix);
		out.push_str(&tokens);
	} else {
		out.push_str(prefix);
	}

	Ok(())
}

//--> Unit Tests <--

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prefix_only_without_parameter() {
		let mut out = String::new();

		emit("add", "\t   ", false, "", &mut out).unwrap();
		assert_eq!(out, "\t   ");
	}

	#[test]
	fn parameter_text_is_ignored_without_parameter() {
		let mut out = String::new();

		emit("swap", " \n\t", false, "whatever", &mut out).unwrap();
		assert_eq!(out, " \n\t");
	}

	#[test]
	fn prefix_then_parameter() {
		let mut out = String::new();

		emit("push", "  ", true, "-3", &mut out).unwrap();
		assert_eq!(out, "  \t\t\t\n");
	}

	#[test]
	fn bad_parameter_writes_nothing() {
		let mut out = String::from("  ");

		assert_eq!(
			emit("copyn", " \t ", true, "", &mut out),
			Err(EncodeError::MissingParameter(String::from("copyn")))
		);
		assert!(matches!(emit("copyn", " \t ", true, "x", &mut out), Err(EncodeError::MalformedParameter { .. })));
		assert_eq!(out, "  ");
	}
}

//--> Imports <--

use super::{
	table::InstructionTable,
	EncodeError,
};

use crate::text;

//--> Functions <--

/// `pushchar c` is `push <code of c>`. Only the first character counts.
pub fn push_char(table: &InstructionTable, param: &str, out: &mut String) -> Result<(), EncodeError> {
	match param.chars().next() {
		Some(c) => table.translate("push", &text::character_code(c).to_string(), out),
		None => Err(EncodeError::MissingParameter(String::from("pushchar"))),
	}
}

pub fn lint_push_char(param: &str) -> Option<String> {
	if param.chars().count() > 1 {
		Some(format!("Only the first character of `{}` is pushed.", param))
	} else { None }
}

/// `print s` is `pushchar`, `printchar` for every character of `s`, in order.
pub fn print(table: &InstructionTable, param: &str, out: &mut String) -> Result<(), EncodeError> {
	let mut buf = [0u8; 4];

	for c in param.chars() {
		table.translate("pushchar", c.encode_utf8(&mut buf), out)?;
		table.translate("printchar", "", out)?;
	}

	Ok(())
}

/// `println s` is `print s` followed by printing a line feed.
pub fn print_line(table: &InstructionTable, param: &str, out: &mut String) -> Result<(), EncodeError> {
	table.translate("print", param, out)?;
	table.translate("push", "0x0A", out)?;
	table.translate("printchar", "", out)
}

fn with_label(table: &InstructionTable, pseudo: &str, primitive: &str, label: &str, out: &mut String) -> Result<(), EncodeError> {
	let label = label.trim();

	if label.is_empty() { return Err(EncodeError::MissingParameter(String::from(pseudo))) }

	table.translate(primitive, &text::make_label_literal(label), out)
}

pub fn mark_label(table: &InstructionTable, param: &str, out: &mut String) -> Result<(), EncodeError> {
	with_label(table, "marks", "mark", param, out)
}

pub fn jump_label(table: &InstructionTable, param: &str, out: &mut String) -> Result<(), EncodeError> {
	with_label(table, "jumps", "jump", param, out)
}

pub fn call_label(table: &InstructionTable, param: &str, out: &mut String) -> Result<(), EncodeError> {
	with_label(table, "calls", "call", param, out)
}

pub fn branch_zero_label(table: &InstructionTable, param: &str, out: &mut String) -> Result<(), EncodeError> {
	with_label(table, "branchzs", "branchz", param, out)
}

pub fn branch_negative_label(table: &InstructionTable, param: &str, out: &mut String) -> Result<(), EncodeError> {
	with_label(table, "branchltzs", "branchltz", param, out)
}

//--> Unit Tests <--

#[cfg(test)]
mod tests {
	use super::*;

	fn translate(command: &str, param: &str) -> Result<String, EncodeError> {
		let table = InstructionTable::new();
		let mut out = String::new();

		table.translate(command, param, &mut out)?;

		Ok(out)
	}

	fn concat(parts: &[(&str, &str)]) -> String {
		parts.iter().map(|(command, param)| translate(command, param).unwrap()).collect()
	}

	#[test]
	fn push_char_pushes_character_code() {
		assert_eq!(translate("pushchar", "A"), translate("push", "65"));
		assert_eq!(translate("pushchar", " "), translate("push", "32"));
	}

	#[test]
	fn push_char_uses_only_first_character() {
		assert_eq!(translate("pushchar", "xyz"), translate("pushchar", "x"));
	}

	#[test]
	fn push_char_lint_flags_extra_characters() {
		assert_eq!(lint_push_char("xyz"), Some(String::from("Only the first character of `xyz` is pushed.")));
		assert_eq!(lint_push_char("x"), None);
		assert_eq!(lint_push_char(""), None);
	}

	#[test]
	fn push_char_needs_a_character() {
		assert_eq!(translate("pushchar", ""), Err(EncodeError::MissingParameter(String::from("pushchar"))));
	}

	#[test]
	fn print_pushes_and_prints_each_character() {
		let expected = concat(&[
			("pushchar", "h"), ("printchar", ""),
			("pushchar", "i"), ("printchar", ""),
			("pushchar", " "), ("printchar", ""),
			("pushchar", "!"), ("printchar", ""),
		]);

		assert_eq!(translate("print", "hi !"), Ok(expected));
	}

	#[test]
	fn print_handles_non_ascii() {
		assert_eq!(
			translate("print", "é"),
			Ok(concat(&[("push", "233"), ("printchar", "")]))
		);
	}

	#[test]
	fn print_of_nothing_is_empty() {
		assert_eq!(translate("print", ""), Ok(String::new()));
	}

	#[test]
	fn println_expands_in_order() {
		let expected = concat(&[
			("pushchar", "x"),
			("printchar", ""),
			("push", "10"),
			("printchar", ""),
		]);

		assert_eq!(translate("println", "x"), Ok(expected));
	}

	#[test]
	fn println_of_nothing_prints_newline() {
		assert_eq!(translate("println", ""), Ok(concat(&[("push", "10"), ("printchar", "")])));
	}

	#[test]
	fn label_pseudos_use_label_literal() {
		let literal = text::make_label_literal("loop");

		for (pseudo, primitive) in [("marks", "mark"), ("jumps", "jump"), ("calls", "call"), ("branchzs", "branchz"), ("branchltzs", "branchltz")] {
			assert_eq!(translate(pseudo, "loop"), translate(primitive, &literal));
		}
	}

	#[test]
	fn mark_and_jump_agree_on_label() {
		let mark = translate("marks", "done").unwrap();
		let jump = translate("jumps", "done").unwrap();

		// Same label bits after the three-token prefix.
		assert_eq!(mark[3..], jump[3..]);
		assert_ne!(translate("marks", "done"), translate("marks", "enod"));
	}

	#[test]
	fn label_pseudos_need_a_label() {
		assert_eq!(translate("jumps", "  "), Err(EncodeError::MissingParameter(String::from("jumps"))));
	}
}

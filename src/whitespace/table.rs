//--> Imports <--

use std::collections::HashMap;

use super::{
	emitter,
	expand,
	EncodeError,
};

//--> Type Aliases <--

/// Rewrites a pseudo-instruction's parameter into other instructions, writing their tokens to the output.
pub type Expander = fn(&InstructionTable, &str, &mut String) -> Result<(), EncodeError>;

/// Looks at a pseudo-instruction's parameter and describes anything suspicious about it.
pub type Linter = fn(&str) -> Option<String>;

//--> Structs <--

/// Every mnemonic the assembler knows. Built once and only read afterward.
pub struct InstructionTable {
	instructions: HashMap<&'static str, Instruction>,
}

//--> Enums <--

#[derive(Clone, Copy)]
pub enum Instruction {
	Primitive {
		prefix: &'static str,
		takes_parameter: bool,
	},
	Pseudo {
		expand: Expander,
		lint: Option<Linter>,
	},
}

//--> Constants <--

const PRIMITIVES: &[(&str, &str, bool)] = &[
	// Stack manipulation
	("push", "  ", true),
	("duplicate", " \n ", false),
	("copyn", " \t ", true),
	("swap", " \n\t", false),
	("discard", " \n\n", false),
	("sliden", " \t\n", true),

	// Arithmetic
	("add", "\t   ", false),
	("sub", "\t  \t", false),
	("mult", "\t  \n", false),
	("div", "\t \t ", false),
	("mod", "\t \t\t", false),

	// Heap access
	("store", "\t\t ", false),
	("retrieve", "\t\t\t", false),

	// Flow control
	("mark", "\n  ", true),
	("call", "\n \t", true),
	("jump", "\n \n", true),
	("branchz", "\n\t ", true),
	("branchltz", "\n\t\t", true),
	("return", "\n\t\n", false),
	("end", "\n\n\n", false),

	// I/O
	("printchar", "\t\n  ", false),
	("printnum", "\t\n \t", false),
	("readchar", "\t\n\t ", false),
	("readnum", "\t\n\t\t", false),
];

const PSEUDOS: &[(&str, Expander, Option<Linter>)] = &[
	("pushchar", expand::push_char, Some(expand::lint_push_char)),
	("print", expand::print, None),
	("println", expand::print_line, None),
	("marks", expand::mark_label, None),
	("jumps", expand::jump_label, None),
	("calls", expand::call_label, None),
	("branchzs", expand::branch_zero_label, None),
	("branchltzs", expand::branch_negative_label, None),
];

//--> Functions <--

impl InstructionTable {
	pub fn new() -> InstructionTable {
		let mut instructions = HashMap::with_capacity(PRIMITIVES.len() + PSEUDOS.len());

		for &(mnemonic, prefix, takes_parameter) in PRIMITIVES {
			instructions.insert(mnemonic, Instruction::Primitive { prefix, takes_parameter });
		}

		for &(mnemonic, expand, lint) in PSEUDOS {
			instructions.insert(mnemonic, Instruction::Pseudo { expand, lint });
		}

		InstructionTable { instructions }
	}

	pub fn get(&self, mnemonic: &str) -> Option<Instruction> { self.instructions.get(mnemonic).copied() }

	pub fn mnemonics(&self) -> impl Iterator<Item = &'static str> + '_ { self.instructions.keys().copied() }

	/// Warns about a command that translates fine but probably doesn't do what was meant.
	pub fn lint(&self, command: &str, param: &str) -> Option<String> {
		match self.get(command) {
			Some(Instruction::Pseudo { lint: Some(lint), .. }) => lint(param),
			_ => None,
		}
	}

	/// Translates one command into tokens, appending them to `out`.
	///
	/// Nothing is appended unless the whole command, expansion included, translates successfully.
	pub fn translate(&self, command: &str, param: &str, out: &mut String) -> Result<(), EncodeError> {
		match self.get(command) {
			Some(Instruction::Primitive { prefix, takes_parameter }) => emitter::emit(command, prefix, takes_parameter, param, out),
			Some(Instruction::Pseudo { expand, .. }) => {
				let mut expansion = String::new();

				expand(self, param, &mut expansion)?;
				out.push_str(&expansion);

				Ok(())
			},
			None => Err(EncodeError::UnknownMnemonic(String::from(command))),
		}
	}
}

impl Default for InstructionTable {
	fn default() -> Self { InstructionTable::new() }
}

//--> Unit Tests <--

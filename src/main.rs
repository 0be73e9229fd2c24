//--> Imports <--

// Handles assembly of mnemonic source into programs made of spaces, tabs and line feeds.
mod whitespace;

// Handles strings and characters going into assembly.
mod text;

use std::{
	fmt,
	ops::Range,
	path::PathBuf,
	process,
};

use clap::Arg;

//--> Type Aliases <--

type ErrorList = Vec<Error>;

type AssembleResult = Result<ErrorList, ErrorList>;

//--> Structs <--

struct Error {
	is_warning: bool,
	file: PathBuf,
	line: Option<usize>,
	span: Option<Range<usize>>,
	message: String,
}

//--> Functions <--

fn main() {
	let args = {
		clap::command!()
		.long_about(
			"The Whitespace Assembler (wsasm) turns readable mnemonics into Whitespace programs, \
			which are made of nothing but spaces, tabs and line feeds.\n\n\
			Each line holds one instruction and an optional parameter; '//' starts a comment. \
			Besides the primitive instructions, wsasm understands a few conveniences:\n\t\
			- pushchar, print and println, for characters and strings.\n\t\
			- marks, jumps, calls, branchzs and branchltzs, for named labels.\n\n\
			Lines that fail to assemble are reported and skipped; the rest of the program is still written."
		)
		.trailing_var_arg(true)
		.args([
			{
				Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Tells the assembler to output additional information while assembling, rather than just outputting errors.")
			},
			{
				Arg::new("output")
				.short('o')
				.long("out")
				.value_name("OUTPATH")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Specifies a path for the output program. By default, the program is written to standard output.")
			},
			{
				Arg::new("listing")
				.short('l')
				.long("list")
				.value_name("LISTPATH")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Specifies a path to generate a listing file at. By default, no listing file is generated.")
			},
			{
				Arg::new("infiles")
				.value_name("INPATHS")
				.value_parser(clap::value_parser!(PathBuf))
				.multiple_values(true)
				.help("Paths to source files, assembled in order. All must exist. By default, standard input is read.")
			}
		])
		.get_matches()
	};

	let verbose = args.contains_id("verbose");

	let listing_path = args.get_one::<PathBuf>("listing").cloned();

	let output_path = args.get_one::<PathBuf>("output").cloned();

	let input_paths = match args.get_many::<PathBuf>("infiles") {
		Some(paths) => paths.cloned().collect::<Vec<PathBuf>>(),
		None => Vec::new(),
	};

	if !input_paths.iter().all(|p| p.is_file()) {
		eprintln!("ERR: All paths given as inputs must point to existing files.");
		process::exit(1);
	}

	match whitespace::assemble(verbose, listing_path.clone(), output_path.clone(), input_paths) {
		Ok(warns) => {
			let warn_count = warns.len();

			for warn in warns {
				eprintln!("{}", warn);
			}

			if verbose {
				eprintln!("INFO: Successfully assembled, with {} warnings.", warn_count);

				if let Some(path) = output_path {
					eprintln!("INFO: The program was output at '{}'.", path.display());
				}

				if let Some(path) = listing_path {
					eprintln!("INFO: The listing file was output at '{}'.", path.display());
				}
			}
		},
		Err(errs) => {
			let err_count = errs.iter().filter(|e| !e.is_warning).count();
			let warn_count = errs.iter().filter(|e| e.is_warning).count();

			for err in errs {
				eprintln!("{}", err);
			}

			eprintln!("ERR: Failed to assemble, with {} errors and {} warnings.", err_count, warn_count);
			process::exit(2);
		}
	}
}

impl Error {
	pub fn new(is_warning: bool, file: PathBuf, line: Option<usize>, span: Option<Range<usize>>, message: String) -> Error {
		Error { is_warning, file, line, span, message }
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let start = if self.is_warning { "WARN" } else { "ERR" };

		match self.line {
			Some(l) => match &self.span {
				Some(s) => write!(f, "{}: {}: {}: {}..{}: {}", start, self.file.display(), l, s.start, s.end, self.message),
				None => write!(f, "{}: {}: {}: {}", start, self.file.display(), l, self.message)
			},
			None => write!(f, "{}: {}: {}", start, self.file.display(), self.message)
		}
	}
}

//--> Unit Tests <--

//--> Imports <--

mod emitter;
mod expand;
mod lexer;
mod param;
mod table;

use std::{
	fmt,
	fs::{self, File},
	io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write},
	path::{Path, PathBuf},
};

use super::{
	AssembleResult as Result,
	Error,
	ErrorList,
};

use crate::text;

pub use table::InstructionTable;

//--> Constants <--

const STDIN_NAME: &str = "<stdin>";

//--> Enums <--

/// Ways a single command can fail to translate. None of them are fatal to the rest of the input.
#[derive(Clone, Debug, PartialEq)]
pub enum EncodeError {
	UnknownMnemonic(String),
	MissingParameter(String),
	MalformedParameter {
		mnemonic: String,
		reason: String,
	},
}

//--> Functions <--

/// Assembles every input (or standard input, if there are none) into one program.
///
/// Lines that fail to translate are reported and skipped; everything else is still written out, in order.
pub(crate) fn assemble(verbose: bool, listing_path: Option<PathBuf>, output_path: Option<PathBuf>, input_paths: Vec<PathBuf>) -> Result {
	let table = InstructionTable::new();
	let mut errs: ErrorList = Vec::new();
	let mut listing = String::new();

	if verbose { eprintln!("INFO: Loaded {} instructions.", table.mnemonics().count()); }

	let output_name = output_path.clone().unwrap_or_else(|| PathBuf::from("<stdout>"));

	let mut output: Box<dyn Write> = match &output_path {
		Some(path) => match File::create(path) {
			Ok(file) => Box::new(BufWriter::new(file)),
			Err(err) => {
				errs.push(Error::new(false, path.clone(), None, None, format!("Couldn't create the output file: {}", err)));
				return Err(errs);
			},
		},
		None => Box::new(io::stdout()),
	};

	let write_result = if input_paths.is_empty() {
		if verbose { eprintln!("INFO: No input files given, reading standard input..."); }

		let stdin = io::stdin();
		let reader = stdin.lock();

		assemble_source(verbose, &table, Path::new(STDIN_NAME), reader, &mut output, &mut listing, &mut errs)
	} else {
		input_paths.iter().try_for_each(|path| match File::open(path) {
			Ok(file) => assemble_source(verbose, &table, path, BufReader::new(file), &mut output, &mut listing, &mut errs),
			Err(err) => {
				errs.push(Error::new(false, path.clone(), None, None, match err.kind() {
					ErrorKind::NotFound => String::from("Couldn't find the file."),
					ErrorKind::PermissionDenied => String::from("Wasn't allowed to open the file. (insufficient permissions)"),
					_ => format!("Encountered unexpected I/O error while trying to open the file: {}", err.kind()),
				}));
				Ok(())
			},
		})
	};

	if let Err(err) = write_result.and_then(|_| output.flush()) {
		errs.push(Error::new(false, output_name, None, None, format!("Couldn't write the program: {}", err)));
	}

	if let Some(path) = listing_path {
		if verbose { eprintln!("INFO: Writing listing to '{}'...", path.display()); }

		if let Err(err) = fs::write(&path, listing) {
			errs.push(Error::new(false, path, None, None, format!("Couldn't write the listing: {}", err)));
		}
	}

	if errs.iter().all(|e| e.is_warning) { Ok(errs) } else { Err(errs) }
}

/// Translates one source line by line, writing each line's tokens as soon as the line succeeds.
///
/// Only failures writing `output` are returned; everything wrong with the source itself lands in `errs`.
fn assemble_source<R: BufRead>(verbose: bool, table: &InstructionTable, path: &Path, reader: R, output: &mut dyn Write, listing: &mut String, errs: &mut ErrorList) -> io::Result<()> {
	if verbose { eprintln!("INFO: {}: Assembling file...", path.display()); }

	for (line_idx, line) in reader.lines().enumerate() {
		let line_num = line_idx + 1;

		let line_text = match line {
			Ok(l) => l,
			Err(err) => {
				errs.push(Error::new(false, path.to_path_buf(), Some(line_num), None, match err.kind() {
					ErrorKind::InvalidData => String::from("Line contained invalid data. (likely not UTF-8 text)"),
					_ => format!("Encountered unexpected I/O error while trying to read the line: {}", err.kind()),
				}));
				continue;
			},
		};

		let line = match lexer::scan(&line_text) {
			Ok(Some(line)) => line,
			Ok(None) => continue,
			Err(err) => {
				errs.push(Error::new(false, path.to_path_buf(), Some(line_num), Some(err.span.clone()), err.to_string()));
				continue;
			},
		};

		let mut tokens = String::new();

		match table.translate(&line.command, &line.param, &mut tokens) {
			Ok(()) => {
				if verbose { eprintln!("INFO: {}: {}: {} -> {}", path.display(), line_num, line.command, text::make_visible(&tokens)); }

				if let Some(warning) = table.lint(&line.command, &line.param) {
					errs.push(Error::new(true, path.to_path_buf(), Some(line_num), Some(line.span.clone()), warning));
				}

				output.write_all(tokens.as_bytes())?;
				listing.push_str(&format!("{:>5}  {:<40}  {}\n", line_num, line_text.trim(), text::make_visible(&tokens)));
			},
			Err(err) => errs.push(Error::new(false, path.to_path_buf(), Some(line_num), Some(line.span.clone()), err.to_string())),
		}
	}

	Ok(())
}

impl fmt::Display for EncodeError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			EncodeError::UnknownMnemonic(mnemonic) => write!(f, "Unknown instruction `{}`.", mnemonic),
			EncodeError::MissingParameter(mnemonic) => write!(f, "`{}` needs a parameter.", mnemonic),
			EncodeError::MalformedParameter { mnemonic, reason } => write!(f, "Bad parameter for `{}`: {}.", mnemonic, reason),
		}
	}
}

//--> Unit Tests <--

//--> Functions <--

pub fn character_code(c: char) -> u32 { c as u32 }

/// Turns a label into a `0b` literal by gluing together the natural binary form of every character code.
///
/// There's no padding and no separator between characters, so two different labels *can* come out the same
/// (e.g. "\u{1}\u{2}" and "\u{6}"). That's accepted: labels are never resolved, only re-encoded, so all that
/// matters is that the same text always gives the same literal.
pub fn make_label_literal(label: &str) -> String {
	let mut literal = String::from("0b");

	for c in label.chars() {
		literal.push_str(&format!("{:b}", character_code(c)));
	}

	literal
}

/// Renders emitted tokens so they can be read in a listing.
pub fn make_visible(tokens: &str) -> String {
	tokens.chars().map(|c| match c {
		' ' => 'S',
		'\t' => 'T',
		'\n' => 'L',
		other => other,
	}).collect()
}

//--> Unit Tests <--

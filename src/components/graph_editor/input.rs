/// What a key press asks the editor to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	RunShortestPaths,
	ListWeights,
	ConfirmWeight,
	ClearWeight,
	DeleteLastVertex,
	Type(char),
	Ignore,
}

impl Command {
	/// Maps a `KeyboardEvent.key` value. While a weight is being typed, letters
	/// are input rather than shortcuts.
	pub fn from_key(key: &str, awaiting_weight: bool) -> Self {
		match key {
			"Enter" if awaiting_weight => Self::ConfirmWeight,
			"Backspace" => Self::ClearWeight,
			"Delete" => Self::DeleteLastVertex,
			_ => {
				let mut chars = key.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) if awaiting_weight => Self::Type(c),
					(Some('d' | 'D'), None) => Self::RunShortestPaths,
					(Some('e' | 'E'), None) => Self::ListWeights,
					_ => Self::Ignore,
				}
			}
		}
	}
}

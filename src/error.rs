/// Raised when a strict query does not produce exactly what it promised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StrictQueryFailure {
	#[error("No matches found for strict_select({selector})")]
	NoMatches { selector: String },
	#[error("Wrong number of matches found for strict_select({selector}), found {count}")]
	WrongMatchCount { selector: String, count: usize },
	#[error("No matches found for strict_get({key})")]
	MissingAttribute { key: String },
	#[error("Invalid selector for strict_select({selector}): {reason}")]
	InvalidSelector { selector: String, reason: String },
}

impl StrictQueryFailure {
	/// The selector or attribute key the failed query was run with.
	pub fn query(&self) -> &str {
		match self {
			Self::NoMatches { selector }
			| Self::WrongMatchCount { selector, .. }
			| Self::InvalidSelector { selector, .. } => selector,
			Self::MissingAttribute { key } => key,
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct UnknownParserBackend(pub String);
impl std::fmt::Display for UnknownParserBackend {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Unknown parser backend {:?}", self.0)
	}
}

/// Result of looking an attribute up on a node.
///
/// Attributes that HTML defines as whitespace-separated token lists (`class`, `rel`, ...)
/// always come back as [`AttributeValue::Multi`], even when only one token is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue<'a> {
	Absent,
	Single(&'a str),
	Multi(Vec<&'a str>),
}

impl<'a> AttributeValue<'a> {
	pub fn lookup(element: &'a scraper::node::Element, key: &str) -> Self {
		let value = match element.attr(key) {
			Some(value) => value,
			None => return Self::Absent,
		};
		if is_token_list(element.name(), key) {
			Self::Multi(value.split_ascii_whitespace().collect())
		} else {
			Self::Single(value)
		}
	}

	/// The value when it is a single string, `None` for absent and multi-valued attributes.
	pub fn as_str(&self) -> Option<&'a str> {
		match self {
			Self::Single(value) => Some(value),
			_ => None,
		}
	}

	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}
}

// (element, attribute); "*" applies to every element.
static TOKEN_LIST_ATTRIBUTES: [(&'static str, &'static str); 15] = [
	("*", "class"),
	("*", "accesskey"),
	("*", "dropzone"),
	("a", "rel"),
	("a", "rev"),
	("link", "rel"),
	("link", "rev"),
	("area", "rel"),
	("td", "headers"),
	("th", "headers"),
	("form", "accept-charset"),
	("object", "archive"),
	("icon", "sizes"),
	("iframe", "sandbox"),
	("output", "for"),
];

fn is_token_list(element: &str, attribute: &str) -> bool {
	TOKEN_LIST_ATTRIBUTES
		.iter()
		.any(|(tag, name)| (*tag == "*" || *tag == element) && *name == attribute)
}

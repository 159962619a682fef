use crate::{
	attribute::AttributeValue, extend::Queryable, strict::StrictQuery, StrictQueryFailure,
};
use scraper::{ElementRef, Selector};

/// An element of a parsed document with the strict queries available without importing
/// [`StrictQuery`]. Everything else `ElementRef` offers is reachable through `Deref`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a>(ElementRef<'a>);
impl<'a> From<ElementRef<'a>> for Tag<'a> {
	fn from(element: ElementRef<'a>) -> Self {
		Self(element)
	}
}
impl<'a> std::ops::Deref for Tag<'a> {
	type Target = ElementRef<'a>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl std::fmt::Display for Tag<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0.html())
	}
}

impl<'a> Tag<'a> {
	pub fn element(self) -> ElementRef<'a> {
		self.0
	}

	pub fn attribute(self, key: &str) -> AttributeValue<'a> {
		self.query_attr(key)
	}

	pub fn strict_select(self, selector: &str) -> Result<Vec<Tag<'a>>, StrictQueryFailure> {
		StrictQuery::strict_select(self, selector)
	}

	pub fn strict_select_one(self, selector: &str) -> Result<Tag<'a>, StrictQueryFailure> {
		StrictQuery::strict_select_one(self, selector)
	}

	pub fn strict_get(self, key: &str) -> Result<String, StrictQueryFailure> {
		StrictQuery::strict_get(self, key)
	}
}

impl<'a> Queryable<'a> for Tag<'a> {
	fn query_all(self, selector: &Selector) -> Vec<ElementRef<'a>> {
		self.0.query_all(selector)
	}

	fn query_attr(self, key: &str) -> AttributeValue<'a> {
		self.0.query_attr(key)
	}
}

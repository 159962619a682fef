use crate::{
	attribute::AttributeValue, extend::Queryable, strict::StrictQuery, tag::Tag,
	StrictQueryFailure, UnknownParserBackend,
};
use scraper::{ElementRef, Html, Selector};
use std::str::FromStr;

/// How markup is turned into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserBackend {
	/// A full HTML document; `html`, `head` and `body` are implied when missing.
	#[default]
	Document,
	/// A fragment, parsed as if it were the contents of a `body`.
	Fragment,
}
impl FromStr for ParserBackend {
	type Err = UnknownParserBackend;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name.to_ascii_lowercase().as_str() {
			"document" | "html" => Ok(Self::Document),
			"fragment" => Ok(Self::Fragment),
			_ => Err(UnknownParserBackend(name.to_owned())),
		}
	}
}
impl ParserBackend {
	fn parse(self, markup: &str) -> Html {
		match self {
			Self::Document => Html::parse_document(markup),
			Self::Fragment => Html::parse_fragment(markup),
		}
	}
}

/// A parsed document whose strict queries need no trait import.
///
/// Derefs to [`scraper::Html`] for everything else.
#[derive(Debug, Clone)]
pub struct Document(Html);
impl Document {
	pub fn parse(markup: &str, backend: Option<ParserBackend>) -> Self {
		let backend = backend.unwrap_or_default();
		log::trace!("parsing {} bytes of markup as {backend:?}", markup.len());
		let html = backend.parse(markup);
		if !html.errors.is_empty() {
			log::trace!("markup recovered from {} parse errors", html.errors.len());
		}
		Self(html)
	}

	/// The `html` element, absent on an empty tree.
	pub fn root(&self) -> Option<Tag<'_>> {
		self.0.tree.root().children().find_map(ElementRef::wrap).map(Tag::from)
	}

	pub fn into_html(self) -> Html {
		self.0
	}

	pub fn strict_select(&self, selector: &str) -> Result<Vec<Tag<'_>>, StrictQueryFailure> {
		StrictQuery::strict_select(self, selector)
	}

	pub fn strict_select_one(&self, selector: &str) -> Result<Tag<'_>, StrictQueryFailure> {
		StrictQuery::strict_select_one(self, selector)
	}

	pub fn strict_get(&self, key: &str) -> Result<String, StrictQueryFailure> {
		StrictQuery::strict_get(self, key)
	}
}
impl From<Html> for Document {
	fn from(html: Html) -> Self {
		Self(html)
	}
}
impl FromStr for Document {
	type Err = std::convert::Infallible;

	fn from_str(markup: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(markup, None))
	}
}
impl std::ops::Deref for Document {
	type Target = Html;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<'a> Queryable<'a> for &'a Document {
	fn query_all(self, selector: &Selector) -> Vec<ElementRef<'a>> {
		self.0.query_all(selector)
	}

	fn query_attr(self, key: &str) -> AttributeValue<'a> {
		self.0.query_attr(key)
	}
}

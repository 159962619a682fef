use crate::{extend::Queryable, tag::Tag, StrictQueryFailure};
use scraper::Selector;

/// Queries that fail loudly instead of returning empty results.
///
/// Implemented for every [`Queryable`] type; there is nothing to implement by hand.
pub trait StrictQuery<'a>: Queryable<'a> {
	/// All matches for `selector`, in document order. Fails when nothing matches.
	fn strict_select(self, selector: &str) -> Result<Vec<Tag<'a>>, StrictQueryFailure> {
		let matches = self.query_all(&compile(selector)?);
		if matches.is_empty() {
			return fail(StrictQueryFailure::NoMatches {
				selector: selector.to_owned(),
			});
		}
		log::trace!("strict_select({selector}) matched {}", matches.len());
		Ok(matches.into_iter().map(Tag::from).collect())
	}

	/// The only match for `selector`. Fails on zero matches as well as on several.
	fn strict_select_one(self, selector: &str) -> Result<Tag<'a>, StrictQueryFailure> {
		let matches = self.query_all(&compile(selector)?);
		match matches.as_slice() {
			[element] => Ok(Tag::from(*element)),
			_ => fail(StrictQueryFailure::WrongMatchCount {
				selector: selector.to_owned(),
				count: matches.len(),
			}),
		}
	}

	/// The attribute's value, provided it is present and holds a single string.
	fn strict_get(self, key: &str) -> Result<String, StrictQueryFailure> {
		match self.query_attr(key).as_str() {
			Some(value) => Ok(value.to_owned()),
			None => fail(StrictQueryFailure::MissingAttribute {
				key: key.to_owned(),
			}),
		}
	}
}

fn compile(selector: &str) -> Result<Selector, StrictQueryFailure> {
	Selector::parse(selector).or_else(|err| {
		fail(StrictQueryFailure::InvalidSelector {
			selector: selector.to_owned(),
			reason: format!("{:?}", err.kind),
		})
	})
}

fn fail<T>(err: StrictQueryFailure) -> Result<T, StrictQueryFailure> {
	log::debug!("{err}");
	Err(err)
}

#[cfg(test)]
mod tests {
	use super::*;
	use scraper::{ElementRef, Html};

	const MARKUP: &str = r#"<h1 value="123">Test</h1><h2>Test</h2><h2>Test</h2>"#;

	// The root element followed by scraper's own subtree query.
	fn plain<'a>(html: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
		let selector = Selector::parse(selector).unwrap();
		let root = html.root_element();
		std::iter::once(root)
			.filter(|root| selector.matches(root))
			.chain(root.select(&selector))
			.collect()
	}

	fn names(tags: Vec<Tag>) -> Vec<&str> {
		tags.into_iter().map(|tag| tag.element().value().name()).collect()
	}

	#[test]
	fn select_matches_plain_query() -> anyhow::Result<()> {
		let html = Html::parse_document(
			r#"<ul><li>a</li><li>b<ul><li>c</li></ul></li></ul><p>d</p>"#,
		);
		for selector in ["li", "ul", "ul > li", "p", "html", "*"] {
			let strict = html
				.strict_select(selector)?
				.into_iter()
				.map(Tag::element)
				.collect::<Vec<_>>();
			assert_eq!(strict, plain(&html, selector), "selector {selector}");
		}
		Ok(())
	}

	#[test]
	fn select_follows_tree_order_after_foster_parenting() -> anyhow::Result<()> {
		// The `p` is moved in front of the table but created after the `td`.
		let html = Html::parse_document(r#"<table><tr><td>a</td></tr><p>x</p></table>"#);
		assert_eq!(names(html.strict_select("p, td")?), vec!["p", "td"]);
		let strict = html
			.strict_select("p, td")?
			.into_iter()
			.map(Tag::element)
			.collect::<Vec<_>>();
		assert_eq!(strict, plain(&html, "p, td"));
		Ok(())
	}

	#[test]
	fn select_single_match_is_one_element() -> anyhow::Result<()> {
		let html = Html::parse_document(MARKUP);
		let h1 = html.strict_select("h1")?;
		assert_eq!(h1.len(), 1);
		assert_eq!(h1[0], html.strict_select_one("h1")?);
		Ok(())
	}

	#[test]
	fn select_without_matches_fails() {
		let html = Html::parse_document(MARKUP);
		assert_eq!(
			html.strict_select("h3"),
			Err(StrictQueryFailure::NoMatches {
				selector: "h3".to_owned()
			})
		);
	}

	#[test]
	fn select_one_reports_the_count() {
		let html = Html::parse_document(MARKUP);
		assert_eq!(
			html.strict_select_one("h3"),
			Err(StrictQueryFailure::WrongMatchCount {
				selector: "h3".to_owned(),
				count: 0,
			})
		);
		assert_eq!(
			html.strict_select_one("h2"),
			Err(StrictQueryFailure::WrongMatchCount {
				selector: "h2".to_owned(),
				count: 2,
			})
		);
		let err = html.strict_select_one("h1, h2").unwrap_err();
		assert_eq!(
			err.to_string(),
			"Wrong number of matches found for strict_select(h1, h2), found 3"
		);
	}

	#[test]
	fn invalid_selector_fails_every_select() {
		let html = Html::parse_document(MARKUP);
		for result in [
			html.strict_select("[").map(|_| ()),
			html.strict_select_one("[").map(|_| ()),
		] {
			match result {
				Err(StrictQueryFailure::InvalidSelector { selector, .. }) => {
					assert_eq!(selector, "[")
				}
				other => panic!("expected invalid selector, got {other:?}"),
			}
		}
	}

	#[test]
	fn invalid_selector_reason_is_the_error_kind() {
		let html = Html::parse_document(MARKUP);
		match html.strict_select("p:nope") {
			Err(StrictQueryFailure::InvalidSelector { reason, .. }) => {
				assert!(reason.contains("nope"), "{reason}");
				assert!(!reason.contains("location"), "{reason}");
			}
			other => panic!("expected invalid selector, got {other:?}"),
		}
	}

	#[test]
	fn get_returns_single_values_only() -> anyhow::Result<()> {
		let html = Html::parse_document(
			r#"<a href="/next" class="button" rel="next" data-empty="">next</a>"#,
		);
		let link = html.strict_select_one("a")?;
		assert_eq!(link.strict_get("href")?, "/next");
		assert_eq!(link.strict_get("data-empty")?, "");
		for key in ["class", "rel", "title"] {
			assert_eq!(
				link.strict_get(key),
				Err(StrictQueryFailure::MissingAttribute {
					key: key.to_owned()
				})
			);
		}
		Ok(())
	}

	#[test]
	fn nested_queries_stay_within_the_subtree() -> anyhow::Result<()> {
		let html = Html::parse_document(
			r#"<section id="a"><p>1</p><p>2</p></section><section id="b"><p>3</p></section>"#,
		);
		let b = html.strict_select_one("#b")?;
		assert_eq!(b.strict_select_one("p")?.inner_html(), "3");
		assert!(b.strict_select("section").is_err());
		Ok(())
	}
}

//! Attaches the strict operations to every type that can answer plain queries.
//!
//! A type opts in by implementing [`Queryable`], the non-strict interface the wrapped library
//! already offers. The blanket impl below then grants it [`StrictQuery`] without further work,
//! so elements handed out anywhere inside `scraper` carry the strict operations as soon as the
//! trait is in scope. A type's own inherent methods always take precedence over the granted ones.

use crate::{attribute::AttributeValue, strict::StrictQuery};
use scraper::{ElementRef, Html, Selector};

/// The underlying, non-strict queries a node supports.
pub trait Queryable<'a>: Copy {
	/// Every element in the receiver's subtree (the receiver excluded) matching `selector`,
	/// in document order.
	fn query_all(self, selector: &Selector) -> Vec<ElementRef<'a>>;

	fn query_attr(self, key: &str) -> AttributeValue<'a>;
}

impl<'a, T: Queryable<'a>> StrictQuery<'a> for T {}

impl<'a> Queryable<'a> for ElementRef<'a> {
	fn query_all(self, selector: &Selector) -> Vec<ElementRef<'a>> {
		self.select(selector).collect()
	}

	fn query_attr(self, key: &str) -> AttributeValue<'a> {
		AttributeValue::lookup(self.value(), key)
	}
}

impl<'a> Queryable<'a> for &'a Html {
	fn query_all(self, selector: &Selector) -> Vec<ElementRef<'a>> {
		// Walk from the document node so the root element itself can match.
		self.tree
			.root()
			.descendants()
			.filter_map(ElementRef::wrap)
			.filter(|element| selector.matches(element))
			.collect()
	}

	// Documents carry no attributes of their own.
	fn query_attr(self, _key: &str) -> AttributeValue<'a> {
		AttributeValue::Absent
	}
}

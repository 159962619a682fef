//! Strict variants of `scraper`'s selection and attribute lookup.
//!
//! Where `scraper` hands back an empty iterator or `None`, the strict queries return a
//! [`StrictQueryFailure`] naming the selector or key that came up short.
//!
//! ```
//! use strict_scraper::Document;
//!
//! let doc = Document::parse(r#"<h1 value="123">Test</h1><h2>Test</h2><h2>Test</h2>"#, None);
//! assert_eq!(doc.strict_select("h2").unwrap().len(), 2);
//! assert!(doc.strict_select_one("h2").is_err());
//! assert_eq!(doc.strict_select_one("h1").unwrap().strict_get("value").unwrap(), "123");
//! ```
//!
//! Plain `scraper` values get the same queries by importing [`StrictQuery`].

mod attribute;
pub use attribute::AttributeValue;

mod document;
pub use document::{Document, ParserBackend};

mod error;
pub use error::{StrictQueryFailure, UnknownParserBackend};

mod extend;
pub use extend::Queryable;

mod strict;
pub use strict::StrictQuery;

mod tag;
pub use tag::Tag;

pub use scraper;

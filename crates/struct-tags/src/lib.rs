//! Parsing utilities for `key:"value"` field annotations.
//!
//! An annotation string such as `json:"id,omitempty" gorm:"embedded"` is
//! split into one [`Tag`] per `key:"value"` segment. Each tag's value is then
//! decomposed into a leading name and an ordered list of [`TagOption`]s:
//!
//! ```
//! let Ok(tags) = struct_tags::parse(r#"json:"id,omitempty" xml:"id""#);
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[0].name(), "id");
//! assert!(tags[0].has_option("omitempty"));
//! assert_eq!(tags[1].key(), "xml");
//! ```
//!
//! The grammar is total: every input yields a (possibly empty) list of tags.
//! [`lookup`] bridges from a field-metadata provider implementing
//! [`TagSource`] to a single parsed tag.

mod delimiter;
mod errors;
mod lookup;
mod option;
mod parser;
mod segment;
mod struct_tag;
mod tag;
mod value;

pub use errors::StructTagError;
pub use lookup::{TagSource, lookup};
pub use option::TagOption;
pub use parser::parse;
pub use struct_tag::StructTag;
pub use tag::Tag;

//! Prefix search over the guide collection.
//!
//! This module provides the search core: tokenization of guides into
//! normalized word tokens, construction of an expansion prefix index over
//! the whole collection, and multi-word query resolution via set
//! intersection.

pub(crate) mod index;
pub(crate) mod tokenize;

pub use index::{DEFAULT_MIN_TOKEN_LENGTH, FindOutcome, IndexedGuide, SearchIndex};

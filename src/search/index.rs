//! Expansion prefix index over the guide collection.

use ahash::AHashMap;

use super::tokenize;
use crate::model::{Category, Guide};

/// Minimum token length used when none is configured. Length 1 keeps short
/// game terms like "hp" and "t4" searchable.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 1;

/// A guide paired with the display name of its owning category.
///
/// The category name is denormalized here for display only; it already
/// contributed its text to the guide's tokens at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedGuide {
    pub guide: Guide,
    pub category_name: String,
}

/// Outcome of a [`SearchIndex::find`] call.
///
/// "No usable terms" and "terms resolved but nothing matched" are distinct
/// outcomes so callers can render a too-short notice separately from an
/// empty result list.
#[derive(Debug, Clone, PartialEq)]
pub enum FindOutcome<'a> {
    /// Every query term was shorter than the minimum token length (or the
    /// query was empty after normalization).
    TooShort,
    /// The intersection of per-term matches, in identifier order. May be
    /// empty.
    Matches(Vec<&'a IndexedGuide>),
}

impl<'a> FindOutcome<'a> {
    /// Collapses the outcome into a plain match list, treating a too-short
    /// query as no matches.
    pub fn into_matches(self) -> Vec<&'a IndexedGuide> {
        match self {
            Self::TooShort => vec![],
            Self::Matches(matches) => matches,
        }
    }
}

/// Maps every prefix of every indexed token to the guides containing a
/// token with that prefix.
///
/// This is an expansion index: all prefixes are materialized at build time,
/// so query-time lookup is a single hash probe per term instead of a scan
/// or trie walk. Built once per collection snapshot and read-only
/// afterwards, so shared read access needs no locking.
pub struct SearchIndex {
    /// Prefix → guide identifiers, each list deduplicated and ascending.
    prefixes: AHashMap<String, Vec<usize>>,
    /// Flattened guide list; a guide's position is its identifier.
    guides: Vec<IndexedGuide>,
    min_token_length: usize,
}

impl SearchIndex {
    /// Builds an index over `categories` with [`DEFAULT_MIN_TOKEN_LENGTH`].
    pub fn new(categories: &[Category]) -> Self {
        Self::with_min_token_length(categories, DEFAULT_MIN_TOKEN_LENGTH)
    }

    /// Builds an index over `categories`. Guides are assigned identifiers
    /// in encounter order across the whole collection. `min_token_length`
    /// is clamped to at least 1 and fixed for the index's lifetime.
    pub fn with_min_token_length(categories: &[Category], min_token_length: usize) -> Self {
        let start = std::time::Instant::now();
        let min_token_length = min_token_length.max(1);

        let mut prefixes: AHashMap<String, Vec<usize>> = AHashMap::new();
        let mut guides: Vec<IndexedGuide> = Vec::new();

        for category in categories {
            for guide in &category.guides {
                let id = guides.len();
                guides.push(IndexedGuide {
                    guide: guide.clone(),
                    category_name: category.display_name(),
                });

                for token in tokenize::tokenize(guide, category, min_token_length) {
                    for end in min_token_length..=token.len() {
                        // Tokens are ASCII after normalization, so byte
                        // slicing cannot split a character.
                        let prefix = &token[..end];
                        match prefixes.get_mut(prefix) {
                            Some(ids) => {
                                // Idempotent: one entry per guide per prefix.
                                if ids.last() != Some(&id) {
                                    ids.push(id);
                                }
                            }
                            None => {
                                prefixes.insert(prefix.to_string(), vec![id]);
                            }
                        }
                    }
                }
            }
        }

        tracing::info!(
            "Built search index: {} unique prefixes, {} guides in {:?}",
            prefixes.len(),
            guides.len(),
            start.elapsed()
        );

        Self {
            prefixes,
            guides,
            min_token_length,
        }
    }

    /// Resolves a free-text query to the guides matching every term.
    ///
    /// Terms are prefixes: "co" matches guides containing "copy" or
    /// "constant". Terms combine with AND semantics, and any term with no
    /// index entry short-circuits the whole query to an empty match list.
    pub fn find(&self, query: &str) -> FindOutcome<'_> {
        let normalized = tokenize::normalize(query);
        let terms: Vec<&str> = normalized
            .split(' ')
            .filter(|term| term.len() >= self.min_token_length)
            .collect();

        let Some((first, rest)) = terms.split_first() else {
            return FindOutcome::TooShort;
        };

        let Some(ids) = self.prefixes.get(*first) else {
            return FindOutcome::Matches(vec![]);
        };
        let mut ids = ids.clone();

        for term in rest {
            let Some(matches) = self.prefixes.get(*term) else {
                return FindOutcome::Matches(vec![]);
            };
            // Posting lists are ascending, so retain keeps identifier order.
            ids.retain(|id| matches.contains(id));
        }

        FindOutcome::Matches(ids.iter().map(|&id| &self.guides[id]).collect())
    }

    /// Number of guides in the flattened list.
    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    /// Number of unique prefix keys.
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }

    /// All indexed guides in identifier order.
    pub fn guides(&self) -> &[IndexedGuide] {
        &self.guides
    }
}

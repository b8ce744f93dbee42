//! Prefix search over the pokedex collections.
//!
//! # Design
//!
//! - One prefix trie per collection (pokemon, elements, abilities).
//! - Every trie node stores the items of all keys passing through it, so a
//!   lookup costs O(prefix length) regardless of collection size.
//! - Tries are never edited: a changed collection gets a brand-new trie,
//!   built aside and then swapped in.
//! - `sync` compares a content stamp (blake3 over the encoded records) with
//!   the one recorded at the last rebuild and skips unchanged collections.
//! - `query` filters only the active collection; an empty query returns
//!   everything.

mod binding;
mod config;
mod index;
mod normalize;
mod query;
mod results;
mod stamp;
mod trie;

pub use binding::Binding;
pub use config::SearchConfig;
pub use index::{IndexState, SearchIndex, Tracked};
pub use normalize::normalize;
pub use query::SearchQuery;
pub use results::QueryResults;
pub use stamp::{CollectionStamp, StampError};
pub use trie::{PrefixNode, PrefixTrie};

#[cfg(test)]
mod tests;

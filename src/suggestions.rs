//! Suggestion candidates
//!
//! Candidate lists (flat or grouped under a title), the substring filter that
//! narrows them for a query, and the readers that load them from JSON.

mod candidates;
mod filter;
mod reader;
pub mod sample;

pub use candidates::{CandidateSource, FilteredCandidates, Resolved, SuggestionGroup, SuggestionSource};
pub use filter::{filter_groups, filter_items};
pub use reader::CandidateReader;

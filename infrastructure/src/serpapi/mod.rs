//! SerpApi Google Shopping adapter.

pub mod search;

pub use search::SerpApiSearch;

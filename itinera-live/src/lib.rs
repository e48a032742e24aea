//! itinera-live: live attraction suggestions from an opensearch endpoint

pub mod opensearch;

pub use opensearch::{OpenSearchClient, SearchSettings, parse_opensearch_body, search_phrase};

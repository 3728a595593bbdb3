//! TF-IDF relevance ranking for small, in-memory document sets.
//!
//! Give it `{id, text}` documents and a free-text query; get back the ids of
//! related documents, most relevant first. Documents sharing no term with the
//! query are left out.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenizer.rs │────▶│   stats.rs   │────▶│  scoring/    │────▶│   rank.rs    │
//! │  (tokenize)  │     │ (doc. freq.) │     │ (tf * idf)   │     │ (filter,sort)│
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//!                                                                       ▲
//!                                           ┌──────────────┐            │
//!                                           │   corpus/    │────────────┘
//!                                           │ (load, check)│
//!                                           └──────────────┘
//! ```
//!
//! Every call to [`rank`] is self-contained: statistics are computed from the
//! documents passed in and discarded on return. There is no index to build
//! or keep in sync.
//!
//! # Usage
//!
//! ```
//! use docrank::{rank, Document};
//!
//! let docs = vec![
//!     Document::new("a", "the trash island drifts"),
//!     Document::new("b", "nothing relevant here"),
//! ];
//! assert_eq!(rank(&docs, "trash island"), vec!["a"]);
//! ```

// Module declarations
pub mod corpus;
mod error;
mod rank;
pub mod scoring;
mod stats;
pub mod testing;
mod tokenizer;
mod types;

// Re-exports for public API
pub use corpus::{load_directory, load_fixtures, load_payload, load_payload_path, validate_documents};
pub use error::{Error, Result};
pub use rank::{rank, rank_scored};
pub use scoring::ranking::{compare_ranked, sort_ranked};
pub use scoring::{inverse_document_frequency, score, score_terms};
pub use stats::{document_frequency, CorpusStats};
pub use tokenizer::{normalize_token, tokenize};
pub use types::{Document, Payload, RankedDocument};

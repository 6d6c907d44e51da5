// src/text/mod.rs
//! Extracted-article text: corpus loading and tokenization.

pub mod corpus;
pub mod tokenize;

pub use corpus::{load_tokens, TokenMap};
pub use tokenize::word_tokenize;

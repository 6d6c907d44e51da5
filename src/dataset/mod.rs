// src/dataset/mod.rs
//! Dataset assembly: labeled nodes with closed-world outlinks and tokens.

pub mod assemble;
pub mod export;
pub mod node;

pub use assemble::{assemble, assemble_dataset, assemble_single, SharedIndex};
pub use node::{Dataset, Node};

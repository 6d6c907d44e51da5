// src/graph/mod.rs
//! Graph construction stages: titles, labels, redirects and links.

pub mod labels;
pub mod links;
pub mod redirects;
pub mod titles;

pub use labels::{propagate_all, propagate_labels, LabelIndex, TitleLabels};
pub use links::LinkGraph;
pub use redirects::RedirectMap;
pub use titles::resolve_titles;

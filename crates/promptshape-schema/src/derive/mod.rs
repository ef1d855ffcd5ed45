//! Pure derivations over a [`FieldTree`](crate::FieldTree).
//!
//! Both walk the forest with the same recursion shape and are total: any
//! reachable tree, including an empty one or one with blank names, yields a
//! document. Missing data falls back to defaults instead of failing.
mod example;
mod schema;

pub use example::*;
pub use schema::*;

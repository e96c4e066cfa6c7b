//! Service layer - the entity-facing facade over a filter core

pub mod keyed_filter;

pub use keyed_filter::{KeyedFilter, Lookup};

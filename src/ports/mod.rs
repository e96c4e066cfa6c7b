//! Ports layer - trait seams to external collaborators

pub mod outbound;

pub use outbound::{DataStorage, FilterKey, HasKey};

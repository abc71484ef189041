//! Game implementations.

pub mod vanishing;

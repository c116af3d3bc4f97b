//! Queries over a loaded [`Gradebook`](crate::gradebook::Gradebook).
//!
//! Every query is a pure read. Lookup misses and empty results come back as
//! outcome variants, never as errors.

pub mod grade;
pub mod histogram;
pub mod report;
pub mod stats;
pub mod utility;

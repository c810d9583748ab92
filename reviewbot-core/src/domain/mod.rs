//! Core domain types
//!
//! These types describe a homework submission as reported by the review
//! status API and the fixed set of review verdicts.

pub mod homework;

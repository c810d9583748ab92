//! Reviewbot Core
//!
//! Core types and checks for the homework review status bot.
//!
//! This crate contains:
//! - Domain types: submissions and their review status
//! - DTOs: the status API response shape
//! - Validation of raw API responses and translation of submissions into messages

pub mod domain;
pub mod dto;
pub mod error;
pub mod translate;
pub mod validate;

pub use error::CheckError;
pub use translate::translate;
pub use validate::validate;

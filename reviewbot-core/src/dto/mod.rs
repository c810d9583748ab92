//! Data Transfer Objects for the review status API

pub mod statuses;

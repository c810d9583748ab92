//! Status translation
//!
//! Turns a submission into the message sent to the recipient.

use crate::domain::homework::{ReviewStatus, Submission};
use crate::error::CheckError;

/// Builds the notification text for a submission
///
/// The status is checked before the name, so a record missing both is
/// reported as [`CheckError::UnknownStatus`].
pub fn translate(submission: &Submission) -> Result<String, CheckError> {
    let status = submission
        .status
        .as_deref()
        .and_then(ReviewStatus::from_code)
        .ok_or_else(|| CheckError::UnknownStatus(submission.status.clone()))?;

    let name = submission
        .homework_name
        .as_deref()
        .ok_or(CheckError::MissingName)?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

//! Response validation
//!
//! Checks a decoded status API response against the documented shape and
//! converts it into [`HomeworkStatuses`].
//!
//! An empty `homeworks` list is a valid response. It means nothing has
//! changed since the cursor, and callers skip translation for that cycle.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::homework::Submission;
use crate::dto::statuses::HomeworkStatuses;
use crate::error::CheckError;

const HOMEWORKS_KEY: &str = "homeworks";
const CURRENT_DATE_KEY: &str = "current_date";

/// Validates a raw API response
///
/// # Errors
/// Returns [`CheckError::MalformedResponse`] when the response is not an
/// object, when `homeworks` is absent or not a list, when `current_date` is
/// absent or not an integer, or when a submission entry has the wrong shape.
pub fn validate(response: &Value) -> Result<HomeworkStatuses, CheckError> {
    let object = response
        .as_object()
        .ok_or_else(|| CheckError::malformed(format!("expected an object, got {}", kind(response))))?;

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| CheckError::malformed(format!("missing key `{}`", HOMEWORKS_KEY)))?;

    let entries = homeworks.as_array().ok_or_else(|| {
        CheckError::malformed(format!(
            "`{}` must be a list, got {}",
            HOMEWORKS_KEY,
            kind(homeworks)
        ))
    })?;

    let current_date = object
        .get(CURRENT_DATE_KEY)
        .ok_or_else(|| CheckError::malformed(format!("missing key `{}`", CURRENT_DATE_KEY)))?;

    let current_date = current_date.as_i64().ok_or_else(|| {
        CheckError::malformed(format!(
            "`{}` must be an integer, got {}",
            CURRENT_DATE_KEY,
            kind(current_date)
        ))
    })?;

    let homeworks = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_submission(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HomeworkStatuses {
        homeworks,
        current_date,
    })
}

fn parse_submission(index: usize, entry: &Value) -> Result<Submission, CheckError> {
    if !entry.is_object() {
        return Err(CheckError::malformed(format!(
            "homework #{} must be an object, got {}",
            index,
            kind(entry)
        )));
    }

    Submission::deserialize(entry)
        .map_err(|e| CheckError::malformed(format!("homework #{}: {}", index, e)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

//! Status API response DTO

use crate::domain::homework::Submission;

/// Body of a successful `homework_statuses` response
///
/// Submissions are ordered most recent first.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkStatuses {
    pub homeworks: Vec<Submission>,
    pub current_date: i64,
}

impl HomeworkStatuses {
    /// The most recent submission, if any
    pub fn latest(&self) -> Option<&Submission> {
        self.homeworks.first()
    }

    /// Server-reported time of the response
    pub fn server_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.current_date, 0)
    }
}

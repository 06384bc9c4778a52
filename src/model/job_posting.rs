use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct JobPosting {
    pub id: u64,
    #[schema(example = "Payroll Specialist")]
    pub title: String,
    #[schema(example = "Handles monthly payroll runs and statutory filings.")]
    pub description: String,
    #[schema(example = 10)]
    pub department_id: u64,
    /// open | closed
    #[schema(example = "open")]
    pub status: String,
    #[schema(example = "2026-07-01T08:00:00Z", value_type = String, format = "date-time", nullable = true)]
    pub posted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct JobApplication {
    pub id: u64,
    pub job_posting_id: u64,
    #[schema(example = "Maria Santos")]
    pub candidate_name: String,
    #[schema(example = "maria.santos@mail.com")]
    pub email: String,
    #[schema(example = "+639171234567", nullable = true)]
    pub phone: Option<String>,
    /// pending | shortlisted | rejected | hired
    #[schema(example = "pending")]
    pub status: String,
    #[schema(example = "2026-07-05T12:00:00Z", value_type = String, format = "date-time", nullable = true)]
    pub applied_at: Option<DateTime<Utc>>,
}

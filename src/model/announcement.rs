use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Announcement {
    pub id: u64,
    #[schema(example = "Office closed on Aug 21 (Ninoy Aquino Day)")]
    pub title: String,
    #[schema(example = "Regular holiday pay rules apply for scheduled shifts.")]
    pub body: String,
    /// User id of the poster.
    pub posted_by: u64,
    #[schema(example = "2026-07-31T10:00:00Z", value_type = String, format = "date-time", nullable = true)]
    pub created_at: Option<DateTime<Utc>>,
}

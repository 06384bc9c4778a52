use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Classification a custom payroll deduction may reference (loans, uniform
/// charges, cash advances and the like).
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct DeductionType {
    pub id: u64,
    #[schema(example = "Company loan")]
    pub name: String,
    #[schema(example = "Amortization of an approved company loan", nullable = true)]
    pub description: Option<String>,
}

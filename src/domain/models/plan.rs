use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Payload sent to the planner's generate endpoint. Built once per
/// submission from the trimmed form inputs, after validation.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub keywords: String,
    pub meals: u32,
    pub servings_per_meal: u32,
}

/// A stored planner request as returned by the service. Rows are owned
/// by the server; the client only ever holds read-only copies, and the
/// history list is replaced wholesale on every fetch.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryRequest {
    pub id: i64,
    pub keywords: String,
    pub meals: u32,
    pub servings_per_meal: u32,
    /// Whatever the model produced. No shape is guaranteed; see
    /// `PlanSummary` for the normalization rules.
    #[serde(default)]
    pub ai_response: serde_json::Value,
    #[serde(default)]
    pub created_at: String,
}

use anyhow::Result;
use async_trait::async_trait;

use super::GenerateRequest;
use super::GroceryRequest;

#[async_trait]
pub trait Planner {
    /// Submits a generate request and returns the stored row, including
    /// the model response. One shot, no retry.
    async fn generate(&self, payload: GenerateRequest) -> Result<GroceryRequest>;

    /// Fetches every past request in the order the server returns them.
    async fn list_history(&self) -> Result<Vec<GroceryRequest>>;
}

pub type PlannerBox = Box<dyn Planner + Send + Sync>;

pub mod planner;

use crate::domain::models::PlannerBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> PlannerBox {
        return Box::<planner::PlannerApi>::default();
    }
}

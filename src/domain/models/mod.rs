mod action;
mod ai_response;
mod event;
mod loading;
mod plan;
mod planner;
mod textarea;

pub use action::*;
pub use ai_response::*;
pub use event::*;
pub use loading::*;
pub use plan::*;
pub use planner::*;
pub use textarea::*;

pub mod actions;
mod app_state;
pub mod events;
mod history_table;
mod plan_view;
mod scroll;

pub use app_state::*;
pub use history_table::*;
pub use plan_view::*;
pub use scroll::*;

use tui_textarea::Input;

use super::GroceryRequest;

pub enum Event {
    HistoryFailed(String),
    HistoryLoaded(Vec<GroceryRequest>),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardTab(),
    PlanFailed(String),
    PlanGenerated(GroceryRequest),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}

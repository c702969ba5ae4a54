use dioxus::prelude::*;
use vidlink_common::state::{PageState, StateHandle};

/// DOM id of the result panel, used as the scroll target.
pub const RESULT_PANEL_ID: &str = "resultPanel";

/// Delay before scrolling to a freshly rendered panel (milliseconds).
pub const SCROLL_DELAY_MS: i32 = 100;

/// The page's state signal, as the submission controller sees it.
#[derive(Clone, Copy)]
pub struct PageSignal(pub Signal<PageState>);

impl StateHandle for PageSignal {
    fn update<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        let mut signal = self.0;
        signal.with_mut(f)
    }
}

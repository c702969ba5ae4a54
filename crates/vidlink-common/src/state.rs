use std::cell::RefCell;

use crate::error::ExtractError;
use crate::messages;
use crate::types::ExtractionResult;
use crate::view::ResultView;

/// Submit control affordances. Both transitions are idempotent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    is_loading: bool,
}

impl LoadingState {
    pub fn enter(&mut self) {
        self.is_loading = true;
    }

    pub fn exit(&mut self) {
        self.is_loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn disabled(&self) -> bool {
        self.is_loading
    }

    pub fn label(&self) -> &'static str {
        if self.is_loading {
            messages::SUBMIT_WORKING
        } else {
            messages::SUBMIT_IDLE
        }
    }

    pub fn show_icon(&self) -> bool {
        !self.is_loading
    }

    pub fn show_spinner(&self) -> bool {
        self.is_loading
    }
}

/// The single error banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
    visible: bool,
}

impl ErrorBanner {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.visible = true;
    }

    // Text is kept; it is not observable while hidden.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultPanel {
    view: Option<ResultView>,
    visible: bool,
    generation: u64,
}

impl ResultPanel {
    /// Hides the panel and drops every rendered card.
    pub fn clear(&mut self) {
        self.visible = false;
        self.view = None;
    }

    /// Replaces the panel content wholesale. Does not reveal it.
    pub fn render(&mut self, result: &ExtractionResult) {
        self.view = Some(ResultView::from_result(result));
        self.generation += 1;
    }

    pub fn reveal(&mut self) {
        self.visible = true;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn view(&self) -> Option<&ResultView> {
        self.view.as_ref()
    }

    /// Bumped on every render; used to key rendered cards so a new result
    /// never reuses nodes from the previous one.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// All mutable UI state of the page, owned by one controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub loading: LoadingState,
    pub error: ErrorBanner,
    pub panel: ResultPanel,
}

impl PageState {
    /// Enter loading and hide anything left over from the previous request.
    pub fn begin_submission(&mut self) {
        self.loading.enter();
        self.error.hide();
        self.panel.clear();
    }

    pub fn show_result(&mut self, result: &ExtractionResult) {
        self.panel.render(result);
        self.panel.reveal();
    }

    pub fn show_error(&mut self, error: &ExtractError) {
        self.error.show(error.user_message());
    }
}

/// Shared access to a `PageState` across await points.
pub trait StateHandle {
    fn update<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R;
}

impl StateHandle for RefCell<PageState> {
    fn update<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

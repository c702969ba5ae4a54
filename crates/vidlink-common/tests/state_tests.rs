mod fixtures;

use fixtures::*;
use vidlink_common::error::ExtractError;
use vidlink_common::messages;
use vidlink_common::state::*;
use vidlink_common::types::parse_extraction_response;

// ============================================================================
// Loading state
// ============================================================================

#[test]
fn loading_starts_idle() {
    let loading = LoadingState::default();
    assert!(!loading.is_loading());
    assert!(!loading.disabled());
    assert_eq!(loading.label(), messages::SUBMIT_IDLE);
    assert!(loading.show_icon());
    assert!(!loading.show_spinner());
}

#[test]
fn enter_swaps_all_affordances() {
    let mut loading = LoadingState::default();
    loading.enter();
    assert!(loading.disabled());
    assert_eq!(loading.label(), messages::SUBMIT_WORKING);
    assert!(!loading.show_icon());
    assert!(loading.show_spinner());
}

#[test]
fn transitions_are_idempotent() {
    let mut once = LoadingState::default();
    once.enter();
    let mut twice = LoadingState::default();
    twice.enter();
    twice.enter();
    assert_eq!(once, twice);

    once.exit();
    twice.exit();
    twice.exit();
    assert_eq!(once, twice);
    assert_eq!(once, LoadingState::default());
}

// ============================================================================
// Error banner
// ============================================================================

#[test]
fn banner_show_and_hide() {
    let mut banner = ErrorBanner::default();
    assert!(!banner.visible());

    banner.show("first");
    banner.show("second");
    assert!(banner.visible());
    assert_eq!(banner.message(), Some("second"));

    banner.hide();
    assert!(!banner.visible());
}

// ============================================================================
// Result panel and page
// ============================================================================

fn sample_result() -> vidlink_common::types::ExtractionResult {
    let body = result_json("Title", "youtube", two_formats()).to_string();
    parse_extraction_response(200, &body).unwrap()
}

#[test]
fn render_does_not_reveal() {
    let mut panel = ResultPanel::default();
    panel.render(&sample_result());
    assert!(!panel.visible());
    assert!(panel.view().is_some());
    panel.reveal();
    assert!(panel.visible());
}

#[test]
fn clear_drops_previous_cards() {
    let mut panel = ResultPanel::default();
    panel.render(&sample_result());
    panel.reveal();
    panel.clear();
    assert!(!panel.visible());
    assert!(panel.view().is_none());
}

#[test]
fn rendering_twice_replaces_cards() {
    let mut panel = ResultPanel::default();
    panel.render(&sample_result());
    let first = panel.generation();
    panel.render(&sample_result());
    assert_eq!(panel.view().unwrap().formats.cards().len(), 2);
    assert!(panel.generation() > first);
}

#[test]
fn begin_submission_hides_previous_output() {
    let mut page = PageState::default();
    page.show_result(&sample_result());
    page.error.show("old");

    page.begin_submission();
    assert!(page.loading.is_loading());
    assert!(!page.error.visible());
    assert!(!page.panel.visible());
    assert!(page.panel.view().is_none());
}

#[test]
fn show_error_uses_user_message() {
    let mut page = PageState::default();
    page.begin_submission();
    page.show_error(&ExtractError::Service {
        status: 400,
        detail: None,
    });
    assert!(page.error.visible());
    assert_eq!(page.error.message(), Some(messages::EXTRACTION_FAILED));
    assert!(!page.panel.visible());
}

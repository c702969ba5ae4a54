pub mod error_banner;
pub mod extract_form;
pub mod format_card;
pub mod result_panel;

/// Class list with the `hide` utility class appended when not visible.
pub fn class_with_hide(base: &str, visible: bool) -> String {
    if visible {
        base.to_string()
    } else {
        format!("{} hide", base)
    }
}

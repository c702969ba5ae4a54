#![allow(non_snake_case)]

use dioxus::prelude::*;
use vidlink_common::state::PageState;

use super::class_with_hide;

#[component]
pub fn ErrorBanner(page: Signal<PageState>) -> Element {
    let banner = page.read().error.clone();
    let class = class_with_hide("error-message", banner.visible());
    let message = banner.message().unwrap_or_default();

    rsx! {
        div { id: "errorMessage", class: "{class}", role: "alert", "{message}" }
    }
}

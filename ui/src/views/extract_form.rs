#![allow(non_snake_case)]

use dioxus::prelude::*;
use vidlink_common::controller::{self, SubmitOutcome};
use vidlink_common::state::{LoadingState, PageState};

use super::class_with_hide;
use crate::state::{PageSignal, RESULT_PANEL_ID, SCROLL_DELAY_MS};

#[component]
pub fn ExtractForm(page: Signal<PageState>) -> Element {
    let mut url_input = use_signal(String::new);
    let loading = page.read().loading.clone();

    rsx! {
        form {
            id: "downloadForm",
            class: "download-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let raw = url_input.read().clone();
                spawn(async move {
                    let client = crate::api::client();
                    let outcome = controller::submit(&PageSignal(page), &client, &raw).await;
                    if outcome == SubmitOutcome::Rendered {
                        crate::dom::scroll_into_view_later(RESULT_PANEL_ID, SCROLL_DELAY_MS);
                    }
                });
            },

            div { class: "input-group",
                input {
                    id: "videoUrl",
                    class: "url-input",
                    r#type: "text",
                    placeholder: "貼上 YouTube 或 Facebook 影片網址...",
                    autocomplete: "off",
                    value: "{url_input}",
                    oninput: move |e| {
                        url_input.set(e.value());
                    },
                }

                SubmitButton { loading }
            }
        }
    }
}

#[component]
fn SubmitButton(loading: LoadingState) -> Element {
    let icon_class = class_with_hide("btn-icon fa-solid fa-wand-magic-sparkles", loading.show_icon());
    let spinner_class = class_with_hide("spinner", loading.show_spinner());

    rsx! {
        button {
            id: "submitBtn",
            class: "submit-btn",
            r#type: "submit",
            disabled: loading.disabled(),
            i { class: "{icon_class}" }
            span { class: "btn-text", "{loading.label()}" }
            span { class: "{spinner_class}" }
        }
    }
}

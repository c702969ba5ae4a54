#![allow(non_snake_case)]

use dioxus::prelude::*;
use vidlink_common::state::PageState;

mod api;
mod dom;
mod state;
mod views;

use views::error_banner::ErrorBanner;
use views::extract_form::ExtractForm;
use views::result_panel::ResultPanel;

const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    dioxus::logger::initialize_default();
    launch(App);
}

#[component]
fn App() -> Element {
    use_effect(|| {
        api::init();
    });

    let page = use_signal(PageState::default);

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        document::Stylesheet { href: FONT_AWESOME }

        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title",
                    i { class: "fa-solid fa-cloud-arrow-down" }
                    " 影片下載器"
                }
                p { class: "app-subtitle", "支援 YouTube 與 Facebook 影片，貼上網址即可取得直接下載連結。" }
            }

            ExtractForm { page }

            ErrorBanner { page }

            ResultPanel { page }
        }
    }
}

#![allow(non_snake_case)]

use dioxus::prelude::*;
use vidlink_common::messages;
use vidlink_common::view::{FormatCard, LINK_REL, LINK_TARGET};

#[component]
pub fn FormatCardView(card: FormatCard) -> Element {
    let tracks = card.tracks.label();
    let download = messages::DOWNLOAD;

    rsx! {
        div { class: "format-card",
            div { class: "format-header",
                span { class: "resolution", "{card.resolution}" }
                span { class: "ext", "{card.ext}" }
            }

            div { class: "file-info",
                span {
                    i { class: "fa-solid fa-file-video" }
                    " {tracks}"
                }
                span { "{card.size_label}" }
            }

            a {
                class: "download-link",
                href: "{card.download_url}",
                target: LINK_TARGET,
                rel: LINK_REL,
                download: "",
                i { class: "fa-solid fa-download" }
                " {download}"
            }
        }
    }
}

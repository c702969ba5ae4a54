#![allow(non_snake_case)]

use dioxus::prelude::*;
use vidlink_common::messages;
use vidlink_common::state::PageState;
use vidlink_common::view::FormatList;

use super::class_with_hide;
use super::format_card::FormatCardView;
use crate::state::RESULT_PANEL_ID;

#[component]
pub fn ResultPanel(page: Signal<PageState>) -> Element {
    let state = page.read();
    let panel = &state.panel;
    let class = class_with_hide("result-panel", panel.visible());
    let generation = panel.generation();

    let Some(view) = panel.view() else {
        return rsx! {
            section { id: RESULT_PANEL_ID, class: "{class}" }
        };
    };

    let no_formats = messages::NO_FORMATS;
    let format_list = match &view.formats {
        FormatList::Empty => rsx! {
            div { class: "error-message", "{no_formats}" }
        },
        FormatList::Cards(cards) => rsx! {
            for (index, card) in cards.iter().enumerate() {
                FormatCardView { key: "{generation}-{index}", card: card.clone() }
            }
        },
    };

    rsx! {
        section { id: RESULT_PANEL_ID, class: "{class}",
            div { class: "video-info",
                div { class: "thumbnail-wrapper",
                    img {
                        id: "videoThumb",
                        src: "{view.thumbnail_src}",
                        alt: "{view.title}",
                    }
                    if let Some(duration) = view.duration_label.as_ref() {
                        span { id: "videoDuration", class: "duration-badge", "{duration}" }
                    }
                }

                div { class: "video-details",
                    h2 { id: "videoTitle", class: "video-title", "{view.title}" }
                    span { id: "videoSource", class: "{view.badge.css_class()}",
                        i { class: "{view.badge.icon_class()}" }
                        " {view.badge.label()}"
                    }
                }
            }

            div { id: "formatList", class: "format-list", {format_list} }
        }
    }
}

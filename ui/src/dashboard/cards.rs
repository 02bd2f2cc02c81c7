use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::DashboardState;

const TOOLTIP_RECOGNIZED: &str =
    "Sum of likes where outliers (likes above average + std dev) are clamped to the cap.";
const TOOLTIP_RAW: &str = "Total likes with no adjustment (the real value).";
const TOOLTIP_AVERAGE: &str = "Total raw likes divided by the number of posts.";
const TOOLTIP_CAP: &str =
    "Posts above this value (average + std dev) are treated as outliers.";

#[component]
pub fn SourceCards(state: Signal<DashboardState>, selected: Signal<Option<String>>) -> Element {
    let snapshot = state();

    let entries: Vec<CardEntry> = snapshot
        .summaries
        .iter()
        .enumerate()
        .map(|(rank, summary)| CardEntry {
            name: summary.source_name.clone(),
            is_winner: rank == 0,
            recognized: format::format_count(summary.total_recognized),
            total_raw: format::format_count(summary.total_raw),
            average: format::format_count(summary.average),
            cap: format::format_count(summary.cap),
        })
        .collect();

    rsx! {
        div { class: "dashboard-grid",
            for entry in entries.into_iter() {
                {render_card(entry, selected)}
            }
        }
    }
}

#[derive(Clone)]
struct CardEntry {
    name: String,
    is_winner: bool,
    recognized: String,
    total_raw: String,
    average: String,
    cap: String,
}

fn render_card(entry: CardEntry, mut selected: Signal<Option<String>>) -> Element {
    let CardEntry {
        name,
        is_winner,
        recognized,
        total_raw,
        average,
        cap,
    } = entry;

    let button_name = name.clone();

    rsx! {
        article { class: format!(
                "account-card {}",
                if is_winner { "account-card--winner" } else { "" }
            ),
            div { class: "account-card__header",
                span { class: "account-card__name",
                    "{name}"
                    if is_winner {
                        span { class: "account-card__trophy", title: "Top recognized likes", "🏆" }
                    }
                }
            }

            div { class: "metrics-grid",
                div { class: "metric-item metric-item--wide", "data-tooltip": TOOLTIP_RECOGNIZED,
                    span { class: "metric-label", "Recognized likes" }
                    span { class: "metric-value text-success", "{recognized}" }
                }
                div { class: "metric-item", "data-tooltip": TOOLTIP_RAW,
                    span { class: "metric-label", "Raw total" }
                    span { class: "metric-value", "{total_raw}" }
                }
                div { class: "metric-item", "data-tooltip": TOOLTIP_AVERAGE,
                    span { class: "metric-label", "Average" }
                    span { class: "metric-value text-purple", "{average}" }
                }
                div { class: "metric-item metric-item--wide", "data-tooltip": TOOLTIP_CAP,
                    span { class: "metric-label", "Cap (avg + std dev)" }
                    span { class: "metric-value text-warning", "{cap}" }
                }
            }

            button {
                r#type: "button",
                class: "account-card__detail",
                onclick: move |_| selected.set(Some(button_name.clone())),
                "View post detail"
            }
        }
    }
}

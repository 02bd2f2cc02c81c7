use dioxus::prelude::*;

use crate::core::{format, timing};
use crate::dashboard::{lost_class, lost_label, recognized_class, recognized_title, DashboardState};
use crate::metrics::SourceSummary;

/// Delay before the open class lands, so the CSS transition runs.
const OPEN_DELAY_MS: u64 = 10;
/// Matches the overlay's CSS fade-out duration.
const CLOSE_FADE_MS: u64 = 300;

/// Per-source detail table, shown as a two-state modal. A stale or unknown
/// selected name renders nothing; it is not an error.
#[component]
pub fn DetailModal(state: Signal<DashboardState>, selected: Signal<Option<String>>) -> Element {
    let mut is_open = use_signal(|| false);

    use_effect(move || {
        if selected().is_some() {
            spawn(async move {
                timing::sleep_ms(OPEN_DELAY_MS).await;
                is_open.set(true);
            });
        }
    });

    let Some(name) = selected() else {
        return rsx! {};
    };
    let snapshot = state();
    let Some(summary) = snapshot.summary_for(&name).cloned() else {
        return rsx! {};
    };

    let close = move |_: MouseEvent| {
        is_open.set(false);
        spawn(async move {
            timing::sleep_ms(CLOSE_FADE_MS).await;
            let mut selected = selected;
            selected.set(None);
        });
    };

    rsx! {
        div { class: format!(
                "modal-overlay {}",
                if is_open() { "is-open" } else { "" }
            ),
            div { class: "modal-content",
                div { class: "modal-header",
                    h2 { "Post detail – {summary.source_name}" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        onclick: close,
                        "✕"
                    }
                }
                div { class: "modal-body",
                    {render_table(&summary)}
                }
            }
        }
    }
}

fn render_table(summary: &SourceSummary) -> Element {
    rsx! {
        table {
            thead {
                tr {
                    th { "Date" }
                    th { "Raw likes" }
                    th { "Recognized" }
                    th { "Lost" }
                    th { "Link" }
                }
            }
            tbody {
                for record in summary.records.iter() {
                    tr {
                        td { "{record.date}" }
                        td { class: "text-purple", "{format::format_count(record.count)}" }
                        td {
                            class: recognized_class(record),
                            title: recognized_title(record, summary.cap),
                            "{format::format_decimal(record.recognized)}"
                        }
                        td { class: lost_class(record), "{lost_label(record)}" }
                        td {
                            a {
                                href: "{record.link}",
                                target: "_blank",
                                class: "link-icon",
                                "↗"
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::dashboard::{DashboardState, DetailModal, SourceCards, StatusCard};

/// The dashboard page: kick off one load cycle on mount, show the loader
/// until every source has completed, then the ranked cards (or the terminal
/// status notice when nothing loaded). Refreshing means reloading the page.
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_signal(DashboardState::default);
    let mut loading = use_signal(|| true);
    let selected = use_signal(|| Option::<String>::None);

    use_future(move || async move {
        let loaded = DashboardState::load().await;
        state.set(loaded);
        loading.set(false);
    });

    let status = state().status;

    rsx! {
        section { class: "page page-dashboard",
            header { class: "page-dashboard__header",
                h1 { "Likeboard" }
                p { "Recognized likes per source, with outliers capped at average + std dev." }
            }

            if loading() {
                div { class: "loader",
                    span { class: "loader__spinner" }
                    p { "Loading sources…" }
                }
            } else {
                match status {
                    Some(notice) => rsx! {
                        StatusCard { notice }
                    },
                    None => rsx! {
                        SourceCards { state, selected }
                        DetailModal { state, selected }
                    },
                }
            }
        }
    }
}

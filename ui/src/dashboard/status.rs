use dioxus::prelude::*;

/// Single-slot terminal notice shown instead of the card grid. There is no
/// retry action; the user reloads the page.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusNotice {
    pub title: String,
    pub detail: String,
}

impl StatusNotice {
    /// Every source failed or was unreadable; `source_name` is the last
    /// source whose read failed.
    pub fn read_failure(source_name: &str) -> Self {
        Self {
            title: "Couldn't load data".to_string(),
            detail: format!(
                "Check the spreadsheet id, and that sheet '{source_name}' exists and is published to the web."
            ),
        }
    }

    /// All sources completed but none contributed a usable row.
    pub fn no_data() -> Self {
        Self {
            title: "No data found".to_string(),
            detail: "No valid rows could be extracted. Make sure every sheet has data in columns A, B and C.".to_string(),
        }
    }
}

#[component]
pub fn StatusCard(notice: StatusNotice) -> Element {
    rsx! {
        div { class: "status-card",
            span { class: "status-card__icon", "✕" }
            h3 { "{notice.title}" }
            p { "{notice.detail}" }
        }
    }
}

//! Static configuration for the published spreadsheet and its source sheets.
//!
//! Both values are load-time configuration, not runtime input: the dashboard
//! reads one published-to-web spreadsheet and a fixed, ordered list of sheets.

/// Published-to-web spreadsheet id (the `/d/e/<id>/` path segment).
pub const SPREADSHEET_ID: &str =
    "2PACX-1vQLVPo6ljNz5xt1biHoxOh5pgUKYbX6b1_oQk_Bd-HuMY3qpKLX1FaRnWcZp9T1qiKIhVMNgiZrFqsh";

/// Ordered source sheets. Ranking ties preserve this order.
pub const SOURCE_NAMES: &[&str] = &["Bogota.Atl", "Los_delaU", "Grupo_Niche_Poli"];

/// The three logical columns per sheet: date, likes, link.
pub const COLUMN_QUERY: &str = "SELECT A, B, C";

/// Visualization-query endpoint for the configured spreadsheet. The sheet
/// name and column query are passed as request parameters.
pub fn query_url() -> String {
    format!("https://docs.google.com/spreadsheets/d/e/{SPREADSHEET_ID}/gviz/tq")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_addresses_published_spreadsheet() {
        let url = query_url();
        assert!(url.starts_with("https://docs.google.com/spreadsheets/d/e/"));
        assert!(url.ends_with("/gviz/tq"));
        assert!(url.contains(SPREADSHEET_ID));
    }
}

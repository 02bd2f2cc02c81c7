use crate::core::format;
use crate::metrics::AnnotatedRecord;

pub(crate) fn recognized_class(record: &AnnotatedRecord) -> &'static str {
    if record.is_capped {
        "text-warning"
    } else {
        "text-success"
    }
}

pub(crate) fn recognized_title(record: &AnnotatedRecord, cap: f64) -> String {
    if record.is_capped {
        format!("Cap of {} applied", format::format_decimal(cap))
    } else {
        "Within normal range".to_string()
    }
}

/// Lost likes read as a signed deduction, or a literal zero.
pub(crate) fn lost_label(record: &AnnotatedRecord) -> String {
    if record.lost > 0.0 {
        format!("-{}", format::format_decimal(record.lost))
    } else {
        "0.0".to_string()
    }
}

pub(crate) fn lost_class(record: &AnnotatedRecord) -> &'static str {
    if record.lost > 0.0 {
        "text-danger"
    } else {
        "text-secondary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capped_record() -> AnnotatedRecord {
        AnnotatedRecord {
            date: "01/01/2025".to_string(),
            count: 30.0,
            link: "#".to_string(),
            recognized: 28.165,
            is_capped: true,
            lost: 1.835,
        }
    }

    fn plain_record() -> AnnotatedRecord {
        AnnotatedRecord {
            date: "02/01/2025".to_string(),
            count: 10.0,
            link: "#".to_string(),
            recognized: 10.0,
            is_capped: false,
            lost: 0.0,
        }
    }

    #[test]
    fn capped_rows_show_a_signed_deduction() {
        let record = capped_record();
        assert_eq!(lost_label(&record), "-1.8");
        assert_eq!(lost_class(&record), "text-danger");
        assert_eq!(recognized_class(&record), "text-warning");
        assert_eq!(recognized_title(&record, 28.165), "Cap of 28.2 applied");
    }

    #[test]
    fn uncapped_rows_show_a_literal_zero() {
        let record = plain_record();
        assert_eq!(lost_label(&record), "0.0");
        assert_eq!(lost_class(&record), "text-secondary");
        assert_eq!(recognized_class(&record), "text-success");
        assert_eq!(recognized_title(&record, 28.165), "Within normal range");
    }
}

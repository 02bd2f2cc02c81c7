//! Outlier-capped "recognized likes" metrics per source.
//!
//! A post's likes count as recognized only up to a cap of mean plus one
//! population standard deviation; whatever exceeds the cap is reported as
//! lost. Everything here is pure and deterministic so it can be tested
//! without the ingestion or rendering layers.

use crate::ingest::RawRecord;

/// A raw record plus its recognized/lost split against the source cap.
///
/// `recognized + lost == count` always; `is_capped` holds exactly when
/// `count` strictly exceeds the cap (a count equal to the cap is untouched).
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecord {
    pub date: String,
    pub count: f64,
    pub link: String,
    pub recognized: f64,
    pub is_capped: bool,
    pub lost: f64,
}

/// Per-source statistical summary over the surviving records, in row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceSummary {
    pub source_name: String,
    pub total_raw: f64,
    pub average: f64,
    pub std_dev: f64,
    pub cap: f64,
    pub total_recognized: f64,
    pub records: Vec<AnnotatedRecord>,
}

/// Summarize one source's records: mean, population standard deviation
/// (divisor n), cap = mean + std dev, and the recognized/lost split per
/// record. An empty input yields the all-zero summary rather than dividing
/// by zero. Negative counts are not rejected here; they flow through the
/// arithmetic unchanged (validation belongs to ingestion).
pub fn compute_summary(source_name: &str, records: Vec<RawRecord>) -> SourceSummary {
    let n = records.len();
    if n == 0 {
        return SourceSummary {
            source_name: source_name.to_string(),
            ..SourceSummary::default()
        };
    }

    let total_raw: f64 = records.iter().map(|record| record.count).sum();
    let average = total_raw / n as f64;
    let variance = records
        .iter()
        .map(|record| {
            let diff = record.count - average;
            diff * diff
        })
        .sum::<f64>()
        / n as f64;
    let std_dev = variance.sqrt();
    let cap = average + std_dev;

    // Single pass in row order; the accumulation order of total_recognized
    // is part of the contract (bit-for-bit reproducible sums).
    let mut total_recognized = 0.0;
    let annotated: Vec<AnnotatedRecord> = records
        .into_iter()
        .map(|record| {
            let is_capped = record.count > cap;
            let recognized = if is_capped { cap } else { record.count };
            total_recognized += recognized;
            let lost = if is_capped { record.count - cap } else { 0.0 };
            AnnotatedRecord {
                date: record.date,
                count: record.count,
                link: record.link,
                recognized,
                is_capped,
                lost,
            }
        })
        .collect();

    SourceSummary {
        source_name: source_name.to_string(),
        total_raw,
        average,
        std_dev,
        cap,
        total_recognized,
        records: annotated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(count: f64) -> RawRecord {
        RawRecord {
            date: "01/01/2025".to_string(),
            count,
            link: "#".to_string(),
        }
    }

    fn records(counts: &[f64]) -> Vec<RawRecord> {
        counts.iter().copied().map(record).collect()
    }

    #[test]
    fn known_sequence_matches_population_statistics() {
        let summary = compute_summary("demo", records(&[10.0, 20.0, 30.0]));

        assert_eq!(summary.total_raw, 60.0);
        assert_eq!(summary.average, 20.0);
        // Population variance: (100 + 0 + 100) / 3.
        let expected_std_dev = (200.0_f64 / 3.0).sqrt();
        assert!((summary.std_dev - expected_std_dev).abs() < 1e-9);
        assert_eq!(summary.cap, summary.average + summary.std_dev);

        assert!(!summary.records[0].is_capped);
        assert!(!summary.records[1].is_capped);
        assert!(summary.records[2].is_capped);
        assert!((summary.records[2].recognized - summary.cap).abs() < 1e-9);
        assert!((summary.records[2].lost - (30.0 - summary.cap)).abs() < 1e-9);

        let expected_total = 10.0 + 20.0 + summary.cap;
        assert!((summary.total_recognized - expected_total).abs() < 1e-9);
    }

    #[test]
    fn recognized_plus_lost_reconstructs_every_count() {
        let summary = compute_summary("demo", records(&[3.0, 7.0, 150.0, 12.0, 0.0, 9.0]));

        for annotated in &summary.records {
            assert!((annotated.recognized + annotated.lost - annotated.count).abs() < 1e-9);
            assert_eq!(annotated.is_capped, annotated.count > summary.cap);
            assert!(annotated.lost >= 0.0);
        }

        let recomputed: f64 = summary.records.iter().map(|r| r.recognized).sum();
        assert!((summary.total_recognized - recomputed).abs() < 1e-9);
    }

    #[test]
    fn count_equal_to_cap_is_not_capped() {
        // Identical counts: std dev 0, so cap == average == every count.
        let summary = compute_summary("demo", records(&[5.0, 5.0, 5.0]));

        assert_eq!(summary.cap, 5.0);
        for annotated in &summary.records {
            assert!(!annotated.is_capped);
            assert_eq!(annotated.recognized, 5.0);
            assert_eq!(annotated.lost, 0.0);
        }
        assert_eq!(summary.total_recognized, 15.0);
    }

    #[test]
    fn empty_input_yields_zero_summary() {
        let summary = compute_summary("demo", Vec::new());

        assert_eq!(summary.source_name, "demo");
        assert_eq!(summary.total_raw, 0.0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.cap, 0.0);
        assert_eq!(summary.total_recognized, 0.0);
        assert!(summary.records.is_empty());
    }

    #[test]
    fn negative_counts_pass_through_arithmetically() {
        // Not validated here: a negative count lowers the average and may
        // lower the cap. The engine must stay total and keep its identities.
        let summary = compute_summary("demo", records(&[-10.0, 10.0, 30.0]));

        assert_eq!(summary.total_raw, 30.0);
        assert_eq!(summary.average, 10.0);
        assert_eq!(summary.cap, summary.average + summary.std_dev);
        for annotated in &summary.records {
            assert!((annotated.recognized + annotated.lost - annotated.count).abs() < 1e-9);
        }
    }

    #[test]
    fn single_record_is_its_own_average() {
        let summary = compute_summary("demo", records(&[42.0]));

        assert_eq!(summary.average, 42.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.cap, 42.0);
        assert!(!summary.records[0].is_capped);
        assert_eq!(summary.total_recognized, 42.0);
    }
}

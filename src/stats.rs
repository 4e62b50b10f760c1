//! Prefecture coverage statistics
//!
//! Drives the map view: how many records exist per prefecture, which
//! prefecture leads, and how much of the country has been covered.
//! Derived on demand from the current record list; nothing here persists.

use serde::Serialize;

use crate::model::{DrinkRecord, Prefecture};

/// Record count for one prefecture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefectureCount {
    pub prefecture: Prefecture,
    pub count: usize,
}

/// Aggregate view over the whole record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageStats {
    /// Total number of records
    pub total_records: usize,
    /// Distinct prefectures with at least one record
    pub visited_prefectures: usize,
    /// Size of the full prefecture set (always 47)
    pub total_prefectures: usize,
    /// Leader of the sorted list; `None` when there are no records
    pub most_popular: Option<PrefectureCount>,
    /// Per-prefecture counts, descending; ties keep first-encounter order
    pub counts: Vec<PrefectureCount>,
}

/// Group records by prefecture and count them
///
/// Grouping preserves the order prefectures first appear in the input, and
/// the descending sort is stable, so equal counts keep that order.
pub fn prefecture_coverage(records: &[DrinkRecord]) -> CoverageStats {
    let mut counts: Vec<PrefectureCount> = Vec::new();

    for record in records {
        match counts
            .iter_mut()
            .find(|c| c.prefecture == record.prefecture())
        {
            Some(entry) => entry.count += 1,
            None => counts.push(PrefectureCount {
                prefecture: record.prefecture(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));

    CoverageStats {
        total_records: records.len(),
        visited_prefectures: counts.len(),
        total_prefectures: Prefecture::COUNT,
        most_popular: counts.first().cloned(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DrinkType;
    use chrono::NaiveDate;

    fn record_in(prefecture: Prefecture) -> DrinkRecord {
        DrinkRecord::new(
            "テスト銘柄".to_string(),
            None,
            DrinkType::Sake,
            prefecture,
            3,
            None,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            None,
        )
    }

    #[test]
    fn test_empty_input_yields_empty_stats() {
        let stats = prefecture_coverage(&[]);
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.visited_prefectures, 0);
        assert_eq!(stats.total_prefectures, 47);
        assert_eq!(stats.most_popular, None);
        assert!(stats.counts.is_empty());
    }

    #[test]
    fn test_groups_count_and_sort_descending() {
        // A:3, B:1, A:2 interleaved -> [{A,5},{B,1}]
        let records: Vec<DrinkRecord> = [
            Prefecture::Akita,
            Prefecture::Akita,
            Prefecture::Akita,
            Prefecture::Hyogo,
            Prefecture::Akita,
            Prefecture::Akita,
        ]
        .into_iter()
        .map(record_in)
        .collect();

        let stats = prefecture_coverage(&records);
        assert_eq!(stats.total_records, 6);
        assert_eq!(stats.visited_prefectures, 2);
        assert_eq!(
            stats.counts,
            vec![
                PrefectureCount {
                    prefecture: Prefecture::Akita,
                    count: 5
                },
                PrefectureCount {
                    prefecture: Prefecture::Hyogo,
                    count: 1
                },
            ]
        );
        assert_eq!(
            stats.most_popular,
            Some(PrefectureCount {
                prefecture: Prefecture::Akita,
                count: 5
            })
        );
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let records: Vec<DrinkRecord> = [
            Prefecture::Kyoto,
            Prefecture::Nara,
            Prefecture::Kyoto,
            Prefecture::Osaka,
            Prefecture::Nara,
            Prefecture::Osaka,
        ]
        .into_iter()
        .map(record_in)
        .collect();

        let stats = prefecture_coverage(&records);
        let order: Vec<Prefecture> = stats.counts.iter().map(|c| c.prefecture).collect();
        assert_eq!(
            order,
            vec![Prefecture::Kyoto, Prefecture::Nara, Prefecture::Osaka]
        );
        assert_eq!(stats.most_popular.unwrap().prefecture, Prefecture::Kyoto);
    }
}

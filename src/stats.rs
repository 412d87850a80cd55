use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    /// `YYYY-MM`
    pub month: String,
    pub reviews: usize,
}

/// Directory wide counters, derived from the catalog on demand.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total_operators: usize,
    pub total_reviews: usize,
    pub reviewed_operators: usize,
    pub reviews_by_month: Vec<MonthCount>,
}

impl DirectoryStats {
    pub fn collect(catalog: &Catalog) -> Self {
        let operators = catalog.list_operators();
        let reviews = catalog.list_all_reviews();

        let mut by_month = BTreeMap::<&str, usize>::new();
        for review in &reviews {
            match month_of(&review.date) {
                Some(month) => *by_month.entry(month).or_default() += 1,
                None => tracing::debug!(review = %review.id, date = %review.date, "skip undated review"),
            }
        }

        Self {
            total_operators: operators.len(),
            total_reviews: reviews.len(),
            reviewed_operators: operators.iter().filter(|op| !op.reviews.is_empty()).count(),
            reviews_by_month: by_month
                .into_iter()
                .map(|(month, reviews)| MonthCount {
                    month: month.to_string(),
                    reviews,
                })
                .collect(),
        }
    }
}

// review dates are never validated, only a leading `YYYY-MM` is trusted
fn month_of(date: &str) -> Option<&str> {
    let month = date.get(..7)?;
    let bytes = month.as_bytes();
    let digits = |r: std::ops::Range<usize>| bytes[r].iter().all(u8::is_ascii_digit);
    (digits(0..4) && bytes[4] == b'-' && digits(5..7)).then_some(month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixture::operator;

    #[test]
    fn test_month_of() {
        assert_eq!(month_of("2023-10-01"), Some("2023-10"));
        assert_eq!(month_of("2023-10"), Some("2023-10"));
        assert_eq!(month_of("yesterday"), None);
        assert_eq!(month_of("2023"), None);
        assert_eq!(month_of(""), None);
    }

    #[test]
    fn test_collect() {
        let mut netjets = operator("netjets", "NetJets", &[5.0, 4.0]);
        netjets.reviews[0].date = "2023-09-22".to_string();
        netjets.reviews[1].date = "last week".to_string();
        let catalog = Catalog::new(vec![
            netjets,
            operator("thrive", "Thrive", &[]),
            operator("flexjet", "Flexjet", &[4.0]),
        ])
        .unwrap();

        let stats = DirectoryStats::collect(&catalog);
        assert_eq!(stats.total_operators, 3);
        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.reviewed_operators, 2);
        assert_eq!(
            stats.reviews_by_month,
            [
                MonthCount { month: "2023-09".to_string(), reviews: 1 },
                MonthCount { month: "2023-10".to_string(), reviews: 1 },
            ]
        );
    }

    #[test]
    fn test_collect_empty() {
        let stats = DirectoryStats::collect(&Catalog::new(Vec::new()).unwrap());
        assert_eq!(stats.total_operators, 0);
        assert_eq!(stats.total_reviews, 0);
        assert!(stats.reviews_by_month.is_empty());
    }
}

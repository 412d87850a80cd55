use std::{cmp::Ordering, fmt, str::FromStr};

use derive_builder::Builder;
use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

use crate::data::Operator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "name_asc", alias = "name_ascending")]
    NameAsc,
    #[serde(rename = "name_desc", alias = "name_descending")]
    NameDesc,
    #[default]
    #[serde(rename = "rating_desc", alias = "rating_descending")]
    RatingDesc,
    #[serde(rename = "rating_asc", alias = "rating_ascending")]
    RatingAsc,
}

impl SortOrder {
    /// Every order, in the sequence the selector presents them.
    pub const ALL: [SortOrder; 4] = [
        SortOrder::RatingDesc,
        SortOrder::RatingAsc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::RatingDesc => "rating_desc",
            Self::RatingAsc => "rating_asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RatingDesc => "Rating: High to Low",
            Self::RatingAsc => "Rating: Low to High",
            Self::NameAsc => "Name: A to Z",
            Self::NameDesc => "Name: Z to A",
        }
    }

    fn compare(self, a: &Operator, b: &Operator) -> Ordering {
        match self {
            Self::NameAsc => compare_names(&a.name, &b.name),
            Self::NameDesc => compare_names(&b.name, &a.name),
            Self::RatingDesc => b.average_rating().total_cmp(&a.average_rating()),
            Self::RatingAsc => a.average_rating().total_cmp(&b.average_rating()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sort order {0:?}, expect one of name_asc, name_desc, rating_desc, rating_asc")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name_asc" | "name_ascending" => Ok(Self::NameAsc),
            "name_desc" | "name_descending" => Ok(Self::NameDesc),
            "rating_desc" | "rating_descending" => Ok(Self::RatingDesc),
            "rating_asc" | "rating_ascending" => Ok(Self::RatingAsc),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// The transient view state a listing is derived from.
#[derive(Debug, Clone, Default, Builder)]
pub struct ListingQuery {
    #[builder(setter(into), default)]
    pub search: String,
    #[builder(default)]
    pub sort: SortOrder,
}

/// Case-insensitive substring match on the display name. An empty search
/// matches everything.
pub fn matches_search(operator: &Operator, search: &str) -> bool {
    operator
        .name
        .to_lowercase()
        .contains(&search.to_lowercase())
}

thread_local! {
    // root collation, tertiary strength, punctuation not ignored
    static NAME_COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("fail to load name collator, sort by code point: {e}");
                None
            }
        };
}

/// Locale-aware comparison of two display names using the root collation.
///
/// Names the collator ranks equal are ordered by code point, so distinct
/// names never compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => Ordering::Equal,
        })
        .then_with(|| a.cmp(b))
}

/// Filter by search text then sort by the selected order.
///
/// The sort is stable, operators which compare equal keep their input order.
/// Recomputed from scratch on every call.
pub fn filter_and_sort<'a>(operators: &'a [Operator], query: &ListingQuery) -> Vec<&'a Operator> {
    let mut listed: Vec<&Operator> = operators
        .iter()
        .filter(|op| matches_search(op, &query.search))
        .collect();

    listed.sort_by(|a, b| query.sort.compare(a, b));

    tracing::debug!(
        search = %query.search,
        sort = %query.sort,
        matched = listed.len(),
        "listing derived"
    );

    listed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixture::operator;

    fn names(listed: &[&Operator]) -> Vec<String> {
        listed.iter().map(|op| op.name.clone()).collect()
    }

    fn query(search: &str, sort: SortOrder) -> ListingQuery {
        ListingQueryBuilder::default()
            .search(search)
            .sort(sort)
            .build()
            .unwrap()
    }

    fn fleet() -> Vec<Operator> {
        vec![
            operator("netjets", "NetJets", &[5.0, 5.0]),
            operator("thrive", "Thrive", &[]),
            operator("flexjet", "Flexjet", &[4.0, 5.0]),
            operator("jet-edge", "Jet Edge", &[4.0]),
            operator("airshare", "Airshare", &[4.0]),
        ]
    }

    #[test]
    fn test_default_query() {
        let query = ListingQueryBuilder::default().build().unwrap();
        assert_eq!(query.search, "");
        assert_eq!(query.sort, SortOrder::RatingDesc);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let ops = fleet();
        for search in ["jet", "JET", "t", "edge", "x", "Air", ""] {
            let listed = filter_and_sort(&ops, &query(search, SortOrder::NameAsc));
            for op in &ops {
                let kept = listed.iter().any(|l| l.id == op.id);
                let expected = op.name.to_lowercase().contains(&search.to_lowercase());
                assert_eq!(kept, expected, "search {search:?} on {}", op.name);
                assert_eq!(matches_search(op, search), expected);
            }
        }
    }

    #[test]
    fn test_filter_does_not_trim() {
        let ops = fleet();
        let listed = filter_and_sort(&ops, &query(" edge", SortOrder::NameAsc));
        assert_eq!(names(&listed), ["Jet Edge"]);
        assert!(filter_and_sort(&ops, &query("edge ", SortOrder::NameAsc)).is_empty());
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let ops = fleet();
        assert_eq!(filter_and_sort(&ops, &query("", SortOrder::RatingDesc)).len(), ops.len());
    }

    #[test]
    fn test_name_orders_are_reversed() {
        let ops = fleet();
        let asc = names(&filter_and_sort(&ops, &query("", SortOrder::NameAsc)));
        let mut desc = names(&filter_and_sort(&ops, &query("", SortOrder::NameDesc)));
        desc.reverse();

        assert_eq!(asc, ["Airshare", "Flexjet", "Jet Edge", "NetJets", "Thrive"]);
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_rating_orders() {
        let ops = fleet();
        let desc = names(&filter_and_sort(&ops, &query("", SortOrder::RatingDesc)));
        assert_eq!(desc, ["NetJets", "Flexjet", "Jet Edge", "Airshare", "Thrive"]);

        let asc = names(&filter_and_sort(&ops, &query("", SortOrder::RatingAsc)));
        assert_eq!(asc, ["Thrive", "Jet Edge", "Airshare", "Flexjet", "NetJets"]);
    }

    #[test]
    fn test_rating_ties_keep_input_order() {
        let ops = vec![
            operator("b", "Bravo", &[4.0]),
            operator("a", "Alpha", &[3.0, 5.0]),
            operator("c", "Charlie", &[4.0]),
        ];
        for sort in [SortOrder::RatingDesc, SortOrder::RatingAsc] {
            let listed = names(&filter_and_sort(&ops, &query("", sort)));
            assert_eq!(listed, ["Bravo", "Alpha", "Charlie"]);
        }
    }

    #[test]
    fn test_zen_able_scenario() {
        let ops = vec![
            operator("zen", "Zen", &[3.0]),
            operator("able", "Able", &[5.0]),
        ];

        assert_eq!(names(&filter_and_sort(&ops, &query("", SortOrder::NameAsc))), ["Able", "Zen"]);
        assert_eq!(names(&filter_and_sort(&ops, &query("", SortOrder::RatingDesc))), ["Able", "Zen"]);
        assert_eq!(names(&filter_and_sort(&ops, &query("z", SortOrder::RatingDesc))), ["Zen"]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(filter_and_sort(&[], &query("jet", SortOrder::NameDesc)).is_empty());
    }

    #[test]
    fn test_compare_names() {
        assert_eq!(compare_names("flyExclusive", "FlyHouse"), Ordering::Less);
        assert_eq!(compare_names("AAC JET", "Aero"), Ordering::Less);
        assert_eq!(compare_names("aero", "Aero"), Ordering::Less);
        assert_eq!(compare_names("Aero", "Aero"), Ordering::Equal);
    }

    #[test]
    fn test_compare_names_beyond_ascii() {
        assert_eq!(compare_names("Éclair", "Ezra"), Ordering::Less);
        assert_eq!(compare_names("Ezra", "Éclair"), Ordering::Greater);
        assert_eq!(compare_names("Jet-A, LLC", "Jet, A"), Ordering::Less);
        assert_eq!(compare_names("éclair", "Eclair"), Ordering::Greater);
    }

    #[test]
    fn test_name_sort_with_accents() {
        let ops = vec![
            operator("ezra", "Ezra Air", &[]),
            operator("eclair", "Éclair Jets", &[]),
            operator("delta", "Delta Wings", &[]),
        ];
        let asc = names(&filter_and_sort(&ops, &query("", SortOrder::NameAsc)));
        assert_eq!(asc, ["Delta Wings", "Éclair Jets", "Ezra Air"]);

        let mut desc = names(&filter_and_sort(&ops, &query("", SortOrder::NameDesc)));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("name_asc".parse::<SortOrder>().unwrap(), SortOrder::NameAsc);
        assert_eq!("rating_ascending".parse::<SortOrder>().unwrap(), SortOrder::RatingAsc);
        assert!("newest".parse::<SortOrder>().is_err());

        for sort in SortOrder::ALL {
            assert_eq!(sort.to_string().parse::<SortOrder>().unwrap(), sort);
        }
    }

    #[test]
    fn test_sort_order_serde() {
        let sort: SortOrder = serde_json::from_str("\"name_descending\"").unwrap();
        assert_eq!(sort, SortOrder::NameDesc);
        assert_eq!(serde_json::to_string(&SortOrder::RatingDesc).unwrap(), "\"rating_desc\"");
    }
}

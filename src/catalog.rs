use std::collections::{HashMap, HashSet};

use crate::data::{Operator, Review};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("operator id {0} is used more than once")]
    DuplicateOperator(String),
    #[error("review id {review} of operator {operator} is used more than once")]
    DuplicateReview { operator: String, review: String },
}

/// The read-only operator collection every request reads from.
///
/// Built once at startup and never mutated afterwards, so it can be shared
/// between workers without locking.
#[derive(Debug)]
pub struct Catalog {
    operators: Vec<Operator>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(operators: Vec<Operator>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(operators.len());
        for (pos, op) in operators.iter().enumerate() {
            if index.insert(op.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateOperator(op.id.clone()));
            }
        }

        let mut review_ids = HashSet::new();
        for op in &operators {
            for review in &op.reviews {
                if !review_ids.insert(review.id.clone()) {
                    return Err(CatalogError::DuplicateReview {
                        operator: op.id.clone(),
                        review: review.id.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            operators = operators.len(),
            reviews = review_ids.len(),
            "catalog built"
        );

        Ok(Self { operators, index })
    }

    pub fn list_operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn get_operator(&self, id: &str) -> Option<&Operator> {
        self.index.get(id).map(|&pos| &self.operators[pos])
    }

    /// Reviews of one operator. Unknown ids give an empty slice.
    pub fn list_reviews(&self, operator_id: &str) -> &[Review] {
        self.get_operator(operator_id)
            .map(|op| op.reviews.as_slice())
            .unwrap_or_default()
    }

    /// Every review, in operator order then insertion order.
    pub fn list_all_reviews(&self) -> Vec<&Review> {
        self.operators.iter().flat_map(|op| &op.reviews).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixture::operator;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            operator("netjets", "NetJets", &[5.0, 5.0]),
            operator("thrive", "Thrive", &[]),
            operator("flexjet", "Flexjet", &[4.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_operators_keeps_order() {
        let ids: Vec<_> = catalog()
            .list_operators()
            .iter()
            .map(|op| op.id.clone())
            .collect();
        assert_eq!(ids, ["netjets", "thrive", "flexjet"]);
    }

    #[test]
    fn test_get_operator() {
        let catalog = catalog();
        assert_eq!(catalog.get_operator("flexjet").unwrap().name, "Flexjet");
        assert!(catalog.get_operator("unknown-id").is_none());
    }

    #[test]
    fn test_list_reviews_never_fails() {
        let catalog = catalog();
        assert_eq!(catalog.list_reviews("netjets").len(), 2);
        assert!(catalog.list_reviews("thrive").is_empty());
        assert!(catalog.list_reviews("unknown-id").is_empty());
    }

    #[test]
    fn test_list_all_reviews_order() {
        let catalog = catalog();
        let ids: Vec<_> = catalog
            .list_all_reviews()
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["rev-netjets-1", "rev-netjets-2", "rev-flexjet-1"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.list_operators().is_empty());
        assert!(catalog.list_all_reviews().is_empty());
        assert!(catalog.list_reviews("netjets").is_empty());
    }

    #[test]
    fn test_reject_duplicate_operator() {
        let err = Catalog::new(vec![
            operator("netjets", "NetJets", &[]),
            operator("netjets", "NetJets Again", &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateOperator(id) if id == "netjets"));
    }

    #[test]
    fn test_reject_duplicate_review() {
        let mut second = operator("flexjet", "Flexjet", &[4.0]);
        second.reviews[0].id = "rev-netjets-1".to_string();

        let err = Catalog::new(vec![operator("netjets", "NetJets", &[5.0]), second]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateReview { operator, .. } if operator == "flexjet"
        ));
    }
}

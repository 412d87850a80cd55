use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    /// unique slug, also used in urls
    pub id: String,
    pub name: String,
    /// logo asset key, resolved by the renderer against the asset base
    pub logo_id: String,
    pub description: String,
    pub hq: String,
    /// 0 means unknown
    pub fleet_size: u32,
    pub website: String,
    pub reviews: Vec<Review>,
}

impl Operator {
    /// Mean of every review's overall rating, or 0 when there is no review.
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }

        let total: f64 = self.reviews.iter().map(|r| r.ratings.overall).sum();
        total / self.reviews.len() as f64
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn has_known_fleet_size(&self) -> bool {
        self.fleet_size > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    pub avatar_id: String,
    /// free form, never validated
    pub date: String,
    pub comment: String,
    pub ratings: Ratings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub overall: f64,
    pub safety: f64,
    pub service: f64,
    pub punctuality: f64,
    pub value: f64,
}

#[cfg(test)]
pub(crate) mod fixture {
    use super::*;

    pub(crate) fn review(id: &str, overall: f64) -> Review {
        Review {
            id: id.to_string(),
            author: "Tester".to_string(),
            avatar_id: "user-avatar-1".to_string(),
            date: "2023-10-01".to_string(),
            comment: "fine".to_string(),
            ratings: Ratings {
                overall,
                safety: 5.0,
                service: 4.0,
                punctuality: 4.0,
                value: 4.0,
            },
        }
    }

    /// Operator whose reviews carry the given overall ratings.
    pub(crate) fn operator(id: &str, name: &str, overall: &[f64]) -> Operator {
        Operator {
            id: id.to_string(),
            name: name.to_string(),
            logo_id: format!("op-logo-{id}"),
            description: String::new(),
            hq: "Somewhere".to_string(),
            fleet_size: 0,
            website: format!("https://www.{id}.com/"),
            reviews: overall
                .iter()
                .enumerate()
                .map(|(i, v)| review(&format!("rev-{id}-{}", i + 1), *v))
                .collect(),
        }
    }
}

#[test]
fn test_average_rating() {
    use fixture::operator;

    assert_eq!(operator("none", "None", &[]).average_rating(), 0.0);
    assert_eq!(operator("five", "Five", &[5.0, 5.0]).average_rating(), 5.0);
    assert_eq!(operator("mixed", "Mixed", &[4.0, 5.0]).average_rating(), 4.5);
}

#[test]
fn test_serialize_uses_camel_case() {
    let op = fixture::operator("netjets", "NetJets", &[5.0]);
    let value = serde_json::to_value(&op).unwrap();

    assert_eq!(value["logoId"], "op-logo-netjets");
    assert_eq!(value["fleetSize"], 0);
    assert_eq!(value["reviews"][0]["avatarId"], "user-avatar-1");
    assert_eq!(value["reviews"][0]["ratings"]["overall"], 5.0);
}

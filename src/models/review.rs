use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub comment: String,
    pub rating: f64,
    pub place_id: Option<i64>,
    pub place_name: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub comment: String,
    pub rating: f64,
    pub place_id: i64,
}

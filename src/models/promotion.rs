use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: i64,
    pub description: String,
    pub discount: f64,
    pub start_date: String,
    pub end_date: String,
    pub place_name: Option<String>,
    pub image_url: Option<String>,
}

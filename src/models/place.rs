use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::promotion::Promotion;
use crate::models::review::Review;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub image_url: Option<String>,
    pub address: String,
    pub description: String,
    pub likes: Option<i64>,
    pub category: String,
    pub opening_hours: String,
    pub coordinate: Coordinate,
    pub reviews: Vec<Review>,
    pub promotions: Vec<Promotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_has_liked: Option<bool>,
}

/// Place id exactly as the backend sent it, number or string.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum PlaceId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceId::Number(id) => write!(f, "{}", id),
            PlaceId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

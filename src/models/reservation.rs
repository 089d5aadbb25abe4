use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub place_id: i64,
    pub date: String,
    pub number_of_people: u32,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: i64,
    pub place_id: i64,
    pub date: String,
    pub number_of_people: u32,
    pub user_email: String,
}

pub mod auth;
pub mod place;
pub mod promotion;
pub mod reservation;
pub mod review;

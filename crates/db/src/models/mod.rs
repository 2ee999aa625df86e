//! Row structs (serialized straight to API responses) and request DTOs.

pub mod checkin;
pub mod connect_request;
pub mod donation;
pub mod life_group;
pub mod prayer_request;
pub mod question;
pub mod sermon;
pub mod volunteer;

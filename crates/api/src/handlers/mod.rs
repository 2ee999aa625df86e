pub mod checkins;
pub mod life_groups;
pub mod resources;

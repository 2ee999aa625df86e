//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or an executor) as the first argument. Plain list/get
//! queries go through the generic [`ResourceRepo`].

pub mod checkin_repo;
pub mod connect_request_repo;
pub mod donation_repo;
pub mod life_group_repo;
pub mod prayer_request_repo;
pub mod question_repo;
pub mod resource;
pub mod sermon_repo;
pub mod volunteer_repo;

pub use checkin_repo::CheckInRepo;
pub use life_group_repo::LifeGroupRepo;
pub use resource::{Resource, ResourceRepo, Submission, DEFAULT_LIST_LIMIT};
pub use sermon_repo::SermonRepo;

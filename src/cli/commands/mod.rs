pub mod auth;
pub mod categories;
pub mod certificates;
pub mod dashboard;
pub mod documents;
pub mod profile;
pub mod resumes;
pub mod seatime;
pub mod storage;

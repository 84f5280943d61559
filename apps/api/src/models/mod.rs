pub mod analysis;
pub mod candidate;
pub mod github;

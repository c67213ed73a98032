pub mod record;
pub mod sentiment;
pub mod submission;

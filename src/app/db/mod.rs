pub mod comment_reactions;
pub mod comments;
pub mod join_requests;
pub mod members;
pub mod project_members;
pub mod projects;
pub mod status_intervals;
pub mod subscribers;
pub mod task_members;
pub mod tasks;

pub use members::MemberWithCounts;
pub use projects::Project;
pub use status_intervals::StatusInterval;
pub use tasks::Task;

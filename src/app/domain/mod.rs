pub mod join_response_status;
pub mod page;
pub mod project_status;
pub mod reaction;
pub mod role;
pub mod task_priority;
pub mod task_status_label;
pub mod task_type;
pub mod username;
pub mod validation_helpers;

pub use join_response_status::JoinResponseStatus;
pub use page::{Page, PageParams, PageRequest, Sorting};
pub use project_status::ProjectStatus;
pub use reaction::Reaction;
pub use role::Role;
pub use task_priority::TaskPriority;
pub use task_status_label::TaskStatusLabel;
pub use task_type::TaskType;
pub use username::Username;

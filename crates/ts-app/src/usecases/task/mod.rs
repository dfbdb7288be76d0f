pub mod task_details;

pub use task_details::{LoadTaskDetails, TaskDetailsError, TaskDetailsView};

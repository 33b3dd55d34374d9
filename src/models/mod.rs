pub mod task;
pub mod user;

pub use task::{CreateTaskInput, Task, UpdateTaskInput, DEFAULT_TASK_STATUS};
pub use user::{CreateUserInput, UpdateUserInput, User};

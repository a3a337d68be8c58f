pub mod script;
pub mod task_ops;

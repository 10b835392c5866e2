pub mod validation;

pub use validation::{rejection_message, validate_list_name, validate_todo_name};

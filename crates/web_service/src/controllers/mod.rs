pub mod list_controller;
pub mod todo_controller;

pub mod todo_handler;

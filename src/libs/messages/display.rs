//! Display implementation for tudu application messages.
//!
//! Central mapping from the structured `Message` enum to the text users see.
//! Keeping every user-facing string in one place keeps wording consistent
//! between the CLI output and the error banner, and gives the tests a single
//! source of truth for expected texts.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // Error banner
            Message::UnableToLoadTodos => "Unable to load todos".to_string(),
            Message::TitleShouldNotBeEmpty => "Title should not be empty".to_string(),
            Message::UnableToAddTodo => "Unable to add a todo".to_string(),
            Message::UnableToDeleteTodo => "Unable to delete a todo".to_string(),
            Message::UnableToUpdateTodo => "Unable to update a todo".to_string(),

            // Tasks
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskRenamed(title) => format!("Task renamed to '{}'", title),
            Message::TaskToggled(id) => format!("Task {} toggled", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::ItemsLeft(count) => format!("{} items left", count),
            Message::NoTasks => "No tasks yet".to_string(),
            Message::NoCompletedTasks => "No completed tasks to clear".to_string(),
            Message::CompletedTasksCleared(count) => format!("Cleared {} completed task(s)", count),
            Message::AllTasksToggled(count) => format!("Toggled {} task(s)", count),

            // Configuration
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::GatewayUrlRequired => "Gateway URL must not be empty".to_string(),
        };
        write!(f, "{}", text)
    }
}

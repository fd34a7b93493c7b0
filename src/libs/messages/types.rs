#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === ERROR BANNER MESSAGES ===
    // Texts shown by the error aggregator, one line per raised flag.
    UnableToLoadTodos,
    TitleShouldNotBeEmpty,
    UnableToAddTodo,
    UnableToDeleteTodo,
    UnableToUpdateTodo,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskRenamed(String),
    TaskToggled(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    ItemsLeft(usize),
    NoTasks,
    NoCompletedTasks,
    CompletedTasksCleared(usize),
    AllTasksToggled(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    GatewayUrlRequired,
}

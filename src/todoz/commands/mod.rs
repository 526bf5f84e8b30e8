//! # Command Layer
//!
//! Pure transformations of the todo collection. Every function here takes the
//! collection (`&mut Vec<Todo>` or `&[Todo]`) and plain Rust arguments, and
//! returns plain Rust values. Nothing in this layer touches storage, the clock,
//! or the terminal; [`crate::todo_store::TodoStore`] supplies ids and
//! timestamps and persists after each call.
//!
//! "Nothing happened" is expressed as `None` (or an empty `Vec`), never as an
//! error: blank text and unknown ids are ordinary inputs.

use crate::config::TodozConfig;
use crate::model::Todo;

pub mod clear_completed;
pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod toggle;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of an API call, for any UI to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<Todo>,
    pub listed_todos: Vec<Todo>,
    pub active_count: usize,
    pub total_count: usize,
    pub config: Option<TodozConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<Todo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_counts(mut self, active: usize, total: usize) -> Self {
        self.active_count = active;
        self.total_count = total;
        self
    }

    pub fn with_config(mut self, config: TodozConfig) -> Self {
        self.config = Some(config);
        self
    }
}

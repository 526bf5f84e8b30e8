use crate::model::{Todo, TodoId};
use chrono::{DateTime, Utc};

/// Appends a new open todo. Returns `None`, leaving `todos` untouched, when
/// `text` is blank after trimming.
pub fn run(todos: &mut Vec<Todo>, id: TodoId, text: &str, now: DateTime<Utc>) -> Option<Todo> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let todo = Todo::new(id, text.to_string(), now);
    todos.push(todo.clone());
    Some(todo)
}

use crate::model::{Todo, TodoId};

/// Replaces the text of the todo with `id`.
///
/// Returns `None` when nothing changed: the id is unknown, the trimmed text is
/// empty, or it equals the current text. Callers use that to skip persisting.
pub fn run(todos: &mut [Todo], id: TodoId, new_text: &str) -> Option<Todo> {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return None;
    }

    let todo = todos.iter_mut().find(|t| t.id == id)?;
    if todo.text == new_text {
        return None;
    }
    todo.text = new_text.to_string();
    Some(todo.clone())
}

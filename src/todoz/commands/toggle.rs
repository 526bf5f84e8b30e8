use crate::model::{Todo, TodoId};

/// Flips `completed` on the todo with `id` and returns its new value.
pub fn run(todos: &mut [Todo], id: TodoId) -> Option<Todo> {
    let todo = todos.iter_mut().find(|t| t.id == id)?;
    todo.completed = !todo.completed;
    Some(todo.clone())
}

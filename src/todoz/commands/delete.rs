use crate::model::{Todo, TodoId};

/// Removes the todo with `id`, returning it.
pub fn run(todos: &mut Vec<Todo>, id: TodoId) -> Option<Todo> {
    let pos = todos.iter().position(|t| t.id == id)?;
    Some(todos.remove(pos))
}

use crate::model::{Filter, Todo};

/// Todos matching `filter`, in collection order.
pub fn filtered(todos: &[Todo], filter: Filter) -> Vec<&Todo> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}

pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| t.is_active()).count()
}

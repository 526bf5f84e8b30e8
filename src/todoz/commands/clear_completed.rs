use crate::model::Todo;

/// Drops every completed todo and returns them in their original order.
pub fn run(todos: &mut Vec<Todo>) -> Vec<Todo> {
    let (done, open): (Vec<Todo>, Vec<Todo>) =
        std::mem::take(todos).into_iter().partition(|t| t.completed);
    *todos = open;
    done
}

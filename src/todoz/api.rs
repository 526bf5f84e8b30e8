//! # API Facade
//!
//! The API layer is a **thin facade** over [`TodoStore`]. It serves as the
//! single entry point for UI clients and turns the store's raw outcomes into a
//! [`CmdResult`]: the todos touched, the todos to render, the counters, and
//! user-facing messages.
//!
//! No-op outcomes ("no todo with id 7", "nothing to change") become warning or
//! info messages. They are never errors; `Err` is reserved for storage
//! failures.
//!
//! ## Generic Over BlobStore
//!
//! `TodozApi<S: BlobStore>` is generic over the storage backend:
//! - Production: `TodozApi<FileStore>`
//! - Testing: `TodozApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Filter, TodoId};
use crate::store::BlobStore;
use crate::todo_store::TodoStore;
use std::path::PathBuf;

pub struct TodozApi<S: BlobStore> {
    store: TodoStore<S>,
    config_dir: PathBuf,
}

impl<S: BlobStore> TodozApi<S> {
    /// Opens the store behind `backend`, loading persisted todos.
    pub fn open(backend: S, config_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: TodoStore::open(backend)?,
            config_dir,
        })
    }

    pub fn add_todo(&mut self, text: &str) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match self.store.create(text)? {
            Some(todo) => {
                result.add_message(CmdMessage::success(format!(
                    "Todo added ({}): {}",
                    todo.id, todo.text
                )));
                result.affected_todos.push(todo);
            }
            None => result.add_message(CmdMessage::warning("Nothing to add: text is empty")),
        }
        Ok(self.with_counts(result))
    }

    pub fn toggle_todos(&mut self, ids: &[TodoId]) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for &id in ids {
            match self.store.toggle(id)? {
                Some(todo) => {
                    let verb = if todo.completed { "completed" } else { "reopened" };
                    result.add_message(CmdMessage::success(format!(
                        "Todo {} ({}): {}",
                        verb, todo.id, todo.text
                    )));
                    result.affected_todos.push(todo);
                }
                None => result.add_message(not_found(id)),
            }
        }
        Ok(self.with_counts(result))
    }

    pub fn edit_todo(&mut self, id: TodoId, new_text: &str) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        if self.store.get(id).is_none() {
            result.add_message(not_found(id));
            return Ok(self.with_counts(result));
        }
        match self.store.edit(id, new_text)? {
            Some(todo) => {
                result.add_message(CmdMessage::success(format!(
                    "Todo updated ({}): {}",
                    todo.id, todo.text
                )));
                result.affected_todos.push(todo);
            }
            None => result.add_message(CmdMessage::info(format!("Todo {} unchanged", id))),
        }
        Ok(self.with_counts(result))
    }

    pub fn delete_todos(&mut self, ids: &[TodoId]) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        for &id in ids {
            match self.store.delete(id)? {
                Some(todo) => {
                    result.add_message(CmdMessage::success(format!(
                        "Todo deleted ({}): {}",
                        todo.id, todo.text
                    )));
                    result.affected_todos.push(todo);
                }
                None => result.add_message(not_found(id)),
            }
        }
        Ok(self.with_counts(result))
    }

    pub fn clear_completed(&mut self) -> Result<CmdResult> {
        let removed = self.store.clear_completed()?;
        let mut result = CmdResult::default();
        let message = match removed.len() {
            0 => CmdMessage::info("No completed todos to clear"),
            1 => CmdMessage::success("Cleared 1 completed todo"),
            n => CmdMessage::success(format!("Cleared {} completed todos", n)),
        };
        result.add_message(message);
        Ok(self.with_counts(result.with_affected_todos(removed)))
    }

    pub fn clear_all(&mut self) -> Result<CmdResult> {
        let removed = self.store.todos().to_vec();
        self.store.clear_all()?;
        let mut result = CmdResult::default().with_affected_todos(removed);
        result.add_message(CmdMessage::success("All todos removed"));
        Ok(self.with_counts(result))
    }

    /// Lists todos through `filter`.
    pub fn list(&mut self, filter: Filter) -> Result<CmdResult> {
        self.store.set_filter(filter);
        Ok(self.listing())
    }

    /// Lists todos through a filter given by name; unknown names list everything.
    pub fn list_named(&mut self, filter: &str) -> Result<CmdResult> {
        self.store.set_filter_str(filter);
        Ok(self.listing())
    }

    pub fn get_text(&self, id: TodoId) -> Option<&str> {
        self.store.get(id).map(|t| t.text.as_str())
    }

    pub fn current_filter(&self) -> Filter {
        self.store.filter()
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    fn listing(&self) -> CmdResult {
        let listed = self.store.filtered_view().into_iter().cloned().collect();
        self.with_counts(CmdResult::default().with_listed_todos(listed))
    }

    fn with_counts(&self, result: CmdResult) -> CmdResult {
        result.with_counts(self.store.active_count(), self.store.todos().len())
    }
}

fn not_found(id: TodoId) -> CmdMessage {
    CmdMessage::warning(format!("No todo with id {}", id))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> TodozApi<InMemoryStore> {
        TodozApi::open(InMemoryStore::new(), PathBuf::from("unused")).unwrap()
    }

    #[test]
    fn add_reports_success_and_counts() {
        let mut api = api();
        let result = api.add_todo("Buy milk").unwrap();

        assert_eq!(result.affected_todos.len(), 1);
        assert_eq!(result.active_count, 1);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("Buy milk"));
    }

    #[test]
    fn add_blank_warns_without_adding() {
        let mut api = api();
        let result = api.add_todo("  ").unwrap();

        assert!(result.affected_todos.is_empty());
        assert_eq!(result.total_count, 0);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn toggle_reports_each_id() {
        let mut api = api();
        let id = api.add_todo("a").unwrap().affected_todos[0].id;

        let result = api.toggle_todos(&[id, TodoId(99)]).unwrap();
        assert_eq!(result.affected_todos.len(), 1);
        assert!(result.affected_todos[0].completed);
        assert_eq!(result.messages.len(), 2);
        assert!(result.messages[0].content.contains("completed"));
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(result.active_count, 0);

        let result = api.toggle_todos(&[id]).unwrap();
        assert!(result.messages[0].content.contains("reopened"));
    }

    #[test]
    fn edit_distinguishes_missing_and_unchanged() {
        let mut api = api();
        let id = api.add_todo("a").unwrap().affected_todos[0].id;

        let missing = api.edit_todo(TodoId(99), "b").unwrap();
        assert_eq!(missing.messages[0].level, MessageLevel::Warning);

        let unchanged = api.edit_todo(id, " a ").unwrap();
        assert_eq!(unchanged.messages[0].level, MessageLevel::Info);
        assert!(unchanged.affected_todos.is_empty());

        let edited = api.edit_todo(id, "b").unwrap();
        assert_eq!(edited.affected_todos[0].text, "b");
        assert_eq!(api.get_text(id), Some("b"));
    }

    #[test]
    fn delete_and_clear_completed() {
        let mut api = api();
        let a = api.add_todo("a").unwrap().affected_todos[0].id;
        let b = api.add_todo("b").unwrap().affected_todos[0].id;
        api.add_todo("c").unwrap();

        api.toggle_todos(&[b]).unwrap();
        let deleted = api.delete_todos(&[a]).unwrap();
        assert_eq!(deleted.total_count, 2);

        let cleared = api.clear_completed().unwrap();
        assert_eq!(cleared.affected_todos.len(), 1);
        assert_eq!(cleared.total_count, 1);

        let again = api.clear_completed().unwrap();
        assert_eq!(again.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn list_applies_filter() {
        let mut api = api();
        let milk = api.add_todo("Buy milk").unwrap().affected_todos[0].id;
        api.add_todo("Walk dog").unwrap();
        api.toggle_todos(&[milk]).unwrap();

        let active = api.list(Filter::Active).unwrap();
        assert_eq!(active.listed_todos.len(), 1);
        assert_eq!(active.listed_todos[0].text, "Walk dog");
        assert_eq!(active.total_count, 2);

        let unknown = api.list_named("bogus").unwrap();
        assert_eq!(unknown.listed_todos.len(), 2);
        assert_eq!(api.current_filter(), Filter::All);
    }

    #[test]
    fn clear_all_empties_everything() {
        let mut api = api();
        api.add_todo("a").unwrap();
        let result = api.clear_all().unwrap();
        assert_eq!(result.affected_todos.len(), 1);
        assert_eq!(result.total_count, 0);
        assert!(api.list(Filter::All).unwrap().listed_todos.is_empty());
    }
}

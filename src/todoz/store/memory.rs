use super::BlobStore;
use crate::error::{Result, TodozError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    blobs: HashMap<String, String>,
    writes: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw view of a stored blob, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl BlobStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(TodozError::Store("Simulated write error".to_string()));
        }
        self.blobs.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(TodozError::Store("Simulated write error".to_string()));
        }
        self.blobs.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Todo, TodoId};
    use crate::todo_store::STORAGE_KEY;
    use chrono::Utc;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        todos: Vec<Todo>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                todos: Vec::new(),
            }
        }

        fn next_id(&self) -> TodoId {
            TodoId(self.todos.len() as u64 + 1)
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                let todo = Todo::new(self.next_id(), format!("Test Todo {}", i + 1), Utc::now());
                self.todos.push(todo);
            }
            self
        }

        pub fn with_active_todo(mut self, text: &str) -> Self {
            let todo = Todo::new(self.next_id(), text.to_string(), Utc::now());
            self.todos.push(todo);
            self
        }

        pub fn with_completed_todo(mut self, text: &str) -> Self {
            let mut todo = Todo::new(self.next_id(), text.to_string(), Utc::now());
            todo.completed = true;
            self.todos.push(todo);
            self
        }

        /// Stores an arbitrary string under the todos key.
        pub fn with_raw_blob(mut self, blob: &str) -> Self {
            self.store.set(STORAGE_KEY, blob).unwrap();
            self
        }

        /// Writes the accumulated todos and returns the backing store.
        pub fn build(mut self) -> InMemoryStore {
            if !self.todos.is_empty() {
                let blob = serde_json::to_string(&self.todos).unwrap();
                self.store.set(STORAGE_KEY, &blob).unwrap();
            }
            self.store
        }
    }
}

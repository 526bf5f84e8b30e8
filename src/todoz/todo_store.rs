//! # TodoStore
//!
//! The authoritative owner of the todo collection. A `TodoStore` holds the
//! ordered list of todos, the current view [`Filter`] and the persistence
//! backend, and is the only thing that mutates the list.
//!
//! ## Write-through persistence
//!
//! Every mutation is followed by a [`TodoStore::save`] of the full
//! collection under [`STORAGE_KEY`]. There is no batching. `edit` and `create`
//! skip the save when they turn out to be no-ops; `toggle`, `delete` and
//! `clear_completed` always save.
//!
//! ## Ids
//!
//! Ids come from a counter seeded with one past the largest id in the loaded
//! collection, and only ever move forward while the store is alive. Two todos
//! created back to back therefore never share an id.
//!
//! ## Failure model
//!
//! Unknown ids and blank text are ordinary inputs and come back as `None`.
//! Unreadable persisted data loads as an empty list. A caller sees `Err` on a
//! backend I/O failure, and in that case the in-memory list already reflects
//! the mutation. `create` also fails once a persisted id of `u64::MAX` leaves
//! no fresh id to hand out.

use crate::commands::{clear_completed, create, delete, edit, toggle, view};
use crate::error::{Result, TodozError};
use crate::model::{Filter, Todo, TodoId};
use crate::store::BlobStore;
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Key the collection is stored under.
pub const STORAGE_KEY: &str = "todos";

pub struct TodoStore<S: BlobStore> {
    backend: S,
    todos: Vec<Todo>,
    filter: Filter,
    /// `None` once an id of `u64::MAX` has been seen.
    next_id: Option<TodoId>,
}

impl<S: BlobStore> TodoStore<S> {
    /// Creates an empty store. Nothing is read until [`TodoStore::load`].
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            todos: Vec::new(),
            filter: Filter::default(),
            next_id: Some(TodoId(1)),
        }
    }

    /// Creates a store and loads the persisted collection.
    pub fn open(backend: S) -> Result<Self> {
        let mut store = Self::new(backend);
        store.load()?;
        Ok(store)
    }

    pub fn create(&mut self, text: &str) -> Result<Option<Todo>> {
        let id = match self.next_id {
            Some(id) => id,
            None if text.trim().is_empty() => return Ok(None),
            None => return Err(TodozError::Store("todo id space exhausted".into())),
        };
        let Some(todo) = create::run(&mut self.todos, id, text, Utc::now()) else {
            debug!("create ignored: blank text");
            return Ok(None);
        };
        self.next_id = todo.id.next();
        debug!(id = %todo.id, "todo created");
        self.save()?;
        Ok(Some(todo))
    }

    pub fn toggle(&mut self, id: TodoId) -> Result<Option<Todo>> {
        let toggled = toggle::run(&mut self.todos, id);
        match &toggled {
            Some(todo) => debug!(%id, completed = todo.completed, "todo toggled"),
            None => debug!(%id, "toggle ignored: no such todo"),
        }
        self.save()?;
        Ok(toggled)
    }

    pub fn edit(&mut self, id: TodoId, new_text: &str) -> Result<Option<Todo>> {
        let Some(todo) = edit::run(&mut self.todos, id, new_text) else {
            debug!(%id, "edit ignored: nothing to change");
            return Ok(None);
        };
        debug!(%id, "todo edited");
        self.save()?;
        Ok(Some(todo))
    }

    pub fn delete(&mut self, id: TodoId) -> Result<Option<Todo>> {
        let removed = delete::run(&mut self.todos, id);
        match &removed {
            Some(_) => debug!(%id, "todo deleted"),
            None => debug!(%id, "delete ignored: no such todo"),
        }
        self.save()?;
        Ok(removed)
    }

    pub fn clear_completed(&mut self) -> Result<Vec<Todo>> {
        let removed = clear_completed::run(&mut self.todos);
        debug!(removed = removed.len(), "cleared completed todos");
        self.save()?;
        Ok(removed)
    }

    /// Drops the persisted blob and empties the collection.
    pub fn clear_all(&mut self) -> Result<()> {
        self.todos.clear();
        self.backend.remove(STORAGE_KEY)?;
        info!("all todos cleared");
        Ok(())
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Sets the filter from its name. Unknown names select [`Filter::All`].
    pub fn set_filter_str(&mut self, name: &str) {
        let filter = match name.parse::<Filter>() {
            Ok(filter) => filter,
            Err(_) => {
                warn!(filter = name, "unknown filter, showing all todos");
                Filter::All
            }
        };
        self.set_filter(filter);
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn filtered_view(&self) -> Vec<&Todo> {
        view::filtered(&self.todos, self.filter)
    }

    pub fn active_count(&self) -> usize {
        view::active_count(&self.todos)
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Replaces the collection with the persisted one.
    ///
    /// A missing blob, or one that does not parse as a list of todos, yields an
    /// empty collection. Later duplicates of an id are dropped.
    pub fn load(&mut self) -> Result<()> {
        let todos = match self.backend.get(STORAGE_KEY)? {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str::<Vec<Todo>>(&blob) {
                Ok(todos) => dedupe_ids(todos),
                Err(e) => {
                    warn!(error = %e, "persisted todos are unreadable, starting empty");
                    Vec::new()
                }
            },
        };

        let seed = match todos.iter().map(|t| t.id).max() {
            Some(max) => max.next(),
            None => Some(TodoId(1)),
        };
        self.next_id = match (self.next_id, seed) {
            (Some(current), Some(seed)) => Some(current.max(seed)),
            _ => None,
        };
        if self.next_id.is_none() {
            warn!("todo ids exhausted, new todos cannot be created");
        }
        self.todos = todos;
        info!(count = self.todos.len(), "todos loaded");
        Ok(())
    }

    /// Writes the full collection, regardless of the current filter.
    pub fn save(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.todos)?;
        self.backend.set(STORAGE_KEY, &blob)
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}

fn dedupe_ids(todos: Vec<Todo>) -> Vec<Todo> {
    let mut seen = HashSet::new();
    let before = todos.len();
    let unique: Vec<Todo> = todos.into_iter().filter(|t| seen.insert(t.id)).collect();
    if unique.len() != before {
        warn!(dropped = before - unique.len(), "dropped todos with duplicate ids");
    }
    unique
}

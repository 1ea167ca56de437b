use tokio::sync::Mutex;

use crate::modules::todos::core::errors::TodoError;
use crate::modules::todos::core::inputs::{CreateTodoInput, PatchTodoInput};
use crate::modules::todos::core::model::Todo;

/// Ordered in-memory collection of todos. Each operation takes the lock once
/// and runs its full read-modify-write under it, so concurrent handlers never
/// observe a half-applied mutation.
#[derive(Default)]
pub struct TodoStore {
    todos: Mutex<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store as constructed at service startup, with one seed record.
    pub fn seeded() -> Self {
        let seed = Todo::new(
            "Learn the todos API".into(),
            "Explore the endpoints listed at GET /".into(),
            false,
        );
        Self {
            todos: Mutex::new(vec![seed]),
        }
    }

    /// Returns the records in insertion order; with a filter, the subsequence
    /// whose `completed` flag matches.
    pub async fn list(&self, completed: Option<bool>) -> Vec<Todo> {
        let todos = self.todos.lock().await;
        match completed {
            None => todos.clone(),
            Some(wanted) => todos
                .iter()
                .filter(|t| t.completed == wanted)
                .cloned()
                .collect(),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Todo, TodoError> {
        let todos = self.todos.lock().await;
        todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    /// Validates, then appends a new record at the end of the sequence.
    pub async fn create(&self, input: CreateTodoInput) -> Result<Todo, TodoError> {
        let fields = input.validate()?;
        let todo = Todo::new(fields.title, fields.description, fields.completed);
        let mut todos = self.todos.lock().await;
        todos.push(todo.clone());
        Ok(todo)
    }

    /// Full update. Omitted `description`/`completed` reset to defaults; `id`
    /// and `created_at` are preserved.
    pub async fn replace(&self, id: &str, input: CreateTodoInput) -> Result<Todo, TodoError> {
        let mut todos = self.todos.lock().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        let fields = input.validate()?;
        todo.title = fields.title;
        todo.description = fields.description;
        todo.completed = fields.completed;
        todo.touch();
        Ok(todo.clone())
    }

    /// Partial update. Only fields present in the input are applied;
    /// `updated_at` is refreshed on every successful call, changed or not.
    pub async fn patch(&self, id: &str, input: PatchTodoInput) -> Result<Todo, TodoError> {
        let mut todos = self.todos.lock().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        if let Some(title) = input.validated_title()? {
            todo.title = title;
        }
        if let Some(description) = input.description {
            todo.description = description;
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        todo.touch();
        Ok(todo.clone())
    }

    /// Removes the record and returns its snapshot; order of the remaining
    /// records is preserved.
    pub async fn remove(&self, id: &str) -> Result<Todo, TodoError> {
        let mut todos = self.todos.lock().await;
        let index = todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        Ok(todos.remove(index))
    }
}

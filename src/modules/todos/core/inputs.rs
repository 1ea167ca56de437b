use serde::Deserialize;

use crate::modules::todos::core::errors::TodoError;

/// Body shape shared by create (POST) and replace (PUT). Replace applies the
/// same rule set: omitted `description`/`completed` reset to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Fields resolved against the create/replace rule set, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTodoFields {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl CreateTodoInput {
    pub fn validate(self) -> Result<ValidatedTodoFields, TodoError> {
        let title = match self.title {
            Some(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
            _ => return Err(TodoError::blank_title()),
        };
        Ok(ValidatedTodoFields {
            title,
            description: self.description.unwrap_or_default(),
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// Body shape for partial update (PATCH). Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl PatchTodoInput {
    /// A present title must still be non-blank after trimming. Description,
    /// when present, is taken verbatim.
    pub fn validated_title(&self) -> Result<Option<String>, TodoError> {
        match &self.title {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Err(TodoError::blank_title()),
            Some(raw) => Ok(Some(raw.trim().to_string())),
        }
    }
}

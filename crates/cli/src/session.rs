//! Interactive session state.
//!
//! Holds the selected action, the field values, and the outcome of the last
//! submission. Transitions:
//! - `select_action` clears the previous output and error
//! - `begin_submit` sets loading and clears output and error
//! - `finish` clears loading and records the output or the error

use inkwell_core::AppResult;
use inkwell_prompt::{ActionKind, FieldSet, PromptRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    action: ActionKind,
    fields: FieldSet,
    loading: bool,
    output: Option<String>,
    error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ActionKind::Outline, FieldSet::new())
    }
}

impl Session {
    pub fn new(action: ActionKind, fields: FieldSet) -> Self {
        Self {
            action,
            fields,
            loading: false,
            output: None,
            error: None,
        }
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch actions. Field values are kept so shared fields carry over.
    pub fn select_action(&mut self, action: ActionKind) {
        self.action = action;
        self.output = None;
        self.error = None;
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.set(name, value);
    }

    pub fn clear_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Fill every field with the sample inputs.
    pub fn load_sample(&mut self) {
        for (name, value) in FieldSet::sample().iter() {
            self.fields.set(name, value);
        }
    }

    /// The request the current state would submit.
    pub fn request(&self) -> PromptRequest {
        PromptRequest::new(self.action, self.fields.clone())
    }

    /// Start a submission.
    ///
    /// Returns `None` while a previous submission is still outstanding.
    pub fn begin_submit(&mut self) -> Option<PromptRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.output = None;
        self.error = None;
        Some(self.request())
    }

    /// Record the outcome of the outstanding submission.
    pub fn finish(&mut self, result: AppResult<String>) {
        self.loading = false;
        match result {
            Ok(text) => self.output = Some(text),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

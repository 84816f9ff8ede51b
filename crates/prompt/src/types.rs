//! Prompt types for Inkwell.
//!
//! This module defines the domain entities shared by the catalog and the builder.

use inkwell_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the six writing actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Outline,
    Draft,
    Enhance,
    Polish,
    Design,
    Title,
}

impl ActionKind {
    /// Every action, in catalog order.
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Outline,
        ActionKind::Draft,
        ActionKind::Enhance,
        ActionKind::Polish,
        ActionKind::Design,
        ActionKind::Title,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Draft => "draft",
            Self::Enhance => "enhance",
            Self::Polish => "polish",
            Self::Design => "design",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                AppError::InvalidAction(format!(
                    "'{}'. Expected one of: {}",
                    s,
                    Self::ALL.map(|a| a.as_str()).join(", ")
                ))
            })
    }
}

/// Named free-text values supplied for an action.
///
/// Keys are not validated; unknown keys are carried along and ignored by
/// the builder, missing ones fall back to placeholder text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(BTreeMap<String, String>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`FieldSet::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The value of `name` if present and non-empty.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a `name=value` assignment. Only the first `=` separates.
    pub fn parse_assignment(input: &str) -> AppResult<(String, String)> {
        let (name, value) = input.split_once('=').ok_or_else(|| {
            AppError::Config(format!("Expected NAME=VALUE, got '{}'", input))
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Config(format!(
                "Field name cannot be empty in '{}'",
                input
            )));
        }

        Ok((name.to_string(), value.to_string()))
    }

    /// Example inputs for every field except `tone`, which keeps its fallback.
    pub fn sample() -> Self {
        Self::new()
            .with("topic", "Sustainable living for beginners")
            .with("chapterNumber", "1")
            .with(
                "outlinePoint",
                "The \"Why\" of Sustainable Living: Understanding the Impact",
            )
            .with(
                "chapterText",
                "Sustainable living is more than just a trend; it's a conscious choice to \
                 minimize our environmental footprint. This chapter explores the fundamental \
                 reasons why this lifestyle is crucial for the planet and for our own \
                 well-being. We will look at climate change, resource depletion, and the \
                 personal benefits of a simpler, more mindful existence.",
            )
            .with("designTool", "Canva")
    }
}

/// An action paired with the fields supplied for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub action: ActionKind,
    pub fields: FieldSet,
}

impl PromptRequest {
    pub fn new(action: ActionKind, fields: FieldSet) -> Self {
        Self { action, fields }
    }
}

/// A fully rendered prompt ready for the completion client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltPrompt {
    /// Action the prompt was rendered for
    pub action: ActionKind,

    /// Prompt text sent to the provider
    pub text: String,

    /// Slot values after fallbacks were applied
    #[serde(rename = "resolvedFields")]
    pub resolved: FieldSet,

    /// Slots that were absent or empty and used their fallback
    #[serde(rename = "fallbacksUsed")]
    pub fallbacks: Vec<String>,
}

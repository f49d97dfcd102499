// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Guided commit message composition.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::config::{CmtConfig, CommitType};
use crate::error::{MessageError, Result};

use super::message::{suggest_scopes, CommitMessage};

/// Builds a commit message from prompts and any parts supplied up front.
pub struct CommitComposer {
    config: CmtConfig,
    commit_type: Option<CommitType>,
    scope: Option<String>,
    description: Option<String>,
    breaking: bool,
}

impl CommitComposer {
    pub fn new(config: CmtConfig) -> Self {
        Self {
            config,
            commit_type: None,
            scope: None,
            description: None,
            breaking: false,
        }
    }

    /// Pin the commit type from a string, rejecting unknown names.
    pub fn with_type_str(mut self, type_name: &str) -> Result<Self> {
        let commit_type = type_name
            .parse()
            .map_err(|_| MessageError::UnknownType {
                commit_type: type_name.to_string(),
            })?;
        self.commit_type = Some(commit_type);
        Ok(self)
    }

    /// Pin the scope. Blank input is ignored.
    pub fn with_scope(mut self, scope: &str) -> Self {
        let scope = scope.trim();
        if !scope.is_empty() {
            self.scope = Some(scope.to_string());
        }
        self
    }

    /// Pin the description. Blank input is ignored.
    pub fn with_description(mut self, description: &str) -> Self {
        let description = description.trim();
        if !description.is_empty() {
            self.description = Some(description.to_string());
        }
        self
    }

    /// Pin the breaking change flag.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Prompt for every part not supplied up front, then assemble.
    pub fn compose_interactive(&self) -> Result<CommitMessage> {
        let theme = ColorfulTheme::default();

        let commit_type = match self.commit_type {
            Some(commit_type) => commit_type,
            None => self.prompt_type(&theme)?,
        };

        let scope = match &self.scope {
            Some(scope) => Some(scope.clone()),
            None => self.prompt_scope(&theme)?,
        };

        let description = match &self.description {
            Some(description) => description.clone(),
            None => self.prompt_description(&theme)?,
        };

        let breaking = self.breaking
            || Confirm::with_theme(&theme)
                .with_prompt("Is this a breaking change?")
                .default(false)
                .interact()?;

        let mut message = CommitMessage::new(commit_type)
            .with_description(&description)
            .with_breaking(breaking);
        if let Some(ref scope) = scope {
            message = message.with_scope(scope);
        }
        Ok(message)
    }

    /// Assemble without prompting. Missing parts fall back to a chore
    /// type and the type's stock description.
    pub fn compose_non_interactive(&self) -> CommitMessage {
        let commit_type = self.commit_type.unwrap_or(CommitType::Chore);

        let mut message = CommitMessage::new(commit_type).with_breaking(self.breaking);
        if let Some(ref scope) = self.scope {
            message = message.with_scope(scope);
        }
        if let Some(ref description) = self.description {
            message = message.with_description(description);
        }
        message
    }

    fn prompt_type(&self, theme: &ColorfulTheme) -> Result<CommitType> {
        let types = CommitType::all();
        let items: Vec<String> = types
            .iter()
            .map(|t| format!("{:10} {}", t.as_str(), style(t.description()).dim()))
            .collect();

        let selection = Select::with_theme(theme)
            .with_prompt("Select commit type")
            .items(&items)
            .default(0)
            .interact()?;

        Ok(types[selection])
    }

    fn prompt_scope(&self, theme: &ColorfulTheme) -> Result<Option<String>> {
        let max_len = self.config.rules.max_scope_length;
        let hint = suggest_scopes(None).join(", ");

        let scope: String = Input::with_theme(theme)
            .with_prompt(format!("Scope (optional, e.g. {})", hint))
            .allow_empty(true)
            .validate_with(move |input: &String| {
                if input.chars().count() > max_len {
                    Err("Scope is too long")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let scope = scope.trim();
        Ok(if scope.is_empty() {
            None
        } else {
            Some(scope.to_string())
        })
    }

    fn prompt_description(&self, theme: &ColorfulTheme) -> Result<String> {
        let max_len = self.config.rules.max_description_length;

        let description: String = Input::with_theme(theme)
            .with_prompt(format!("Description (max {} chars)", max_len))
            .validate_with(move |input: &String| {
                if input.trim().is_empty() {
                    Err("Description is required")
                } else if input.chars().count() > max_len {
                    Err("Description is too long")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Ok(description.trim().to_string())
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message preview.

use console::{measure_text_width, style, Term};

use super::message::{default_description, CommitMessage};

/// Commit preview renderer.
pub struct CommitPreview<'a> {
    message: &'a CommitMessage,
}

impl<'a> CommitPreview<'a> {
    /// Create a new preview for a commit message.
    pub fn new(message: &'a CommitMessage) -> Self {
        Self { message }
    }

    /// Print the preview to stderr.
    pub fn print(&self) {
        let term = Term::stderr();
        let _ = self.render(&term);
    }

    /// Render the preview to a terminal.
    fn render(&self, term: &Term) -> std::io::Result<()> {
        term.write_line(&format!(
            "{}",
            style("┌─ Commit Preview ─────────────────────────────────────────────┐").dim()
        ))?;

        let header = self.format_header();
        term.write_line(&format!(
            "{} {}{}",
            style("│").dim(),
            header,
            self.padding(measure_text_width(&header))
        ))?;

        if self.message.breaking {
            term.write_line(&format!("{} {}", style("│").dim(), self.padding(0)))?;

            let marker = "BREAKING CHANGE:";
            term.write_line(&format!(
                "{} {}{}",
                style("│").dim(),
                style(marker).red(),
                self.padding(marker.len())
            ))?;
        }

        term.write_line(&format!(
            "{}",
            style("└──────────────────────────────────────────────────────────────┘").dim()
        ))?;

        Ok(())
    }

    /// Format the header with syntax highlighting.
    fn format_header(&self) -> String {
        let mut result = String::new();

        let type_name = self.message.commit_type.as_str();
        let type_style = match type_name {
            "feat" => style(type_name).green().bold(),
            "fix" => style(type_name).red().bold(),
            "docs" => style(type_name).blue().bold(),
            "style" => style(type_name).magenta().bold(),
            "refactor" => style(type_name).yellow().bold(),
            "perf" => style(type_name).cyan().bold(),
            _ => style(type_name).white().bold(),
        };
        result.push_str(&type_style.to_string());

        if let Some(ref scope) = self.message.scope {
            result.push_str(&format!("({})", style(scope).cyan()));
        }

        result.push_str(": ");

        if self.message.description.is_empty() {
            result.push_str(&default_description(
                self.message.commit_type,
                self.message.scope.as_deref(),
            ));
        } else {
            result.push_str(&self.message.description);
        }

        result
    }

    /// Create padding to align the right border.
    fn padding(&self, content_len: usize) -> String {
        let box_width: usize = 62;
        let padding_needed = box_width.saturating_sub(content_len + 2);
        format!("{}{}", " ".repeat(padding_needed), style("│").dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitType;

    #[test]
    fn test_format_header() {
        let message = CommitMessage::new(CommitType::Feat)
            .with_scope("core")
            .with_description("add feature");
        let preview = CommitPreview::new(&message);
        let header = preview.format_header();
        assert!(header.contains("feat"));
        assert!(header.contains("core"));
        assert!(header.contains("add feature"));
    }

    #[test]
    fn test_format_header_fills_default_description() {
        let message = CommitMessage::new(CommitType::Fix);
        let preview = CommitPreview::new(&message);
        assert!(preview
            .format_header()
            .contains("resolve component issue"));
    }
}

//! Command-line interface for inspecting edit logs
//!
//! Supports:
//! - Checking a saved log against the text currently on disk
//! - Reconciling a saved log with the current text, using the user's logger config
//! - Computing the edit action between two text files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::LoggerConfig;
use crate::history::{ActionLogger, EditAction, EditorId, LogItem};

/// Inspect and reconcile text edit logs
#[derive(Parser, Debug)]
#[command(name = "edit-log", version, about = "Inspect and reconcile text edit logs")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replay a log over its baseline and report any gap with the current text
    Check {
        /// Text the log was started from
        #[arg(long, value_name = "FILE")]
        before: PathBuf,
        /// JSON array of log items
        #[arg(long, value_name = "FILE")]
        log: PathBuf,
        /// Text as currently persisted
        #[arg(long, value_name = "FILE")]
        after: PathBuf,
        /// Editor identity to attribute the gap action to
        #[arg(long, value_name = "NAME", default_value = "")]
        editor: String,
    },
    /// Re-add a log's actions to a fresh logger and reconcile it with the current text
    Reconcile {
        /// Text the log was started from
        #[arg(long, value_name = "FILE")]
        before: PathBuf,
        /// JSON array of log items
        #[arg(long, value_name = "FILE")]
        log: PathBuf,
        /// Text as currently persisted
        #[arg(long, value_name = "FILE")]
        after: PathBuf,
        /// Editor identity to attribute the gap action to
        #[arg(long, value_name = "NAME", default_value = "")]
        editor: String,
    },
    /// Print the edit action turning one file into another
    Diff {
        original: PathBuf,
        modified: PathBuf,
        /// Editor identity to attribute the action to
        #[arg(long, value_name = "NAME", default_value = "")]
        editor: String,
    },
}

/// Outcome of a CLI command, printed as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Report {
    /// Texts already agree
    Consistent,
    /// A gap action (and its reversal) explains the difference
    Gap {
        gap: EditAction,
        reversal: EditAction,
    },
    /// The log after reconciliation, with the gap it absorbed (if any)
    Reconciled {
        gap: Option<EditAction>,
        log: Vec<LogItem>,
    },
}

impl Report {
    fn from_gap(gap: Option<EditAction>) -> Self {
        match gap {
            Some(gap) => {
                let reversal = ActionLogger::reverse_text_edit_action(&gap);
                Report::Gap { gap, reversal }
            }
            None => Report::Consistent,
        }
    }
}

impl Command {
    /// Run the command with the logger config from the user config dir
    pub fn execute(&self) -> Result<Report> {
        self.execute_with(&LoggerConfig::load())
    }

    /// Run the command, reading its input files
    pub fn execute_with(&self, config: &LoggerConfig) -> Result<Report> {
        match self {
            Command::Check {
                before,
                log,
                after,
                editor,
            } => {
                let before_text = read_text(before)?;
                let after_text = read_text(after)?;
                let log_items = read_log(log)?;
                tracing::debug!(items = log_items.len(), "loaded edit log");

                let gap = ActionLogger::check_text_edit_action_log_integrity(
                    &before_text,
                    &log_items,
                    &after_text,
                    EditorId::new(editor.as_str()),
                )
                .with_context(|| format!("Failed to replay log {}", log.display()))?;
                Ok(Report::from_gap(gap))
            }
            Command::Reconcile {
                before,
                log,
                after,
                editor,
            } => {
                let mut logger = ActionLogger::with_config(config);
                logger.clear(read_text(before)?);
                for item in read_log(log)? {
                    logger.add(item.text_edit_action)?;
                }
                tracing::debug!(
                    items = logger.len(),
                    coalesce = config.coalesce,
                    "rebuilt edit log"
                );

                let gap = logger
                    .reconcile(&read_text(after)?, EditorId::new(editor.as_str()))
                    .with_context(|| format!("Failed to replay log {}", log.display()))?;
                Ok(Report::Reconciled {
                    gap,
                    log: logger.log_items().to_vec(),
                })
            }
            Command::Diff {
                original,
                modified,
                editor,
            } => {
                let gap = ActionLogger::get_text_edit_action_by_modified_text(
                    &read_text(original)?,
                    &read_text(modified)?,
                    EditorId::new(editor.as_str()),
                );
                Ok(Report::from_gap(gap))
            }
        }
    }
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_log(path: &Path) -> Result<Vec<LogItem>> {
    let content = read_text(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse edit log {}", path.display()))
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.helpdesk/config.toml` and includes:
//! - `workspace`: Optional path to store the database in a different location
//! - `author`: Optional default author for comments added with `hd comment`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const WORK_DIR_NAME: &str = ".helpdesk";
const CONFIG_FILE_NAME: &str = "config.toml";
pub const DB_FILE_NAME: &str = "tickets.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.helpdesk/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Optional directory for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    /// Default author for human comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Config {
    /// Loads configuration from the given `.helpdesk/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.helpdesk/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the `.helpdesk` directory by walking up from `start`.
pub fn find_work_dir_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Find the `.helpdesk` directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    find_work_dir_from(&std::env::current_dir()?)
}

/// Get the database path from config.
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.workspace {
        Some(workspace) => {
            let workspace_path = Path::new(workspace);
            if workspace_path.is_absolute() {
                workspace_path.join(DB_FILE_NAME)
            } else {
                // Relative to the project root
                work_dir
                    .parent()
                    .unwrap_or(work_dir)
                    .join(workspace)
                    .join(DB_FILE_NAME)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new `.helpdesk` directory at `path`.
///
/// When `workspace` is given it must already exist; the database will live there.
pub fn init_work_dir(path: &Path, workspace: Option<&str>) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    if let Some(ws) = workspace {
        let ws_path = Path::new(ws);
        let resolved = if ws_path.is_absolute() {
            ws_path.to_path_buf()
        } else {
            path.join(ws)
        };
        if !resolved.is_dir() {
            return Err(Error::WorkspaceNotFound(ws.to_string()));
        }
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config {
        workspace: workspace.map(String::from),
        author: None,
    };
    config.save(&work_dir)?;

    Ok(work_dir)
}

/// Write a `.gitignore` to the work directory so the database stays untracked.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let content = format!(
        "# Ticket database\n{DB_FILE_NAME}\n{DB_FILE_NAME}-wal\n{DB_FILE_NAME}-shm\n"
    );
    fs::write(work_dir.join(GITIGNORE_FILE_NAME), content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use hd_core::Database;

use crate::config::{get_db_path, init_work_dir, write_gitignore, Config};
use crate::error::Result;

pub fn run(path: Option<String>, workspace: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path, workspace.as_deref())?;

    println!("Initialized ticket tracker at {}", work_dir.display());
    if let Some(ws) = workspace {
        println!("Workspace: {ws}");
    }
    Ok(())
}

/// Create the work dir, its config and an empty, migrated database.
pub(crate) fn run_impl(target_path: &Path, workspace: Option<&str>) -> Result<PathBuf> {
    let work_dir = init_work_dir(target_path, workspace)?;
    write_gitignore(&work_dir)?;

    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    Database::open(&db_path)?;
    tracing::info!(path = %db_path.display(), "initialized database");

    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

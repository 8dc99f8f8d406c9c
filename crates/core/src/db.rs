// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for ticket storage.
//!
//! The [`Database`] struct provides all data access operations for tickets
//! and comments. It knows nothing about lifecycle rules; the service layer
//! decides what to write and wraps each unit of work in [`Database::begin_write`].

use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::path::Path;

use crate::clock::format_timestamp;
use crate::error::{Error, Result};
use crate::filter::TicketFilter;
use crate::ticket::{Comment, Priority, Status, Ticket};

/// Bumped whenever [`SCHEMA`] changes shape.
pub const SCHEMA_VERSION: i64 = 1;

/// SQL schema for the ticket tracker database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tickets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    priority TEXT NOT NULL DEFAULT 'medium'
        CHECK (priority IN ('low', 'medium', 'high')),
    requester TEXT NOT NULL,
    email TEXT,
    status TEXT NOT NULL DEFAULT 'new'
        CHECK (status IN ('new', 'in_progress', 'resolved', 'closed')),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    CHECK (updated_at >= created_at)
);

-- Comments are owned by their ticket
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ticket_id INTEGER NOT NULL,
    author TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (ticket_id) REFERENCES tickets(id) ON DELETE CASCADE
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_tickets_status ON tickets(status);
CREATE INDEX IF NOT EXISTS idx_tickets_created ON tickets(created_at DESC);
CREATE INDEX IF NOT EXISTS idx_comments_ticket ON comments(ticket_id, created_at);
"#;

const TICKET_COLUMNS: &str =
    "t.id, t.title, t.description, t.priority, t.requester, t.email, t.status, t.created_at, t.updated_at";

const COMMENT_COLUMNS: &str = "id, ticket_id, author, content, created_at";

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn ticket_from_row(row: &Row<'_>) -> std::result::Result<Ticket, rusqlite::Error> {
    let priority_str: String = row.get(3)?;
    let status_str: String = row.get(6)?;
    let created_str: String = row.get(7)?;
    let updated_str: String = row.get(8)?;
    Ok(Ticket {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        priority: parse_db(&priority_str, "priority")?,
        requester: row.get(4)?,
        email: row.get(5)?,
        status: parse_db(&status_str, "status")?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

fn comment_from_row(row: &Row<'_>) -> std::result::Result<Comment, rusqlite::Error> {
    let created_str: String = row.get(4)?;
    Ok(Comment {
        id: row.get(0)?,
        ticket_id: row.get(1)?,
        author: row.get(2)?,
        content: row.get(3)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

/// Unwrap corrupted-data errors raised inside row mappers.
fn map_row_error(e: rusqlite::Error) -> Error {
    match e {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => {
            match inner.downcast::<Error>() {
                Ok(err) => *err,
                Err(other) => Error::CorruptedData(other.to_string()),
            }
        }
        other => Error::Database(other),
    }
}

/// Run schema creation and all migrations on a database connection.
///
/// Idempotent: safe to run on every open.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version < SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))?;
    }
    Ok(())
}

/// Register `casefold(text)`, a Unicode lowercase used by the free-text filter.
///
/// SQLite's own `LIKE` and `lower()` only fold ASCII letters.
pub fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "casefold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )?;
    Ok(())
}

/// SQLite database connection with ticket tracker operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        register_functions(&conn)?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        register_functions(&conn)?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Start a write transaction.
    ///
    /// The transaction is `IMMEDIATE`: the database write lock is held from
    /// the first read, so read-check-write sequences from other connections
    /// serialize behind it. Dropping the returned guard without calling
    /// `commit` rolls every write back.
    pub fn begin_write(&self) -> Result<Transaction<'_>> {
        Ok(Transaction::new_unchecked(
            &self.conn,
            TransactionBehavior::Immediate,
        )?)
    }

    /// Start a read transaction.
    ///
    /// The snapshot is taken at the first read and held until the guard is
    /// dropped, so several queries agree with each other even while another
    /// connection writes.
    pub fn begin_read(&self) -> Result<Transaction<'_>> {
        Ok(Transaction::new_unchecked(
            &self.conn,
            TransactionBehavior::Deferred,
        )?)
    }

    /// Insert a ticket and return its new id.
    pub fn insert_ticket(&self, ticket: &Ticket) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO tickets (title, description, priority, requester, email,
             status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                ticket.title,
                ticket.description,
                ticket.priority.as_str(),
                ticket.requester,
                ticket.email,
                ticket.status.as_str(),
                format_timestamp(ticket.created_at),
                format_timestamp(ticket.updated_at),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a ticket by ID.
    pub fn get_ticket(&self, id: i64) -> Result<Ticket> {
        let ticket = self
            .conn
            .query_row(
                &format!("SELECT {TICKET_COLUMNS} FROM tickets t WHERE t.id = ?1"),
                params![id],
                ticket_from_row,
            )
            .optional()
            .map_err(map_row_error)?;

        ticket.ok_or(Error::TicketNotFound(id))
    }

    /// Check if a ticket exists.
    pub fn ticket_exists(&self, id: i64) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM tickets WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// List tickets matching `filter`, newest first, each with its comment count.
    pub fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<(Ticket, usize)>> {
        let predicate = filter.predicate();
        let mut sql = format!(
            "SELECT {TICKET_COLUMNS},
                    (SELECT COUNT(*) FROM comments c WHERE c.ticket_id = t.id)
             FROM tickets t{}
             ORDER BY t.created_at DESC, t.id DESC",
            predicate.where_clause()
        );

        let mut params = predicate.params;
        if let Some(limit) = filter.limit {
            sql.push_str(" LIMIT ?");
            params.push(Value::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let tickets = stmt
            .query_map(params_from_iter(params), |row| {
                let ticket = ticket_from_row(row)?;
                let count: i64 = row.get(9)?;
                Ok((ticket, usize::try_from(count).unwrap_or(0)))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(map_row_error)?;

        Ok(tickets)
    }

    /// Count tickets matching `filter` (the limit is ignored).
    pub fn count_tickets(&self, filter: &TicketFilter) -> Result<usize> {
        let predicate = filter.predicate();
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM tickets t{}", predicate.where_clause()),
            params_from_iter(predicate.params),
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Count tickets matching `filter` per status value present.
    pub fn count_by_status(&self, filter: &TicketFilter) -> Result<Vec<(Status, usize)>> {
        self.count_grouped("status", filter)?
            .into_iter()
            .map(|(value, count)| {
                value
                    .parse::<Status>()
                    .map(|status| (status, count))
                    .map_err(|_| Error::CorruptedData(format!("invalid status '{value}'")))
            })
            .collect()
    }

    /// Count tickets matching `filter` per priority value present.
    pub fn count_by_priority(&self, filter: &TicketFilter) -> Result<Vec<(Priority, usize)>> {
        self.count_grouped("priority", filter)?
            .into_iter()
            .map(|(value, count)| {
                value
                    .parse::<Priority>()
                    .map(|priority| (priority, count))
                    .map_err(|_| Error::CorruptedData(format!("invalid priority '{value}'")))
            })
            .collect()
    }

    fn count_grouped(&self, column: &str, filter: &TicketFilter) -> Result<Vec<(String, usize)>> {
        let predicate = filter.predicate();
        let sql = format!(
            "SELECT t.{column}, COUNT(*) FROM tickets t{} GROUP BY t.{column}",
            predicate.where_clause()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(predicate.params), |row| {
                let value: String = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((value, usize::try_from(count).unwrap_or(0)))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Set a ticket's status, provided it still has the status `expected`.
    ///
    /// Fails with [`Error::StatusConflict`] if another writer changed the
    /// status since it was read.
    pub fn update_ticket_status(
        &self,
        id: i64,
        expected: Status,
        status: Status,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE tickets SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4",
            params![
                status.as_str(),
                format_timestamp(updated_at),
                id,
                expected.as_str()
            ],
        )?;

        if affected == 0 {
            if self.ticket_exists(id)? {
                return Err(Error::StatusConflict { id, expected });
            }
            return Err(Error::TicketNotFound(id));
        }
        Ok(())
    }

    /// Write a ticket's editable fields and `updated_at`. Status is not touched.
    pub fn update_ticket_fields(&self, ticket: &Ticket) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE tickets SET title = ?1, description = ?2, priority = ?3,
             requester = ?4, email = ?5, updated_at = ?6
             WHERE id = ?7",
            params![
                ticket.title,
                ticket.description,
                ticket.priority.as_str(),
                ticket.requester,
                ticket.email,
                format_timestamp(ticket.updated_at),
                ticket.id,
            ],
        )?;

        if affected == 0 {
            return Err(Error::TicketNotFound(ticket.id));
        }
        Ok(())
    }

    /// Delete a ticket and its comments. Returns the number of comments removed.
    ///
    /// Comments are deleted explicitly before the ticket so ownership holds
    /// even on connections where foreign key enforcement is off. Run inside
    /// [`Database::begin_write`] to make the pair atomic.
    pub fn delete_ticket(&self, id: i64) -> Result<usize> {
        let comments = self
            .conn
            .execute("DELETE FROM comments WHERE ticket_id = ?1", params![id])?;
        let affected = self
            .conn
            .execute("DELETE FROM tickets WHERE id = ?1", params![id])?;

        if affected == 0 {
            return Err(Error::TicketNotFound(id));
        }
        Ok(comments)
    }

    /// Insert a comment and return its new id.
    pub fn insert_comment(&self, comment: &Comment) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO comments (ticket_id, author, content, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                comment.ticket_id,
                comment.author,
                comment.content,
                format_timestamp(comment.created_at),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a comment by ID.
    pub fn get_comment(&self, id: i64) -> Result<Comment> {
        let comment = self
            .conn
            .query_row(
                &format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?1"),
                params![id],
                comment_from_row,
            )
            .optional()
            .map_err(map_row_error)?;

        comment.ok_or(Error::CommentNotFound(id))
    }

    /// Get all comments for a ticket in chronological order.
    pub fn get_comments(&self, ticket_id: i64) -> Result<Vec<Comment>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE ticket_id = ?1
             ORDER BY created_at, id"
        ))?;

        let comments = stmt
            .query_map(params![ticket_id], comment_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(map_row_error)?;

        Ok(comments)
    }

    /// Get comments across all tickets, optionally restricted to one, in chronological order.
    pub fn list_comments(&self, ticket_id: Option<i64>) -> Result<Vec<Comment>> {
        match ticket_id {
            Some(id) => self.get_comments(id),
            None => {
                let mut stmt = self.conn.prepare(&format!(
                    "SELECT {COMMENT_COLUMNS} FROM comments ORDER BY created_at, id"
                ))?;
                let comments = stmt
                    .query_map([], comment_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(map_row_error)?;
                Ok(comments)
            }
        }
    }

    /// Count comments on a ticket.
    pub fn count_comments(&self, ticket_id: i64) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM comments WHERE ticket_id = ?1",
            params![ticket_id],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;

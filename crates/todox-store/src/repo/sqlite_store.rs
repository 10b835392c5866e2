//! SQLite implementation of the list store
//!
//! Lists and todos are rows in two tables; counts come from a grouped left
//! join, so a list with no todos still appears with zero counts. Every
//! statement is logged with its bound parameters before it runs, including
//! the `BEGIN`/`COMMIT` around a list delete.

#![allow(clippy::result_large_err)]

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row, Transaction, TransactionBehavior};
use todox_core::errors::StoreResult;
use todox_core::model::{ListId, ListSummary, Todo, TodoId};
use todox_core::ListStore;
use todox_core_types::schema::{EVENT_QUERY, SQL_TARGET};

const LIST_WITH_COUNTS: &str = "SELECT lists.id, lists.name,
       count(todos.id) AS todos_count,
       count(NULLIF(todos.completed, 1)) AS remaining_todos_count
  FROM lists
  LEFT OUTER JOIN todos ON lists.id = todos.list_id";

/// SQLite-backed store
///
/// Owns one connection for the lifetime of a request. Dropping the store
/// closes the connection; `disconnect` does the same but reports errors.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap an already migrated connection
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the database at `url`, configure it and apply pending migrations
    pub fn open(url: &str) -> Result<Self> {
        let mut conn = db::open_url(url)?;
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    /// Fresh in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error from the driver
    pub fn disconnect(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| from_rusqlite(err))
    }
}

/// Log a statement and its parameters
fn log_statement(sql: &str, params: &[Value]) {
    tracing::info!(
        target: SQL_TARGET,
        event = EVENT_QUERY,
        sql = sql,
        params = ?params,
    );
}

/// Run a statement that returns no rows
fn execute(conn: &Connection, sql: &str, params: &[Value]) -> Result<usize> {
    log_statement(sql, params);
    conn.execute(sql, params_from_iter(params.iter()))
        .map_err(from_rusqlite)
}

/// Run a query and map every row
fn query<T, F>(conn: &Connection, sql: &str, params: &[Value], map: F) -> Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    log_statement(sql, params);
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params_from_iter(params.iter()), map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Open a logged transaction; dropping it uncommitted rolls back
fn begin(conn: &mut Connection) -> Result<Transaction<'_>> {
    log_statement("BEGIN DEFERRED", &[]);
    conn.transaction_with_behavior(TransactionBehavior::Deferred)
        .map_err(from_rusqlite)
}

fn commit(tx: Transaction<'_>) -> Result<()> {
    log_statement("COMMIT", &[]);
    tx.commit().map_err(from_rusqlite)
}

fn count(row: &Row<'_>, idx: usize) -> rusqlite::Result<usize> {
    let n: i64 = row.get(idx)?;
    Ok(usize::try_from(n).unwrap_or_default())
}

fn row_to_summary(row: &Row<'_>) -> rusqlite::Result<ListSummary> {
    Ok(ListSummary {
        id: row.get(0)?,
        name: row.get(1)?,
        todos_count: count(row, 2)?,
        remaining_todos_count: count(row, 3)?,
    })
}

fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        name: row.get(1)?,
        completed: row.get(2)?,
        list_id: row.get(3)?,
    })
}

impl ListStore for SqliteStore {
    fn all_lists(&self) -> StoreResult<Vec<ListSummary>> {
        let sql = format!("{LIST_WITH_COUNTS}\n GROUP BY lists.id\n ORDER BY lists.name");
        query(&self.conn, &sql, &[], row_to_summary)
    }

    fn find_list(&self, id: ListId) -> StoreResult<Option<ListSummary>> {
        let sql = format!("{LIST_WITH_COUNTS}\n WHERE lists.id = ?1\n GROUP BY lists.id");
        let mut rows = query(&self.conn, &sql, &[Value::from(id)], row_to_summary)?;
        Ok(rows.pop())
    }

    fn create_list(&mut self, name: &str) -> StoreResult<()> {
        execute(
            &self.conn,
            "INSERT INTO lists (name) VALUES (?1)",
            &[Value::from(name.to_string())],
        )?;
        Ok(())
    }

    fn update_list_name(&mut self, id: ListId, new_name: &str) -> StoreResult<()> {
        execute(
            &self.conn,
            "UPDATE lists SET name = ?1 WHERE id = ?2",
            &[Value::from(new_name.to_string()), Value::from(id)],
        )?;
        Ok(())
    }

    fn delete_list(&mut self, id: ListId) -> StoreResult<()> {
        let tx = begin(&mut self.conn)?;
        // Todos first: todos.list_id references lists.id
        execute(&tx, "DELETE FROM todos WHERE list_id = ?1", &[Value::from(id)])?;
        execute(&tx, "DELETE FROM lists WHERE id = ?1", &[Value::from(id)])?;
        commit(tx)
    }

    fn create_todo(&mut self, list_id: ListId, name: &str) -> StoreResult<()> {
        // Selecting the list row makes an unknown list_id insert nothing
        execute(
            &self.conn,
            "INSERT INTO todos (name, list_id) SELECT ?1, id FROM lists WHERE id = ?2",
            &[Value::from(name.to_string()), Value::from(list_id)],
        )?;
        Ok(())
    }

    fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> StoreResult<()> {
        execute(
            &self.conn,
            "DELETE FROM todos WHERE id = ?1 AND list_id = ?2",
            &[Value::from(todo_id), Value::from(list_id)],
        )?;
        Ok(())
    }

    fn set_todo_status(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> StoreResult<()> {
        execute(
            &self.conn,
            "UPDATE todos SET completed = ?1 WHERE id = ?2 AND list_id = ?3",
            &[
                Value::from(completed),
                Value::from(todo_id),
                Value::from(list_id),
            ],
        )?;
        Ok(())
    }

    fn complete_todos(&mut self, list_id: ListId) -> StoreResult<()> {
        execute(
            &self.conn,
            "UPDATE todos SET completed = 1 WHERE list_id = ?1",
            &[Value::from(list_id)],
        )?;
        Ok(())
    }

    fn find_todos(&self, list_id: ListId) -> StoreResult<Vec<Todo>> {
        query(
            &self.conn,
            "SELECT id, name, completed, list_id FROM todos WHERE list_id = ?1 ORDER BY id",
            &[Value::from(list_id)],
            row_to_todo,
        )
    }
}

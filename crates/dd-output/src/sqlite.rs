//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! four tables: `elevator_snapshots`, `request_log`, `rejections` and
//! `metrics_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputResult, RejectionRow, RequestLogRow, SummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and recreate the schema.
    ///
    /// Tables left by an earlier run in the same directory are dropped.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             DROP TABLE IF EXISTS elevator_snapshots;
             DROP TABLE IF EXISTS request_log;
             DROP TABLE IF EXISTS rejections;
             DROP TABLE IF EXISTS metrics_summary;
             CREATE TABLE elevator_snapshots (
                 tick        INTEGER NOT NULL,
                 elevator_id INTEGER NOT NULL,
                 floor       INTEGER NOT NULL,
                 status      TEXT    NOT NULL,
                 onboard     INTEGER NOT NULL,
                 next_stops  TEXT    NOT NULL,
                 PRIMARY KEY (tick, elevator_id)
             );
             CREATE TABLE request_log (
                 request_id       INTEGER PRIMARY KEY,
                 elevator_id      INTEGER NOT NULL,
                 source           INTEGER NOT NULL,
                 dest             INTEGER NOT NULL,
                 call_tick        INTEGER NOT NULL,
                 pickup_tick      INTEGER NOT NULL,
                 dropoff_tick     INTEGER NOT NULL,
                 wait             INTEGER NOT NULL,
                 travel           INTEGER NOT NULL,
                 total            INTEGER NOT NULL,
                 estimated_wait   INTEGER NOT NULL,
                 estimated_travel INTEGER NOT NULL
             );
             CREATE TABLE rejections (
                 request_id INTEGER NOT NULL,
                 time       INTEGER NOT NULL,
                 source     INTEGER NOT NULL,
                 dest       INTEGER NOT NULL,
                 reason     TEXT    NOT NULL
             );
             CREATE TABLE metrics_summary (
                 metric TEXT PRIMARY KEY,
                 count  INTEGER NOT NULL,
                 min    INTEGER NOT NULL,
                 max    INTEGER NOT NULL,
                 mean   REAL    NOT NULL,
                 median REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO elevator_snapshots \
                 (tick, elevator_id, floor, status, onboard, next_stops) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.elevator_id,
                    row.floor,
                    row.status,
                    row.onboard,
                    row.next_stops,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_requests(&mut self, rows: &[RequestLogRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO request_log \
                 (request_id, elevator_id, source, dest, call_tick, pickup_tick, dropoff_tick, \
                  wait, travel, total, estimated_wait, estimated_travel) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.request_id,
                    row.elevator_id,
                    row.source,
                    row.dest,
                    row.call_tick as i64,
                    row.pickup_tick as i64,
                    row.dropoff_tick as i64,
                    row.wait as i64,
                    row.travel as i64,
                    row.total as i64,
                    row.estimated_wait as i64,
                    row.estimated_travel as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_rejections(&mut self, rows: &[RejectionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO rejections (request_id, time, source, dest, reason) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.request_id,
                    row.time,
                    row.source,
                    row.dest,
                    row.reason,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.conn.execute(
                "INSERT OR REPLACE INTO metrics_summary (metric, count, min, max, mean, median) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    row.metric,
                    row.count as i64,
                    row.min as i64,
                    row.max as i64,
                    row.mean,
                    row.median,
                ],
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};
use tracing::debug;

use super::{baseline_key, split_baseline_key, History, HistorySession, HistoryStore, MAX_SCAN_RECORDS};
use crate::error::StoreError;
use crate::models::{BaselineEntry, ScanRecord};

/// Advisory lock id shared by every scan writing to this schema.
const SCAN_LOCK_ID: i64 = 0x6f75_7462_7261_6b;

/// History kept in Postgres under the `outbreak_radar` schema.
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create or upgrade the schema.
    pub async fn init_db(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Most recent scans, newest first.
    pub async fn recent_scans(&self, limit: i64) -> Result<Vec<ScanRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, scanned_at, signal_count, hotspot_count \
             FROM outbreak_radar.scans ORDER BY scanned_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(scan_from_row).collect())
    }
}

struct PgSession {
    tx: Transaction<'static, Postgres>,
    history: History,
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn begin<'a>(&'a self) -> Result<Box<dyn HistorySession + 'a>, StoreError> {
        let mut tx = self.pool.begin().await?;

        // held until commit or rollback
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCAN_LOCK_ID)
            .execute(&mut *tx)
            .await?;

        let mut history = History::default();

        let baseline_rows = sqlx::query(
            "SELECT iso_code, disease, average_weekly, sample_count FROM outbreak_radar.baselines",
        )
        .fetch_all(&mut *tx)
        .await?;
        for row in baseline_rows {
            let iso_code: String = row.get("iso_code");
            let disease: String = row.get("disease");
            let sample_count: i32 = row.get("sample_count");
            history.baselines.insert(
                baseline_key(&iso_code, &disease),
                BaselineEntry {
                    average_weekly: row.get("average_weekly"),
                    sample_count: u32::try_from(sample_count).unwrap_or(0),
                },
            );
        }

        let scan_rows = sqlx::query(
            "SELECT id, scanned_at, signal_count, hotspot_count \
             FROM outbreak_radar.scans ORDER BY scanned_at ASC",
        )
        .fetch_all(&mut *tx)
        .await?;
        history.scans = scan_rows.iter().map(scan_from_row).collect();

        debug!(
            baselines = history.baselines.len(),
            scans = history.scans.len(),
            "Loaded history from Postgres"
        );

        Ok(Box::new(PgSession { tx, history }))
    }
}

#[async_trait]
impl HistorySession for PgSession {
    fn history(&mut self) -> &mut History {
        &mut self.history
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let PgSession { mut tx, history } = *self;

        for (key, entry) in &history.baselines {
            let (iso_code, disease) = split_baseline_key(key)?;
            sqlx::query(
                r#"
                INSERT INTO outbreak_radar.baselines (iso_code, disease, average_weekly, sample_count)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (iso_code, disease) DO UPDATE
                SET average_weekly = EXCLUDED.average_weekly,
                    sample_count = EXCLUDED.sample_count,
                    updated_at = now()
                "#,
            )
            .bind(iso_code)
            .bind(disease)
            .bind(entry.average_weekly)
            .bind(i32::try_from(entry.sample_count).unwrap_or(i32::MAX))
            .execute(&mut *tx)
            .await?;
        }

        // scan ids are unique, so re-inserting the retained log is a no-op for old rows
        for scan in &history.scans {
            sqlx::query(
                r#"
                INSERT INTO outbreak_radar.scans (id, scanned_at, signal_count, hotspot_count)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(scan.id)
            .bind(scan.timestamp)
            .bind(scan.signal_count as i64)
            .bind(scan.hotspot_count as i64)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            r#"
            DELETE FROM outbreak_radar.scans
            WHERE id NOT IN (
                SELECT id FROM outbreak_radar.scans ORDER BY scanned_at DESC LIMIT $1
            )
            "#,
        )
        .bind(MAX_SCAN_RECORDS as i64)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}

fn scan_from_row(row: &sqlx::postgres::PgRow) -> ScanRecord {
    let signal_count: i64 = row.get("signal_count");
    let hotspot_count: i64 = row.get("hotspot_count");
    ScanRecord {
        id: row.get("id"),
        timestamp: row.get("scanned_at"),
        signal_count: usize::try_from(signal_count).unwrap_or(0),
        hotspot_count: usize::try_from(hotspot_count).unwrap_or(0),
    }
}

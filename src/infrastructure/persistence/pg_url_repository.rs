//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl, UrlStatus};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str =
    "id, original_url, short_code, created_at, click_count, last_clicked_at, status";

/// Row mapping for the `short_urls` table.
///
/// `status` travels as TEXT and is parsed into [`UrlStatus`]; the CHECK
/// constraint on the column keeps unknown values out of the table.
#[derive(sqlx::FromRow)]
struct ShortUrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    click_count: i64,
    last_clicked_at: Option<DateTime<Utc>>,
    status: String,
}

impl TryFrom<ShortUrlRow> for ShortUrl {
    type Error = AppError;

    fn try_from(row: ShortUrlRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<UrlStatus>().map_err(|e| {
            AppError::internal(
                "Invalid status value in database",
                serde_json::json!({ "reason": e }),
            )
        })?;

        Ok(ShortUrl {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            created_at: row.created_at,
            click_count: row.click_count,
            last_clicked_at: row.last_clicked_at,
            status,
        })
    }
}

/// PostgreSQL repository for short URL storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Mutations
/// are single `UPDATE ... RETURNING` statements so concurrent requests on
/// the same code serialize at the row level instead of racing through a
/// read-modify-write cycle.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let sql = format!(
            "INSERT INTO short_urls (original_url, short_code) VALUES ($1, $2) RETURNING {}",
            RECORD_COLUMNS
        );

        let row = sqlx::query_as::<_, ShortUrlRow>(&sql)
            .bind(&new_url.original_url)
            .bind(&new_url.short_code)
            .fetch_one(self.pool.as_ref())
            .await?;

        row.try_into()
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!(
            "SELECT {} FROM short_urls WHERE short_code = $1",
            RECORD_COLUMNS
        );

        let row = sqlx::query_as::<_, ShortUrlRow>(&sql)
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(ShortUrl::try_from).transpose()
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!(
            "SELECT {} FROM short_urls WHERE original_url = $1",
            RECORD_COLUMNS
        );

        let row = sqlx::query_as::<_, ShortUrlRow>(&sql)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(ShortUrl::try_from).transpose()
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!(
            "UPDATE short_urls \
             SET click_count = click_count + 1, last_clicked_at = NOW() \
             WHERE short_code = $1 RETURNING {}",
            RECORD_COLUMNS
        );

        let row = sqlx::query_as::<_, ShortUrlRow>(&sql)
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(ShortUrl::try_from).transpose()
    }

    async fn update_status(
        &self,
        short_code: &str,
        status: UrlStatus,
    ) -> Result<Option<ShortUrl>, AppError> {
        let sql = format!(
            "UPDATE short_urls SET status = $2 WHERE short_code = $1 RETURNING {}",
            RECORD_COLUMNS
        );

        let row = sqlx::query_as::<_, ShortUrlRow>(&sql)
            .bind(short_code)
            .bind(status.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(ShortUrl::try_from).transpose()
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

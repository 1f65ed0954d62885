//! PostgreSQL implementation of ConfessionRepository

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use confession_core::entities::{Confession, NewConfession, ReactionKind};
use confession_core::traits::{
    ConfessionPage, ConfessionQuery, ConfessionRepository, RepoResult, SortOrder,
};
use confession_core::value_objects::{Snowflake, SnowflakeGenerator};

use crate::mappers::{reaction_column, ConfessionInsert};
use crate::models::ConfessionModel;

use super::error::map_db_error;

const COLUMNS: &str =
    "id, message, love, funny, sad, fire, angry, total_reactions, ip_hash, created_at";

/// PostgreSQL implementation of ConfessionRepository
#[derive(Clone)]
pub struct PgConfessionRepository {
    pool: PgPool,
    ids: Arc<SnowflakeGenerator>,
}

impl PgConfessionRepository {
    pub fn new(pool: PgPool, ids: Arc<SnowflakeGenerator>) -> Self {
        Self { pool, ids }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_ordered(&self, order_by: &str, skip: i64, limit: i64) -> RepoResult<Vec<Confession>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM confessions ORDER BY {order_by} LIMIT $1 OFFSET $2"
        );

        let rows = sqlx::query_as::<_, ConfessionModel>(&sql)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Confession::from).collect())
    }
}

#[async_trait]
impl ConfessionRepository for PgConfessionRepository {
    #[instrument(skip(self, new), fields(len = new.message.chars().count()))]
    async fn insert(&self, new: NewConfession) -> RepoResult<Confession> {
        let confession = Confession::new(self.ids.generate(), new.message, new.ip_hash);
        let values = ConfessionInsert::new(&confession);

        let sql = format!(
            r#"
            INSERT INTO confessions (id, message, ip_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ConfessionModel>(&sql)
            .bind(values.id)
            .bind(values.message)
            .bind(values.ip_hash)
            .bind(confession.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Confession::from(row))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: ConfessionQuery) -> RepoResult<ConfessionPage> {
        let limit = query.limit.max(0);
        let skip = query.skip.max(0);
        let total = self.count().await?;

        let page = match query.sort {
            SortOrder::New => {
                let items = self
                    .fetch_ordered("created_at DESC, id DESC", skip, limit)
                    .await?;
                ConfessionPage::paged(items, skip, total)
            }
            SortOrder::Trending => {
                let items = self
                    .fetch_ordered("total_reactions DESC, created_at DESC, id DESC", skip, limit)
                    .await?;
                ConfessionPage::paged(items, skip, total)
            }
            SortOrder::Random => {
                let sql = format!("SELECT {COLUMNS} FROM confessions ORDER BY random() LIMIT $1");
                let rows = sqlx::query_as::<_, ConfessionModel>(&sql)
                    .bind(limit)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(map_db_error)?;
                ConfessionPage::sampled(rows.into_iter().map(Confession::from).collect(), total)
            }
        };

        Ok(page)
    }

    #[instrument(skip(self))]
    async fn increment_reaction(
        &self,
        id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<Option<Confession>> {
        let column = reaction_column(kind);

        // SET expressions read the pre-update row, so the total is the old sum plus one
        let sql = format!(
            r#"
            UPDATE confessions
            SET {column} = {column} + 1,
                total_reactions = love + funny + sad + fire + angry + 1
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ConfessionModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Confession::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Confession>> {
        let sql = format!("SELECT {COLUMNS} FROM confessions WHERE id = $1");

        let row = sqlx::query_as::<_, ConfessionModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Confession::from))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM confessions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

//! Postgres-backed record stores.
//!
//! One table per entity, `id BIGSERIAL PRIMARY KEY`, one column per field.
//! The generic [`PgRecordStore`] builds its SQL from the per-entity
//! [`PgRecord`] column metadata.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPool, PgRow};
use sqlx::query::Query;
use sqlx::{Postgres, Row};

use gauchorecords_core::{Entity, RecordId};
use gauchorecords_domain::{
    Article, HelpRequest, RecommendationRequest, UcsbDate, UcsbDiningCommonsMenuItem,
};

use crate::{RecordStore, StoreError};

/// Column metadata and row mapping for an entity's table.
pub trait PgRecord: Entity {
    const TABLE: &'static str;

    /// Non-id columns, in bind order.
    const COLUMNS: &'static [&'static str];

    /// `CREATE TABLE IF NOT EXISTS` statement for [`ensure_schema`].
    const SCHEMA_SQL: &'static str;

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error>;

    /// Bind the non-id column values in `COLUMNS` order.
    fn bind_values<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments>;
}

/// Create every entity table that does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StoreError> {
    for sql in [
        Article::SCHEMA_SQL,
        HelpRequest::SCHEMA_SQL,
        RecommendationRequest::SCHEMA_SQL,
        UcsbDiningCommonsMenuItem::SCHEMA_SQL,
        UcsbDate::SCHEMA_SQL,
    ] {
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::debug!("record tables ensured");
    Ok(())
}

/// Generic Postgres store for one entity type.
pub struct PgRecordStore<E> {
    pool: PgPool,
    _entity: PhantomData<E>,
}

impl<E> PgRecordStore<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

fn select_sql<E: PgRecord>() -> String {
    format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
}

fn insert_sql<E: PgRecord>() -> String {
    let placeholders: Vec<String> = (1..=E::COLUMNS.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

fn upsert_sql<E: PgRecord>() -> String {
    // id binds first, columns after.
    let placeholders: Vec<String> = (2..=E::COLUMNS.len() + 1).map(|i| format!("${i}")).collect();
    let assignments: Vec<String> = E::COLUMNS
        .iter()
        .map(|c| format!("{c} = EXCLUDED.{c}"))
        .collect();
    format!(
        "INSERT INTO {} (id, {}) VALUES ($1, {}) ON CONFLICT (id) DO UPDATE SET {}",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders.join(", "),
        assignments.join(", ")
    )
}

#[async_trait]
impl<E: PgRecord> RecordStore<E> for PgRecordStore<E> {
    async fn save(&self, mut record: E) -> Result<E, StoreError> {
        match record.id() {
            None => {
                let sql = insert_sql::<E>();
                let row = record.bind_values(sqlx::query(&sql)).fetch_one(&self.pool).await?;
                record.set_id(RecordId::new(row.try_get::<i64, _>("id")?));
            }
            Some(id) => {
                let sql = upsert_sql::<E>();
                record
                    .bind_values(sqlx::query(&sql).bind(id.as_i64()))
                    .execute(&self.pool)
                    .await?;
            }
        }
        Ok(record)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<E>, StoreError> {
        let sql = format!("{} WHERE id = $1", select_sql::<E>());
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(E::from_row).transpose().map_err(Into::into)
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        let sql = format!("{} ORDER BY id", select_sql::<E>());
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(E::from_row).collect::<Result<_, _>>().map_err(Into::into)
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        sqlx::query(&sql).bind(id.as_i64()).execute(&self.pool).await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: RecordId) -> Result<bool, StoreError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", E::TABLE);
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id.as_i64())
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}

fn record_id(row: &PgRow) -> Result<Option<RecordId>, sqlx::Error> {
    Ok(Some(RecordId::new(row.try_get::<i64, _>("id")?)))
}

impl PgRecord for Article {
    const TABLE: &'static str = "articles";
    const COLUMNS: &'static [&'static str] = &["title", "url", "explanation", "email", "date_added"];
    const SCHEMA_SQL: &'static str = "CREATE TABLE IF NOT EXISTS articles (\
         id BIGSERIAL PRIMARY KEY, \
         title TEXT NOT NULL, \
         url TEXT NOT NULL, \
         explanation TEXT NOT NULL, \
         email TEXT NOT NULL, \
         date_added TIMESTAMP NOT NULL)";

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: record_id(row)?,
            title: row.try_get("title")?,
            url: row.try_get("url")?,
            explanation: row.try_get("explanation")?,
            email: row.try_get("email")?,
            date_added: row.try_get("date_added")?,
        })
    }

    fn bind_values<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(self.title.clone())
            .bind(self.url.clone())
            .bind(self.explanation.clone())
            .bind(self.email.clone())
            .bind(self.date_added)
    }
}

impl PgRecord for HelpRequest {
    const TABLE: &'static str = "help_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "team_id",
        "table_or_breakout_room",
        "request_time",
        "explanation",
        "solved",
    ];
    const SCHEMA_SQL: &'static str = "CREATE TABLE IF NOT EXISTS help_requests (\
         id BIGSERIAL PRIMARY KEY, \
         requester_email TEXT NOT NULL, \
         team_id TEXT NOT NULL, \
         table_or_breakout_room TEXT NOT NULL, \
         request_time TIMESTAMP NOT NULL, \
         explanation TEXT NOT NULL, \
         solved BOOLEAN NOT NULL)";

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: record_id(row)?,
            requester_email: row.try_get("requester_email")?,
            team_id: row.try_get("team_id")?,
            table_or_breakout_room: row.try_get("table_or_breakout_room")?,
            request_time: row.try_get("request_time")?,
            explanation: row.try_get("explanation")?,
            solved: row.try_get("solved")?,
        })
    }

    fn bind_values<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(self.requester_email.clone())
            .bind(self.team_id.clone())
            .bind(self.table_or_breakout_room.clone())
            .bind(self.request_time)
            .bind(self.explanation.clone())
            .bind(self.solved)
    }
}

impl PgRecord for RecommendationRequest {
    const TABLE: &'static str = "recommendation_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "professor_email",
        "explanation",
        "date_requested",
        "date_needed",
        "done",
    ];
    const SCHEMA_SQL: &'static str = "CREATE TABLE IF NOT EXISTS recommendation_requests (\
         id BIGSERIAL PRIMARY KEY, \
         requester_email TEXT NOT NULL, \
         professor_email TEXT NOT NULL, \
         explanation TEXT NOT NULL, \
         date_requested TIMESTAMP NOT NULL, \
         date_needed TIMESTAMP NOT NULL, \
         done BOOLEAN NOT NULL)";

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: record_id(row)?,
            requester_email: row.try_get("requester_email")?,
            professor_email: row.try_get("professor_email")?,
            explanation: row.try_get("explanation")?,
            date_requested: row.try_get("date_requested")?,
            date_needed: row.try_get("date_needed")?,
            done: row.try_get("done")?,
        })
    }

    fn bind_values<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(self.requester_email.clone())
            .bind(self.professor_email.clone())
            .bind(self.explanation.clone())
            .bind(self.date_requested)
            .bind(self.date_needed)
            .bind(self.done)
    }
}

impl PgRecord for UcsbDiningCommonsMenuItem {
    const TABLE: &'static str = "ucsb_dining_commons_menu_items";
    const COLUMNS: &'static [&'static str] = &["name", "dining_commons_code", "station"];
    const SCHEMA_SQL: &'static str = "CREATE TABLE IF NOT EXISTS ucsb_dining_commons_menu_items (\
         id BIGSERIAL PRIMARY KEY, \
         name TEXT NOT NULL, \
         dining_commons_code TEXT NOT NULL, \
         station TEXT NOT NULL)";

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: record_id(row)?,
            name: row.try_get("name")?,
            dining_commons_code: row.try_get("dining_commons_code")?,
            station: row.try_get("station")?,
        })
    }

    fn bind_values<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(self.name.clone())
            .bind(self.dining_commons_code.clone())
            .bind(self.station.clone())
    }
}

impl PgRecord for UcsbDate {
    const TABLE: &'static str = "ucsb_dates";
    const COLUMNS: &'static [&'static str] = &["quarter_yyyyq", "name", "local_date_time"];
    const SCHEMA_SQL: &'static str = "CREATE TABLE IF NOT EXISTS ucsb_dates (\
         id BIGSERIAL PRIMARY KEY, \
         quarter_yyyyq TEXT NOT NULL, \
         name TEXT NOT NULL, \
         local_date_time TIMESTAMP NOT NULL)";

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: record_id(row)?,
            quarter_yyyyq: row.try_get("quarter_yyyyq")?,
            name: row.try_get("name")?,
            local_date_time: row.try_get("local_date_time")?,
        })
    }

    fn bind_values<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        query
            .bind(self.quarter_yyyyq.clone())
            .bind(self.name.clone())
            .bind(self.local_date_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_sql_shape() {
        assert_eq!(
            insert_sql::<UcsbDiningCommonsMenuItem>(),
            "INSERT INTO ucsb_dining_commons_menu_items (name, dining_commons_code, station) \
             VALUES ($1, $2, $3) RETURNING id"
        );
    }

    #[test]
    fn upsert_sql_shape() {
        assert_eq!(
            upsert_sql::<UcsbDate>(),
            "INSERT INTO ucsb_dates (id, quarter_yyyyq, name, local_date_time) \
             VALUES ($1, $2, $3, $4) ON CONFLICT (id) DO UPDATE SET \
             quarter_yyyyq = EXCLUDED.quarter_yyyyq, name = EXCLUDED.name, \
             local_date_time = EXCLUDED.local_date_time"
        );
    }

    #[test]
    fn select_sql_shape() {
        assert_eq!(
            select_sql::<Article>(),
            "SELECT id, title, url, explanation, email, date_added FROM articles"
        );
    }
}

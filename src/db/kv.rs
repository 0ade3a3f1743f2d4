//! JSON key-value store over a single SQLite table.
//!
//! Keys are opaque strings namespaced by prefix (`news-`, `video-`, ...).
//! Writes are last-write-wins; there is no versioning.

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// Key of the singleton site-content record.
pub const SITE_CONTENT_KEY: &str = "site-content";

/// Key-value adapter used for site content and the media collections.
#[derive(Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch and decode the value stored under `key`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let raw: String = row.get("value");
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => Ok(None),
        }
    }

    /// Store `value` under `key`, replacing whatever was there.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(&raw)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Remove `key`. Removing an absent key is not an error.
    pub async fn del(&self, key: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// All values whose key starts with `prefix`, in key order.
    pub async fn get_by_prefix<T: DeserializeOwned>(
        &self,
        prefix: &str,
    ) -> Result<Vec<T>, AppError> {
        let rows = sqlx::query(
            "SELECT value FROM kv_store WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key",
        )
        .bind(prefix)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                let raw: String = row.get("value");
                serde_json::from_str(&raw).map_err(AppError::from)
            })
            .collect()
    }
}

/// Generate a record key: `<prefix><unix millis>-<8 hex chars>`.
///
/// The millisecond part keeps keys in creation order; the random tail keeps two
/// records created in the same millisecond apart.
pub fn new_record_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}-{}", prefix, millis, &random[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use tempfile::TempDir;

    async fn store() -> (KvStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let pool = init_database(&dir.path().join("kv.sqlite")).await.unwrap();
        (KvStore::new(pool), dir)
    }

    #[test]
    fn test_record_ids_are_unique_and_prefixed() {
        let ids: HashSet<String> = (0..1000).map(|_| new_record_id("news-")).collect();
        assert_eq!(ids.len(), 1000);
        for id in &ids {
            let rest = id.strip_prefix("news-").unwrap();
            let (millis, tail) = rest.split_once('-').unwrap();
            assert!(millis.parse::<i64>().is_ok());
            assert_eq!(tail.len(), 8);
        }
    }

    #[tokio::test]
    async fn test_set_get_overwrite() {
        let (kv, _dir) = store().await;

        assert!(kv.get::<Value>("site-content").await.unwrap().is_none());

        kv.set("site-content", &json!({ "a": 1 })).await.unwrap();
        kv.set("site-content", &json!({ "b": 2 })).await.unwrap();

        let stored: Value = kv.get("site-content").await.unwrap().unwrap();
        assert_eq!(stored, json!({ "b": 2 }));
    }

    #[tokio::test]
    async fn test_prefix_scan_is_namespaced() {
        let (kv, _dir) = store().await;

        kv.set("news-1", &json!("n1")).await.unwrap();
        kv.set("news-2", &json!("n2")).await.unwrap();
        kv.set("video-1", &json!("v1")).await.unwrap();
        kv.set("newsletter", &json!("x")).await.unwrap();

        let news: Vec<String> = kv.get_by_prefix("news-").await.unwrap();
        assert_eq!(news, vec!["n1", "n2"]);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let (kv, _dir) = store().await;

        kv.set("article-1", &json!(1)).await.unwrap();
        kv.del("article-1").await.unwrap();
        kv.del("article-1").await.unwrap();

        assert!(kv.get::<Value>("article-1").await.unwrap().is_none());
    }
}

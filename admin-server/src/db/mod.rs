use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::SqlitePool;

pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    // Resolve the file path and ensure the parent directory exists.
    // Handles both "sqlite:./foo.db" and "sqlite:/abs/foo.db" forms.
    let file_path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);

    let abs_path = std::env::current_dir()?.join(file_path);
    if let Some(parent) = abs_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let pool = sqlx::SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(&abs_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal),
    )
    .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// Read a stored JSON document from `ui_documents`.
pub async fn load_document<T: serde::de::DeserializeOwned>(
    pool: &SqlitePool,
    name: &str,
) -> Result<Option<T>, sqlx::Error> {
    let row: Option<(String,)> = sqlx::query_as("SELECT body FROM ui_documents WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(row.and_then(|(body,)| serde_json::from_str(&body).ok()))
}

pub async fn save_document<T: serde::Serialize>(
    pool: &SqlitePool,
    name: &str,
    document: &T,
) -> Result<(), sqlx::Error> {
    let body = serde_json::to_string(document).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
    sqlx::query(
        "INSERT INTO ui_documents (name, body, updated_at) VALUES (?, ?, ?)
         ON CONFLICT(name) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
    )
    .bind(name)
    .bind(body)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_document(pool: &SqlitePool, name: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM ui_documents WHERE name = ?")
        .bind(name)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_creates_file_in_wal_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("admin.db");
        let pool = connect(&format!("sqlite:{}", path.display())).await.unwrap();

        assert!(path.exists());
        let (mode,): (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn documents_round_trip_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let pool = connect(&format!("sqlite:{}", dir.path().join("docs.db").display()))
            .await
            .unwrap();

        assert_eq!(load_document::<Vec<i32>>(&pool, "missing").await.unwrap(), None);
        save_document(&pool, "numbers", &vec![1, 2]).await.unwrap();
        save_document(&pool, "numbers", &vec![3]).await.unwrap();
        assert_eq!(
            load_document::<Vec<i32>>(&pool, "numbers").await.unwrap(),
            Some(vec![3])
        );
        delete_document(&pool, "numbers").await.unwrap();
        assert_eq!(load_document::<Vec<i32>>(&pool, "numbers").await.unwrap(), None);
    }
}

//! SQLite-backed fragment store with embedding nearest-neighbor queries.
//!
//! Fragments are embedded on insert and stored with their vector as a
//! little-endian f32 BLOB. Similarity queries load candidate vectors and
//! rank by cosine similarity in process; at this service's scale a linear
//! scan beats maintaining an ANN index.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use lectern_core::{EmbeddingBackend, Error, Result};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS fragments (
    id          TEXT PRIMARY KEY,
    content     TEXT NOT NULL,
    kind        TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    embedding   BLOB NOT NULL
)
"#;

/// A stored lecture fragment.
#[derive(Debug, Clone)]
pub struct StoredFragment {
    pub id: Uuid,
    pub content: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// A fragment paired with its similarity to a query.
#[derive(Debug, Clone)]
pub struct ScoredFragment {
    pub fragment: StoredFragment,
    pub score: f32,
}

/// Embedding-indexed fragment store.
pub struct FragmentStore {
    pool: SqlitePool,
    embedder: Arc<dyn EmbeddingBackend>,
}

impl FragmentStore {
    /// Open (or create) the store at the given file path.
    pub async fn open(path: &str, embedder: Arc<dyn EmbeddingBackend>) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite://{path}"))
            .map_err(|e| Error::Context(format!("Invalid database path '{path}': {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool, embedder })
    }

    /// Open an in-memory store. One connection only: each SQLite in-memory
    /// connection is its own database.
    pub async fn open_in_memory(embedder: Arc<dyn EmbeddingBackend>) -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| Error::Context(e.to_string()))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool, embedder })
    }

    /// Embed `content` and append it to the index under `kind`.
    pub async fn index(&self, content: &str, kind: &str) -> Result<Uuid> {
        let vectors = self.embedder.embed_texts(&[content.to_string()]).await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| Error::Embedding("Backend returned no vector".to_string()))?;

        let id = Uuid::new_v4();
        let created_at = Utc::now();

        sqlx::query(
            "INSERT INTO fragments (id, content, kind, created_at, embedding) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(content)
        .bind(kind)
        .bind(created_at.to_rfc3339())
        .bind(vec_to_blob(&vector))
        .execute(&self.pool)
        .await?;

        debug!(fragment_id = %id, kind, "fragment indexed");
        Ok(id)
    }

    /// Return up to `k` fragments ranked by cosine similarity to `text`,
    /// highest first. An empty store yields an empty result.
    pub async fn query_nearest(&self, text: &str, k: i64) -> Result<Vec<ScoredFragment>> {
        if k <= 0 {
            return Ok(Vec::new());
        }

        let vectors = self.embedder.embed_texts(&[text.to_string()]).await?;
        let query_vec = vectors
            .into_iter()
            .next()
            .ok_or_else(|| Error::Embedding("Backend returned no vector".to_string()))?;

        let rows = sqlx::query("SELECT id, content, kind, created_at, embedding FROM fragments")
            .fetch_all(&self.pool)
            .await?;

        let mut scored: Vec<ScoredFragment> = rows
            .iter()
            .map(|row| {
                let id: String = row.get("id");
                let created_at: String = row.get("created_at");
                let blob: Vec<u8> = row.get("embedding");

                let fragment = StoredFragment {
                    id: Uuid::parse_str(&id)
                        .map_err(|e| Error::Context(format!("Corrupt fragment id '{id}': {e}")))?,
                    content: row.get("content"),
                    kind: row.get("kind"),
                    created_at: DateTime::parse_from_rfc3339(&created_at)
                        .map_err(|e| Error::Context(format!("Corrupt timestamp: {e}")))?
                        .with_timezone(&Utc),
                };

                Ok(ScoredFragment {
                    score: cosine_similarity(&query_vec, &blob_to_vec(&blob)),
                    fragment,
                })
            })
            .collect::<Result<_>>()?;

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k as usize);

        debug!(result_count = scored.len(), "nearest-neighbor query");
        Ok(scored)
    }
}

/// Encode a vector as little-endian f32 bytes for BLOB storage.
pub fn vec_to_blob(vec: &[f32]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(vec.len() * 4);
    for value in vec {
        blob.extend_from_slice(&value.to_le_bytes());
    }
    blob
}

/// Decode a BLOB back into a vector. Reverses [`vec_to_blob`].
pub fn blob_to_vec(blob: &[u8]) -> Vec<f32> {
    blob.chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Cosine similarity between two vectors. Zero when either vector is empty,
/// zero-length, or the dimensions disagree.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_roundtrip() {
        let v = vec![1.0f32, -0.5, 0.25, 1e-6];
        assert_eq!(blob_to_vec(&vec_to_blob(&v)), v);
    }

    #[test]
    fn test_blob_roundtrip_empty() {
        assert!(blob_to_vec(&vec_to_blob(&[])).is_empty());
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.3f32, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0f32, 0.0];
        let b = vec![0.0f32, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = vec![1.0f32, 0.0];
        let b = vec![-1.0f32, 0.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_dimension_mismatch_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}

//! PostgreSQL implementation of DecisionRepository.
//!
//! The free-form context map is stored as JSONB.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::decision::{Decision, DecisionCategory, DecisionContext, DecisionStatus};
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::DecisionRepository;

const DECISION_COLUMNS: &str =
    "id, user_id, title, description, category, context, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresDecisionRepository {
    pool: PgPool,
}

impl PostgresDecisionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DecisionRepository for PostgresDecisionRepository {
    async fn save(&self, decision: &Decision) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO decisions (
                id, user_id, title, description, category, context, status,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(decision.id().as_uuid())
        .bind(decision.user_id().as_uuid())
        .bind(decision.title())
        .bind(decision.description())
        .bind(decision.category().as_str())
        .bind(context_to_json(decision.context())?)
        .bind(decision.status().as_str())
        .bind(decision.created_at().as_datetime())
        .bind(decision.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert decision", e))?;

        Ok(())
    }

    async fn update(&self, decision: &Decision) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE decisions SET
                title = $2,
                description = $3,
                category = $4,
                context = $5,
                status = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(decision.id().as_uuid())
        .bind(decision.title())
        .bind(decision.description())
        .bind(decision.category().as_str())
        .bind(context_to_json(decision.context())?)
        .bind(decision.status().as_str())
        .bind(decision.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update decision", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DecisionNotFound,
                format!("Decision not found: {}", decision.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM decisions WHERE id = $1",
            DECISION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch decision", e))?;

        row.map(row_to_decision).transpose()
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Decision>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM decisions WHERE user_id = $1 \
             ORDER BY updated_at DESC OFFSET $2 LIMIT $3",
            DECISION_COLUMNS
        ))
        .bind(user_id.as_uuid())
        .bind(i64::from(skip))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch decisions by user", e))?;

        rows.into_iter().map(row_to_decision).collect()
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM decisions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete decision", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DecisionNotFound,
                format!("Decision not found: {}", id),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn context_to_json(context: &DecisionContext) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(context).map_err(|e| DomainError::database("Failed to encode context", e))
}

fn row_to_decision(row: sqlx::postgres::PgRow) -> Result<Decision, DomainError> {
    let get_err = |col: &str, e: sqlx::Error| DomainError::database(&format!("Failed to get {}", col), e);

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let user_id: uuid::Uuid = row.try_get("user_id").map_err(|e| get_err("user_id", e))?;
    let title: String = row.try_get("title").map_err(|e| get_err("title", e))?;
    let description: Option<String> =
        row.try_get("description").map_err(|e| get_err("description", e))?;

    let category_str: String = row.try_get("category").map_err(|e| get_err("category", e))?;
    let category: DecisionCategory = category_str
        .parse()
        .map_err(|e| DomainError::database("Invalid decision category", e))?;

    let context_json: serde_json::Value =
        row.try_get("context").map_err(|e| get_err("context", e))?;
    let context: DecisionContext = serde_json::from_value(context_json)
        .map_err(|e| DomainError::database("Invalid decision context", e))?;

    let status_str: String = row.try_get("status").map_err(|e| get_err("status", e))?;
    let status: DecisionStatus = status_str
        .parse()
        .map_err(|e| DomainError::database("Invalid decision status", e))?;

    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(|e| get_err("created_at", e))?;
    let updated_at: chrono::DateTime<chrono::Utc> =
        row.try_get("updated_at").map_err(|e| get_err("updated_at", e))?;

    Ok(Decision::reconstitute(
        DecisionId::from_uuid(id),
        UserId::from_uuid(user_id),
        title,
        description,
        category,
        context,
        status,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

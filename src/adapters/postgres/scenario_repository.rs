//! PostgreSQL implementation of ScenarioRepository.
//!
//! Timeline, outcomes and risks are stored as JSONB columns. A replace is
//! one transaction: delete the old set, insert the new one.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::foundation::{DecisionId, DomainError, ScenarioId, Timestamp};
use crate::domain::scenario::{Outcomes, RiskFactor, Scenario, TimelineEntry};
use crate::ports::ScenarioRepository;

#[derive(Clone)]
pub struct PostgresScenarioRepository {
    pool: PgPool,
}

impl PostgresScenarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScenarioRepository for PostgresScenarioRepository {
    async fn replace_for_decision(
        &self,
        decision_id: &DecisionId,
        scenarios: &[Scenario],
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        sqlx::query("DELETE FROM scenarios WHERE decision_id = $1")
            .bind(decision_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to clear scenarios", e))?;

        for scenario in scenarios {
            insert_scenario(&mut tx, scenario).await?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(())
    }

    async fn find_by_decision(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<Scenario>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, decision_id, title, description, probability, timeline_data,
                   outcomes, risks, recommendations, rank, created_at
            FROM scenarios
            WHERE decision_id = $1
            ORDER BY rank ASC
            "#,
        )
        .bind(decision_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch scenarios", e))?;

        rows.into_iter().map(row_to_scenario).collect()
    }

    async fn delete_for_decision(&self, decision_id: &DecisionId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM scenarios WHERE decision_id = $1")
            .bind(decision_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete scenarios", e))?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

async fn insert_scenario(
    tx: &mut Transaction<'_, Postgres>,
    scenario: &Scenario,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO scenarios (
            id, decision_id, title, description, probability, timeline_data,
            outcomes, risks, recommendations, rank, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(scenario.id().as_uuid())
    .bind(scenario.decision_id().as_uuid())
    .bind(scenario.title())
    .bind(scenario.description())
    .bind(scenario.probability())
    .bind(to_json(scenario.timeline(), "timeline")?)
    .bind(to_json(scenario.outcomes(), "outcomes")?)
    .bind(to_json(scenario.risks(), "risks")?)
    .bind(scenario.recommendations())
    .bind(scenario.rank() as i32)
    .bind(scenario.created_at().as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(|e| DomainError::database("Failed to insert scenario", e))?;

    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(
    value: &T,
    what: &str,
) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value)
        .map_err(|e| DomainError::database(&format!("Failed to encode {}", what), e))
}

fn from_json<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
    what: &str,
) -> Result<T, DomainError> {
    serde_json::from_value(value)
        .map_err(|e| DomainError::database(&format!("Invalid stored {}", what), e))
}

fn row_to_scenario(row: sqlx::postgres::PgRow) -> Result<Scenario, DomainError> {
    let get_err = |col: &str, e: sqlx::Error| DomainError::database(&format!("Failed to get {}", col), e);

    let id: uuid::Uuid = row.try_get("id").map_err(|e| get_err("id", e))?;
    let decision_id: uuid::Uuid =
        row.try_get("decision_id").map_err(|e| get_err("decision_id", e))?;
    let title: String = row.try_get("title").map_err(|e| get_err("title", e))?;
    let description: String =
        row.try_get("description").map_err(|e| get_err("description", e))?;
    let probability: f64 = row.try_get("probability").map_err(|e| get_err("probability", e))?;
    let timeline: Vec<TimelineEntry> = from_json(
        row.try_get("timeline_data").map_err(|e| get_err("timeline_data", e))?,
        "timeline",
    )?;
    let outcomes: Outcomes = from_json(
        row.try_get("outcomes").map_err(|e| get_err("outcomes", e))?,
        "outcomes",
    )?;
    let risks: Vec<RiskFactor> =
        from_json(row.try_get("risks").map_err(|e| get_err("risks", e))?, "risks")?;
    let recommendations: String = row
        .try_get("recommendations")
        .map_err(|e| get_err("recommendations", e))?;
    let rank: i32 = row.try_get("rank").map_err(|e| get_err("rank", e))?;
    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(|e| get_err("created_at", e))?;

    Ok(Scenario::reconstitute(
        ScenarioId::from_uuid(id),
        DecisionId::from_uuid(decision_id),
        title,
        description,
        probability,
        timeline,
        outcomes,
        risks,
        recommendations,
        rank.max(0) as u32,
        Timestamp::from_datetime(created_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::{Impact, Severity};
    use std::collections::BTreeMap;

    #[test]
    fn outcomes_json_uses_year_keys() {
        let outcomes = Outcomes {
            financial: BTreeMap::from([(1, 60_000), (3, 78_000)]),
            satisfaction: Some(7.0),
            time_investment_hours: Some(450),
        };

        let json = to_json(&outcomes, "outcomes").unwrap();
        assert_eq!(json["financial"]["3"], 78_000);

        let back: Outcomes = from_json(json, "outcomes").unwrap();
        assert_eq!(back, outcomes);
    }

    #[test]
    fn stored_timeline_and_risks_decode() {
        let timeline: Vec<TimelineEntry> = from_json(
            serde_json::json!([{"period": "Year 1", "event": "Start", "impact": "neutral"}]),
            "timeline",
        )
        .unwrap();
        assert_eq!(timeline[0].impact, Impact::Neutral);

        let risks: Vec<RiskFactor> = from_json(
            serde_json::json!([{"factor": "Market", "severity": "high", "mitigation": "Save"}]),
            "risks",
        )
        .unwrap();
        assert_eq!(risks[0].severity, Severity::High);
    }

    #[test]
    fn malformed_json_is_a_database_error() {
        let result: Result<Vec<RiskFactor>, _> = from_json(serde_json::json!({"x": 1}), "risks");
        assert!(result.is_err());
    }
}

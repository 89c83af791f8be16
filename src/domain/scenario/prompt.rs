//! Prompt builder for scenario generation.
//!
//! Renders a decision and the requested run shape into the instruction sent
//! to the external model. Pure string formatting; bounds are enforced by
//! `SimulationRequest`.

use crate::domain::decision::Decision;

use super::SimulationRequest;

/// System message framing the model as a decision analyst.
pub const SCENARIO_SYSTEM_PROMPT: &str = "You are an expert decision analyst and futurist who helps people visualize potential outcomes of their decisions. Generate realistic, data-driven scenarios with specific metrics and timelines.";

const NO_CONTEXT: &str = "No additional context provided";

/// Shape the model is asked to follow, one object per scenario.
pub const EXAMPLE_SCHEMA: &str = r#"{
  "title": "Scenario title",
  "probability": 0.75,
  "description": "What happens in this scenario",
  "timeline": [
    {"period": "Month 3", "event": "First milestone", "impact": "positive"},
    {"period": "Year 1", "event": "Major milestone", "impact": "neutral"}
  ],
  "outcomes": {
    "financial": {"year_1": 50000, "year_3": 75000, "year_5": 100000},
    "satisfaction": 7.5,
    "time_investment_hours": 500
  },
  "risks": [
    {"factor": "Risk description", "severity": "medium", "mitigation": "How to mitigate"}
  ],
  "recommendations": "Key recommendations for this path"
}"#;

/// Builds the user prompt for one simulation run.
pub fn build_scenario_prompt(decision: &Decision, request: &SimulationRequest) -> String {
    let count = request.num_scenarios();
    let horizon = request.time_horizon_years();

    let context = if decision.context().is_empty() {
        NO_CONTEXT.to_string()
    } else {
        decision
            .context()
            .iter()
            .map(|(key, value)| format!("- {}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "I need help analyzing a {category} decision. Please generate {count} distinct future scenarios over a {horizon}-year timeline.

Decision: {title}
Description: {description}

Context:
{context}

For each scenario, provide:
1. A descriptive title
2. Probability estimate (0-100%)
3. Detailed description of what happens
4. Timeline with key milestones (at least 3-5 milestones)
5. Quantitative outcomes (financial impact, satisfaction score 1-10, time investment)
6. Risk factors (at least 2-3 risks with severity: low/medium/high)
7. Recommendations

Format each scenario as JSON with this structure:
{schema}

Generate {count} diverse scenarios ranging from optimistic to conservative to challenging.
",
        category = decision.category(),
        count = count,
        horizon = horizon,
        title = decision.title(),
        description = decision.description().unwrap_or(""),
        context = context,
        schema = EXAMPLE_SCHEMA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::{ContextValue, DecisionCategory, DecisionContext};
    use crate::domain::foundation::{DecisionId, UserId};

    fn decision(context: DecisionContext) -> Decision {
        Decision::new(
            DecisionId::new(),
            UserId::new(),
            "Open a bakery".to_string(),
            Some("Quit my job to open a neighbourhood bakery".to_string()),
            DecisionCategory::Business,
            context,
        )
        .unwrap()
    }

    #[test]
    fn includes_decision_fields_and_run_shape() {
        let prompt = build_scenario_prompt(
            &decision(DecisionContext::new()),
            &SimulationRequest::new(4, 7).unwrap(),
        );

        assert!(prompt.contains("analyzing a business decision"));
        assert!(prompt.contains("generate 4 distinct future scenarios over a 7-year timeline"));
        assert!(prompt.contains("Decision: Open a bakery"));
        assert!(prompt.contains("Description: Quit my job to open a neighbourhood bakery"));
        assert!(prompt.contains("Generate 4 diverse scenarios"));
    }

    #[test]
    fn renders_context_as_bullets() {
        let ctx = DecisionContext::new()
            .with("savings", ContextValue::Integer(40000))
            .with("city", ContextValue::Text("Lyon".into()));
        let prompt = build_scenario_prompt(&decision(ctx), &SimulationRequest::default());

        assert!(prompt.contains("- city: Lyon"));
        assert!(prompt.contains("- savings: 40000"));
        assert!(!prompt.contains(NO_CONTEXT));
    }

    #[test]
    fn empty_context_gets_placeholder() {
        let prompt = build_scenario_prompt(&decision(DecisionContext::new()), &SimulationRequest::default());
        assert!(prompt.contains(NO_CONTEXT));
    }

    #[test]
    fn embeds_example_schema_with_single_braces() {
        let prompt = build_scenario_prompt(&decision(DecisionContext::new()), &SimulationRequest::default());
        assert!(prompt.contains("\"time_investment_hours\": 500"));
        assert!(prompt.contains("{\"period\": \"Month 3\""));
        assert!(!prompt.contains("{{"));
    }
}

//! Response parser for free-text model replies.
//!
//! The model is asked for one JSON object per scenario but nothing enforces
//! that. Candidate objects are located by pattern, decoded one by one, and
//! converted leniently into `ScenarioDraft`s. Candidates that do not decode,
//! or that carry neither a title nor a description, are dropped without
//! comment; an empty result is the caller's cue to fall back to the mock
//! generator.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::{
    FinancialProjection, Impact, Outcomes, RiskFactor, ScenarioDraft, Severity, TimelineEntry,
};

/// Upper bound on scenarios taken from a single reply.
pub const MAX_PARSED_SCENARIOS: usize = 5;

const UNTITLED: &str = "Untitled Scenario";
const DEFAULT_PROBABILITY: f64 = 0.5;

/// Brace-balanced object, allowing one level of nested braces.
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}").expect("JSON object pattern is valid")
});

/// Extracts up to five decodable JSON objects, in order of appearance.
pub fn extract_json_objects(text: &str) -> Vec<Map<String, Value>> {
    decoded_objects(text).take(MAX_PARSED_SCENARIOS).collect()
}

fn decoded_objects(text: &str) -> impl Iterator<Item = Map<String, Value>> + '_ {
    JSON_OBJECT
        .find_iter(text)
        .filter_map(|m| match serde_json::from_str::<Value>(m.as_str()) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        })
}

/// A scenario names itself or describes itself. Objects with neither are
/// inner pieces of a deeper reply, such as a timeline entry or a
/// `financial` map split off by the one-level pattern.
fn is_scenario_shaped(object: &Map<String, Value>) -> bool {
    object.contains_key("title") || object.contains_key("description")
}

/// Parses a model reply into ranked scenario drafts.
///
/// Ranks are 1-based positions among the scenario objects kept, not their
/// positions in the raw text. Fragments do not use up any of the five slots.
pub fn parse_scenarios(text: &str) -> Vec<ScenarioDraft> {
    decoded_objects(text)
        .filter(is_scenario_shaped)
        .take(MAX_PARSED_SCENARIOS)
        .enumerate()
        .map(|(i, object)| draft_from_object(&object, i as u32 + 1))
        .collect()
}

/// Converts one decoded object into a draft, defaulting missing fields.
pub fn draft_from_object(object: &Map<String, Value>, rank: u32) -> ScenarioDraft {
    ScenarioDraft {
        title: text(object.get("title")).unwrap_or_else(|| UNTITLED.to_string()),
        description: text(object.get("description")).unwrap_or_default(),
        probability: object
            .get("probability")
            .and_then(number)
            .map(normalize_probability)
            .unwrap_or(DEFAULT_PROBABILITY),
        timeline: timeline(object.get("timeline")),
        outcomes: outcomes(object.get("outcomes")),
        risks: risks(object.get("risks")),
        recommendations: recommendations(object.get("recommendations")),
        rank,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Field coercion
// ─────────────────────────────────────────────────────────────────────────────

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .trim()
            .trim_end_matches('%')
            .replace([',', '$'], "")
            .trim()
            .parse::<f64>()
            .ok(),
        _ => None,
    };
    parsed.filter(|x| x.is_finite())
}

/// Accepts 0..=1 fractions and 0..=100 percentages.
fn normalize_probability(raw: f64) -> f64 {
    let fraction = if raw > 1.0 && raw <= 100.0 {
        raw / 100.0
    } else {
        raw
    };
    fraction.clamp(0.0, 1.0)
}

fn timeline(value: Option<&Value>) -> Vec<TimelineEntry> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| TimelineEntry {
            period: text(entry.get("period")).unwrap_or_default(),
            event: text(entry.get("event")).unwrap_or_default(),
            impact: entry
                .get("impact")
                .and_then(Value::as_str)
                .map(Impact::from_loose)
                .unwrap_or_default(),
        })
        .collect()
}

fn outcomes(value: Option<&Value>) -> Outcomes {
    let Some(Value::Object(map)) = value else {
        return Outcomes::default();
    };
    Outcomes {
        financial: financial(map.get("financial")),
        satisfaction: map
            .get("satisfaction")
            .and_then(number)
            .map(|s| s.clamp(0.0, 10.0)),
        time_investment_hours: map
            .get("time_investment_hours")
            .and_then(number)
            .filter(|h| *h >= 0.0 && *h <= f64::from(u32::MAX))
            .map(|h| h.round() as u32),
    }
}

fn financial(value: Option<&Value>) -> FinancialProjection {
    let Some(Value::Object(map)) = value else {
        return FinancialProjection::new();
    };
    map.iter()
        .filter_map(|(key, amount)| {
            let year = year_key(key)?;
            let amount = number(amount)?;
            Some((year, amount.round() as i64))
        })
        .collect()
}

/// "year_3", "Year 3", "3" all mean year 3.
fn year_key(key: &str) -> Option<u32> {
    let lowered = key.trim().to_ascii_lowercase();
    let digits = lowered
        .strip_prefix("year")
        .unwrap_or(&lowered)
        .trim_start_matches(['_', ' ', '-']);
    digits.parse().ok()
}

fn risks(value: Option<&Value>) -> Vec<RiskFactor> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(|risk| RiskFactor {
            factor: text(risk.get("factor")).unwrap_or_default(),
            severity: risk
                .get("severity")
                .and_then(Value::as_str)
                .map(Severity::from_loose)
                .unwrap_or_default(),
            mitigation: text(risk.get("mitigation")).unwrap_or_default(),
        })
        .collect()
}

fn recommendations(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::prompt::EXAMPLE_SCHEMA;

    #[test]
    fn two_valid_objects_and_one_malformed_fragment() {
        let reply = r#"
Here are your scenarios.
{"title": "Fast track", "probability": 0.7}
Some commentary {"title": broken, } more text
{"title": "Slow burn", "probability": 0.4}
"#;
        let scenarios = parse_scenarios(reply);

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].title, "Fast track");
        assert_eq!(scenarios[0].rank, 1);
        assert_eq!(scenarios[1].title, "Slow burn");
        assert_eq!(scenarios[1].rank, 2);
    }

    #[test]
    fn no_objects_yields_empty_list() {
        assert!(parse_scenarios("I cannot help with that.").is_empty());
        assert!(parse_scenarios("{not json at all}").is_empty());
        assert!(parse_scenarios("").is_empty());
    }

    #[test]
    fn caps_at_five() {
        let reply: String = (1..=10)
            .map(|i| format!("{{\"title\": \"S{}\"}}\n", i))
            .collect();
        let scenarios = parse_scenarios(&reply);

        assert_eq!(scenarios.len(), MAX_PARSED_SCENARIOS);
        assert_eq!(scenarios[4].title, "S5");
    }

    #[test]
    fn ranks_follow_surviving_order_not_text_position() {
        let reply = r#"{bad} {"title": "A"} {also bad} {"title": "B"}"#;
        let ranks: Vec<_> = parse_scenarios(reply)
            .into_iter()
            .map(|s| (s.title, s.rank))
            .collect();
        assert_eq!(ranks, vec![("A".to_string(), 1), ("B".to_string(), 2)]);
    }

    #[test]
    fn one_level_of_nesting_is_captured_whole() {
        let reply = r#"{"title": "Nested", "outcomes": {"satisfaction": 8, "time_investment_hours": 420}}"#;
        let scenarios = parse_scenarios(reply);

        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].outcomes.satisfaction, Some(8.0));
        assert_eq!(scenarios[0].outcomes.time_investment_hours, Some(420));
    }

    #[test]
    fn deeper_nesting_leaves_only_fragments_which_are_dropped() {
        // Two levels: the outer object cannot match, only its children can.
        let reply = r#"{"title": "Deep", "outcomes": {"financial": {"year_1": 10}}}"#;

        assert_eq!(extract_json_objects(reply).len(), 1);
        assert!(parse_scenarios(reply).is_empty());
    }

    #[test]
    fn reply_following_the_example_schema_yields_nothing() {
        let reply = format!("{}\n{}", EXAMPLE_SCHEMA, EXAMPLE_SCHEMA);

        assert!(!extract_json_objects(&reply).is_empty());
        assert!(parse_scenarios(&reply).is_empty());
    }

    #[test]
    fn fragments_do_not_use_up_slots() {
        let fragments = r#"{"period": "Month 3"} {"year_1": 5} {"factor": "Debt"} "#.repeat(2);
        let reply = format!(
            "{}{}",
            fragments,
            r#"{"title": "Kept"} {"description": "Untitled but described"}"#
        );
        let scenarios = parse_scenarios(&reply);

        assert_eq!(scenarios.len(), 2);
        assert_eq!((scenarios[0].title.as_str(), scenarios[0].rank), ("Kept", 1));
        assert_eq!(scenarios[1].title, UNTITLED);
        assert_eq!(scenarios[1].rank, 2);
    }

    #[test]
    fn untitled_object_is_dropped() {
        assert!(parse_scenarios("{}").is_empty());
        assert!(parse_scenarios(r#"{"probability": 0.9}"#).is_empty());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let scenarios = parse_scenarios(r#"{"description": "Only a description"}"#);
        let draft = &scenarios[0];

        assert_eq!(draft.title, UNTITLED);
        assert_eq!(draft.description, "Only a description");
        assert_eq!(draft.probability, DEFAULT_PROBABILITY);
        assert!(draft.timeline.is_empty());
        assert!(draft.risks.is_empty());
        assert_eq!(draft.outcomes, Outcomes::default());
    }

    #[test]
    fn probability_accepts_percent_forms() {
        let object = |p: Value| {
            let mut map = Map::new();
            map.insert("probability".into(), p);
            draft_from_object(&map, 1).probability
        };
        assert_eq!(object(Value::from(0.65)), 0.65);
        assert_eq!(object(Value::from(75)), 0.75);
        assert_eq!(object(Value::from("40%")), 0.4);
        assert_eq!(object(Value::from(250)), 1.0);
        assert_eq!(object(Value::from(-3)), 0.0);
        assert_eq!(object(Value::from("likely")), DEFAULT_PROBABILITY);
    }

    #[test]
    fn timeline_and_risks_are_coerced() {
        let reply = r#"{"title": "Coerced", "timeline": [{"period": "Month 3", "event": "Launch", "impact": "Positive"}, "junk", {"period": 2}],
                        "risks": [{"factor": "Burnout", "severity": "HIGH", "mitigation": "Rest"}, {"factor": "Debt"}]}"#;
        let draft = &parse_scenarios(reply)[0];

        assert_eq!(
            draft.timeline,
            vec![
                TimelineEntry::new("Month 3", "Launch", Impact::Positive),
                TimelineEntry::new("2", "", Impact::Neutral),
            ]
        );
        assert_eq!(draft.risks[0].severity, Severity::High);
        assert_eq!(draft.risks[1].severity, Severity::Medium);
        assert_eq!(draft.risks[1].mitigation, "");
    }

    #[test]
    fn financial_year_keys_are_normalized() {
        let mut fin = Map::new();
        fin.insert("year_1".into(), Value::from(50000));
        fin.insert("Year 3".into(), Value::from("75,000"));
        fin.insert("5".into(), Value::from(100000.4));
        fin.insert("total".into(), Value::from(1));
        let mut out = Map::new();
        out.insert("financial".into(), Value::Object(fin));

        let projection = outcomes(Some(&Value::Object(out))).financial;
        let expected: FinancialProjection =
            [(1, 50000), (3, 75000), (5, 100000)].into_iter().collect();
        assert_eq!(projection, expected);
    }

    #[test]
    fn recommendations_list_is_joined() {
        let draft = &parse_scenarios(r#"{"title": "Plan", "recommendations": ["Save first.", "Then leap."]}"#)[0];
        assert_eq!(draft.recommendations, "Save first. Then leap.");
    }

    #[test]
    fn non_object_json_is_ignored() {
        // Arrays are not matched by the pattern; bare scalars never start with a brace.
        assert!(parse_scenarios("[1, 2, 3] 42 \"text\"").is_empty());
    }
}

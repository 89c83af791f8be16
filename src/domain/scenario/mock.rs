//! Template-based scenario synthesis.
//!
//! Used whenever the external model is not configured, fails, or returns
//! nothing parseable. Every field is fixed by the archetype except the time
//! investment, which is drawn from `rng`.

use rand::Rng;

use crate::domain::decision::DecisionCategory;

use super::{
    FinancialProjection, Impact, Outcomes, RiskFactor, ScenarioDraft, Severity,
    SimulationRequest, TimelineEntry,
};

/// A named scenario template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub name: &'static str,
    pub probability: f64,
    pub description: &'static str,
    /// Financial multiplier in percent (120 means 1.2x).
    pub multiplier_pct: i64,
    pub satisfaction: f64,
    pub risk: Severity,
}

/// Catalog in the order scenarios are emitted.
pub const ARCHETYPES: [Archetype; 5] = [
    Archetype {
        name: "Optimistic Path",
        probability: 0.65,
        description: "Everything goes according to plan with minimal setbacks. You achieve your goals ahead of schedule.",
        multiplier_pct: 120,
        satisfaction: 8.5,
        risk: Severity::Low,
    },
    Archetype {
        name: "Balanced Approach",
        probability: 0.75,
        description: "A realistic middle-ground scenario with expected challenges and steady progress.",
        multiplier_pct: 100,
        satisfaction: 7.0,
        risk: Severity::Medium,
    },
    Archetype {
        name: "Conservative Path",
        probability: 0.55,
        description: "A cautious approach with slower progress but lower risk. Takes longer but more stable.",
        multiplier_pct: 80,
        satisfaction: 6.5,
        risk: Severity::Low,
    },
    Archetype {
        name: "Aggressive Strategy",
        probability: 0.45,
        description: "High-risk, high-reward approach. Potential for significant gains but also setbacks.",
        multiplier_pct: 150,
        satisfaction: 7.5,
        risk: Severity::High,
    },
    Archetype {
        name: "Gradual Transition",
        probability: 0.70,
        description: "Step-by-step approach minimizing disruption. Slower but more manageable.",
        multiplier_pct: 90,
        satisfaction: 7.8,
        risk: Severity::Low,
    },
];

pub const FIRST_YEAR_EVENT: &str = "Initial implementation and learning phase";
pub const FINAL_YEAR_EVENT: &str = "Full realization of outcomes";
pub const INTERIOR_YEAR_EVENT: &str = "Continued progress and optimization";

/// Years that carry a financial projection, when within the horizon.
pub const PROJECTION_YEARS: [u32; 3] = [1, 3, 5];

/// Inclusive range for the randomized time investment.
pub const TIME_INVESTMENT_HOURS: std::ops::RangeInclusive<u32> = 300..=1000;

/// Starting annual amount for the financial projection.
pub fn base_amount(category: DecisionCategory) -> i64 {
    match category {
        DecisionCategory::Career => 60_000,
        _ => 50_000,
    }
}

/// `base × multiplier × (1 + 0.15 × (year − 1))`, in exact integer arithmetic.
pub fn projected_amount(base: i64, multiplier_pct: i64, year: u32) -> i64 {
    let growth_pct = 100 + 15 * (i64::from(year) - 1);
    base * multiplier_pct * growth_pct / 10_000
}

/// One milestone per year. Year 1 wins when it is also the final year.
pub fn mock_timeline(horizon: u8) -> Vec<TimelineEntry> {
    let horizon = u32::from(horizon);
    (1..=horizon)
        .map(|year| {
            let (event, impact) = if year == 1 {
                (FIRST_YEAR_EVENT, Impact::Neutral)
            } else if year == horizon {
                (FINAL_YEAR_EVENT, Impact::Positive)
            } else {
                (INTERIOR_YEAR_EVENT, Impact::Positive)
            };
            TimelineEntry::new(format!("Year {}", year), event, impact)
        })
        .collect()
}

fn mock_financials(base: i64, multiplier_pct: i64, horizon: u8) -> FinancialProjection {
    PROJECTION_YEARS
        .into_iter()
        .filter(|year| *year <= u32::from(horizon))
        .map(|year| (year, projected_amount(base, multiplier_pct, year)))
        .collect()
}

fn mock_risks(archetype: &Archetype) -> Vec<RiskFactor> {
    vec![
        RiskFactor::new(
            "Market conditions may change",
            archetype.risk,
            "Stay informed and be ready to adapt",
        ),
        RiskFactor::new(
            "Unexpected challenges may arise",
            Severity::Medium,
            "Build contingency plans and maintain flexibility",
        ),
    ]
}

fn mock_recommendation(risk: Severity) -> String {
    let priority = if risk == Severity::Low {
        "stability"
    } else {
        "growth"
    };
    format!(
        "This path is suitable if you prioritize {}. Consider your risk tolerance and timeline.",
        priority
    )
}

/// Builds `min(requested, 5)` scenarios in catalog order, ranked from 1.
pub fn generate_mock_scenarios<R: Rng + ?Sized>(
    decision_title: &str,
    category: DecisionCategory,
    request: &SimulationRequest,
    rng: &mut R,
) -> Vec<ScenarioDraft> {
    let horizon = request.time_horizon_years();
    let base = base_amount(category);

    ARCHETYPES
        .iter()
        .take(usize::from(request.num_scenarios()))
        .enumerate()
        .map(|(i, archetype)| ScenarioDraft {
            title: format!("{}: {}", archetype.name, decision_title),
            description: archetype.description.to_string(),
            probability: archetype.probability,
            timeline: mock_timeline(horizon),
            outcomes: Outcomes {
                financial: mock_financials(base, archetype.multiplier_pct, horizon),
                satisfaction: Some(archetype.satisfaction),
                time_investment_hours: Some(rng.gen_range(TIME_INVESTMENT_HOURS)),
            },
            risks: mock_risks(archetype),
            recommendations: mock_recommendation(archetype.risk),
            rank: i as u32 + 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate(count: i64, horizon: i64, category: DecisionCategory) -> Vec<ScenarioDraft> {
        let mut rng = StdRng::seed_from_u64(7);
        generate_mock_scenarios(
            "Switch careers",
            category,
            &SimulationRequest::new(count, horizon).unwrap(),
            &mut rng,
        )
    }

    #[test]
    fn emits_archetypes_in_catalog_order() {
        let scenarios = generate(5, 5, DecisionCategory::Career);
        let titles: Vec<_> = scenarios.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Optimistic Path: Switch careers",
                "Balanced Approach: Switch careers",
                "Conservative Path: Switch careers",
                "Aggressive Strategy: Switch careers",
                "Gradual Transition: Switch careers",
            ]
        );
        let ranks: Vec<_> = scenarios.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn career_financials_for_five_years() {
        let scenarios = generate(3, 5, DecisionCategory::Career);
        let optimistic = &scenarios[0].outcomes.financial;
        let expected: FinancialProjection =
            [(1, 72_000), (3, 93_600), (5, 115_200)].into_iter().collect();
        assert_eq!(optimistic, &expected);
    }

    #[test]
    fn non_career_uses_lower_base() {
        let scenarios = generate(2, 3, DecisionCategory::Health);
        let balanced = &scenarios[1].outcomes.financial;
        let expected: FinancialProjection = [(1, 50_000), (3, 65_000)].into_iter().collect();
        assert_eq!(balanced, &expected);
    }

    #[test]
    fn projection_years_are_bounded_by_horizon() {
        let keys = |h| -> Vec<u32> {
            generate(2, h, DecisionCategory::Finance)[0]
                .outcomes
                .financial
                .keys()
                .copied()
                .collect()
        };
        assert_eq!(keys(1), vec![1]);
        assert_eq!(keys(4), vec![1, 3]);
        assert_eq!(keys(10), vec![1, 3, 5]);
    }

    #[test]
    fn single_year_horizon_uses_first_year_label() {
        let timeline = mock_timeline(1);
        assert_eq!(
            timeline,
            vec![TimelineEntry::new("Year 1", FIRST_YEAR_EVENT, Impact::Neutral)]
        );
    }

    #[test]
    fn timeline_labels_first_interior_and_final_years() {
        let timeline = mock_timeline(3);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].event, FIRST_YEAR_EVENT);
        assert_eq!(timeline[1].event, INTERIOR_YEAR_EVENT);
        assert_eq!(timeline[1].impact, Impact::Positive);
        assert_eq!(timeline[2].event, FINAL_YEAR_EVENT);
        assert_eq!(timeline[2].period, "Year 3");
    }

    #[test]
    fn risks_pair_archetype_level_with_medium() {
        let scenarios = generate(4, 2, DecisionCategory::Business);
        let aggressive = &scenarios[3];
        assert_eq!(aggressive.risks.len(), 2);
        assert_eq!(aggressive.risks[0].severity, Severity::High);
        assert_eq!(aggressive.risks[1].severity, Severity::Medium);
    }

    #[test]
    fn recommendation_depends_on_risk_level() {
        let scenarios = generate(2, 2, DecisionCategory::Personal);
        assert!(scenarios[0].recommendations.contains("prioritize stability"));
        assert!(scenarios[1].recommendations.contains("prioritize growth"));
    }

    #[test]
    fn time_investment_within_range() {
        for scenario in generate(5, 10, DecisionCategory::Education) {
            let hours = scenario.outcomes.time_investment_hours.unwrap();
            assert!(TIME_INVESTMENT_HOURS.contains(&hours));
        }
    }

    #[test]
    fn projected_amount_matches_float_formula_rounded() {
        for archetype in ARCHETYPES {
            for year in PROJECTION_YEARS {
                for base in [50_000_i64, 60_000] {
                    let float = base as f64
                        * (archetype.multiplier_pct as f64 / 100.0)
                        * (1.0 + 0.15 * (year as f64 - 1.0));
                    assert_eq!(
                        projected_amount(base, archetype.multiplier_pct, year),
                        float.round() as i64
                    );
                }
            }
        }
    }
}

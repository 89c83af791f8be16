//! Property tests for template synthesis and reply parsing.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lifeecho::domain::decision::DecisionCategory;
use lifeecho::domain::scenario::{
    generate_mock_scenarios, parse_scenarios, SimulationRequest, MAX_SCENARIOS,
};

fn category() -> impl Strategy<Value = DecisionCategory> {
    prop::sample::select(DecisionCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn templates_follow_request_shape(
        count in 2i64..=5,
        horizon in 1i64..=10,
        category in category(),
        seed in any::<u64>(),
    ) {
        let request = SimulationRequest::new(count, horizon).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        let drafts = generate_mock_scenarios("Buy a house", category, &request, &mut rng);

        prop_assert_eq!(drafts.len(), count as usize);
        for (i, draft) in drafts.iter().enumerate() {
            prop_assert_eq!(draft.rank, i as u32 + 1);
            prop_assert_eq!(draft.timeline.len(), horizon as usize);
            prop_assert!((0.0..=1.0).contains(&draft.probability));
            prop_assert!(draft.title.ends_with(": Buy a house"));

            let years: Vec<u32> = draft.outcomes.financial.keys().copied().collect();
            let expected: Vec<u32> = [1, 3, 5].into_iter().filter(|y| *y as i64 <= horizon).collect();
            prop_assert_eq!(years, expected);

            let hours = draft.outcomes.time_investment_hours.unwrap();
            prop_assert!((300..=1000).contains(&hours));
        }
    }

    #[test]
    fn later_years_never_project_less(
        category in category(),
        seed in any::<u64>(),
    ) {
        let request = SimulationRequest::new(5, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for draft in generate_mock_scenarios("Start a bakery", category, &request, &mut rng) {
            let values: Vec<i64> = draft.outcomes.financial.values().copied().collect();
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn parser_never_returns_more_than_five(
        titles in prop::collection::vec("[A-Za-z ]{1,20}", 0..12),
        filler in "[a-z .,]{0,40}",
    ) {
        let reply: String = titles
            .iter()
            .map(|t| format!("{} {{\"title\": \"{}\", \"probability\": 0.4}}", filler, t))
            .collect();

        let drafts = parse_scenarios(&reply);

        prop_assert_eq!(drafts.len(), titles.len().min(usize::from(MAX_SCENARIOS)));
        for (i, draft) in drafts.iter().enumerate() {
            prop_assert_eq!(draft.rank, i as u32 + 1);
            prop_assert_eq!(&draft.title, &titles[i]);
        }
    }

    #[test]
    fn parser_tolerates_arbitrary_text(text in ".{0,200}") {
        let drafts = parse_scenarios(&text);
        prop_assert!(drafts.len() <= usize::from(MAX_SCENARIOS));
    }
}

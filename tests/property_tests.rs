//! Property tests for the parser and classifier

use carry_drift::catalog::DEFAULT_BANKS;
use carry_drift::prelude::*;
use proptest::prelude::*;

fn rate() -> impl Strategy<Value = f64> {
    // two-decimal policy rates between -1.00% and 15.00%
    (-100i32..=1500).prop_map(|bp| bp as f64 / 100.0)
}

fn rate_table() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((0usize..DEFAULT_BANKS.len(), rate()), 0..12)
}

fn render(rows: &[(usize, f64)]) -> String {
    rows.iter()
        .map(|(bank, rate)| format!("{} {:.2}%", DEFAULT_BANKS[*bank].0, rate))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn parse_known_label_yields_catalog_currency(
        bank in 0usize..DEFAULT_BANKS.len(),
        r in rate(),
        spaces in 1usize..5,
        pct in any::<bool>(),
    ) {
        let (label, currency) = DEFAULT_BANKS[bank];
        let line = format!("{}{}{:.2}{}", label, " ".repeat(spaces), r, if pct { "%" } else { "" });
        let obs = RateParser::default().parse_line(&line).unwrap();
        prop_assert_eq!(obs.currency, currency);
        prop_assert_eq!(obs.rate, format!("{:.2}", r).parse::<f64>().unwrap());
    }

    #[test]
    fn parse_unknown_label_yields_nothing(
        label in "[A-Za-z]{1,12}( [A-Za-z]{1,12}){0,3}",
        r in rate(),
    ) {
        prop_assume!(!DEFAULT_BANKS.iter().any(|(name, _)| *name == label));
        let line = format!("{} {:.2}%", label, r);
        prop_assert!(RateParser::default().parse_line(&line).is_none());
    }

    #[test]
    fn parse_is_idempotent(rows in rate_table()) {
        let text = render(&rows);
        let parser = RateParser::default();
        let first = parser.parse(&text).ok();
        let second = parser.parse(&text).ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn long_and_short_are_antisymmetric(rows in rate_table(), min in 0u32..=300) {
        let rates: RateTable = rows
            .iter()
            .map(|(bank, r)| (DEFAULT_BANKS[*bank].1, *r))
            .collect();
        let min_differential = min as f64 / 100.0;
        let classifier =
            DifferentialClassifier::new(PairCatalog::standard(), min_differential).unwrap();
        let records = classifier.classify(&rates);

        prop_assert_eq!(records.len() % 2, 0);
        let (longs, shorts) = records.split_at(records.len() / 2);
        for (long, short) in longs.iter().zip(shorts) {
            prop_assert_eq!(long.pair, short.pair);
            prop_assert_eq!(long.position, Position::Long);
            prop_assert_eq!(short.position, Position::Short);
            prop_assert_eq!(long.differential, -short.differential);

            let raw = rates.get(long.pair.base).unwrap() - rates.get(long.pair.quote).unwrap();
            prop_assert!(raw.abs() >= min_differential);
            if raw != 0.0 {
                prop_assert!(long.is_earning() != short.is_earning());
            } else {
                prop_assert!(!long.is_earning() && !short.is_earning());
            }
        }
    }

    #[test]
    fn classify_is_deterministic(rows in rate_table()) {
        let rates: RateTable = rows
            .iter()
            .map(|(bank, r)| (DEFAULT_BANKS[*bank].1, *r))
            .collect();
        let classifier = DifferentialClassifier::new(PairCatalog::standard(), 0.1)
            .unwrap()
            .with_commentary(TrendThresholds::default())
            .unwrap();
        prop_assert_eq!(classifier.classify(&rates), classifier.classify(&rates));
    }
}

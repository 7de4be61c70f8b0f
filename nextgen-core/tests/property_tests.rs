//! Property tests for the generator and export contracts.
//!
//! Uses proptest to verify:
//! 1. Length: exactly `count` with no filters, never more than `count` otherwise
//! 2. Direction filter: every survivor matches a CALL/PUT filter
//! 3. Timeline: ascending, unique indices, 5 minutes per original index
//! 4. Export: batch text is the per-signal lines joined by newlines

use chrono::{Duration, NaiveDate, NaiveDateTime};
use nextgen_core::{
    format_batch, format_line, generate_with, Asset, Direction, DirectionFilter,
    GenerationRequest, SeedPolicy,
};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_asset() -> impl Strategy<Value = Asset> {
    (0..Asset::ALL.len()).prop_map(|i| Asset::ALL[i])
}

fn arb_filter() -> impl Strategy<Value = DirectionFilter> {
    prop_oneof![
        Just(DirectionFilter::All),
        Just(DirectionFilter::Call),
        Just(DirectionFilter::Put),
    ]
}

fn arb_now() -> impl Strategy<Value = NaiveDateTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| {
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    })
}

// ── 1. Length ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unfiltered_length_equals_count(
        count in 0usize..200,
        seed in any::<u64>(),
        asset in arb_asset(),
        now in arb_now(),
    ) {
        let mut rng = SeedPolicy::Fixed(seed).build();
        let out = generate_with(&mut rng, &GenerationRequest::new(count, asset), now);
        prop_assert_eq!(out.len(), count);
    }

    #[test]
    fn filtered_length_bounded(
        count in 0usize..200,
        seed in any::<u64>(),
        filter in arb_filter(),
        backtest in any::<bool>(),
        now in arb_now(),
    ) {
        let req = GenerationRequest::new(count, Asset::EurUsd)
            .with_filter(filter)
            .with_backtest(backtest);
        let mut rng = SeedPolicy::Fixed(seed).build();
        let out = generate_with(&mut rng, &req, now);
        prop_assert!(out.len() <= count);
    }
}

// ── 2. Direction filter ──────────────────────────────────────────────

proptest! {
    #[test]
    fn survivors_match_filter(
        count in 0usize..100,
        seed in any::<u64>(),
        filter in arb_filter(),
        backtest in any::<bool>(),
    ) {
        let req = GenerationRequest::new(count, Asset::UsdTryOtc)
            .with_filter(filter)
            .with_backtest(backtest);
        let mut rng = SeedPolicy::Fixed(seed).build();
        let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        for s in generate_with(&mut rng, &req, now) {
            match filter {
                DirectionFilter::All => {}
                DirectionFilter::Call => prop_assert_eq!(s.direction, Direction::Call),
                DirectionFilter::Put => prop_assert_eq!(s.direction, Direction::Put),
            }
            prop_assert_eq!(s.asset.as_str(), "USD/TRY-OTC NEXTGEN");
        }
    }
}

// ── 3. Timeline ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn timeline_follows_original_index(
        count in 0usize..100,
        seed in any::<u64>(),
        filter in arb_filter(),
        backtest in any::<bool>(),
        now in arb_now(),
    ) {
        let req = GenerationRequest::new(count, Asset::EurJpy)
            .with_filter(filter)
            .with_backtest(backtest);
        let mut rng = SeedPolicy::Fixed(seed).build();
        let out = generate_with(&mut rng, &req, now);

        for s in &out {
            prop_assert!(s.index < count);
            prop_assert_eq!(s.at, now + Duration::minutes(5 * (s.index as i64 + 1)));
        }
        for pair in out.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
            prop_assert!(pair[0].at < pair[1].at);
        }
    }
}

// ── 4. Export ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn batch_is_lines_joined(
        count in 0usize..60,
        seed in any::<u64>(),
        filter in arb_filter(),
    ) {
        let req = GenerationRequest::new(count, Asset::UsdPhpOtc).with_filter(filter);
        let mut rng = SeedPolicy::Fixed(seed).build();
        let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(6, 30, 0).unwrap();
        let out = generate_with(&mut rng, &req, now);

        let text = format_batch(&out);
        prop_assert_eq!(&text, &format_batch(&out));

        if out.is_empty() {
            prop_assert!(text.is_empty());
        } else {
            let lines: Vec<&str> = text.split('\n').collect();
            prop_assert_eq!(lines.len(), out.len());
            for (line, s) in lines.iter().zip(&out) {
                let expected = format_line(s);
                prop_assert_eq!(*line, expected.as_str());
            }
        }
    }
}

//! Signal batch generator.
//!
//! One pass over `0..count`. Each index draws a direction, then runs the
//! direction filter and (optionally) the backtest thinning pass. Survivors are
//! stamped `now + (index + 1) * 5min` using the loop index, so discarded
//! candidates leave gaps in the timeline instead of compacting it.
//!
//! Randomness is consumed at exactly two points:
//! 1. Direction draw: `u > 0.5` is CALL, otherwise PUT. Once per index.
//! 2. Backtest draw: `v > 0.95` drops the candidate. Only for candidates that
//!    passed the direction filter, and only when the backtest flag is set.

use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::domain::{Direction, GenerationRequest, Signal};
use crate::rng::SeedPolicy;

/// Minutes between consecutive loop indices.
pub const SPACING_MINUTES: i64 = 5;

/// Direction draws strictly above this are CALL.
pub const CALL_THRESHOLD: f64 = 0.5;

/// Backtest draws strictly above this drop the candidate.
pub const BACKTEST_DROP_THRESHOLD: f64 = 0.95;

/// Timestamp for the candidate at loop index `index`.
pub fn slot_time(now: NaiveDateTime, index: usize) -> NaiveDateTime {
    let minutes = (index as i64 + 1) * SPACING_MINUTES;
    now + Duration::minutes(minutes)
}

/// Lazily walk `0..request.count`, yielding survivors in index order.
///
/// Nothing is reserved up front, so any `count` is accepted; the caller
/// decides how much of the walk to consume.
pub fn candidates<'a, R: Rng + ?Sized>(
    rng: &'a mut R,
    request: &'a GenerationRequest,
    now: NaiveDateTime,
) -> impl Iterator<Item = Signal> + 'a {
    let label = request.asset.branded_label();

    (0..request.count).filter_map(move |index| {
        let direction = if rng.gen::<f64>() > CALL_THRESHOLD {
            Direction::Call
        } else {
            Direction::Put
        };

        if !request.direction_filter.admits(direction) {
            return None;
        }

        if request.backtest_filter && rng.gen::<f64>() > BACKTEST_DROP_THRESHOLD {
            return None;
        }

        Some(Signal {
            index,
            at: slot_time(now, index),
            asset: label.clone(),
            direction,
        })
    })
}

/// Run one generation pass with an explicit random source and start time.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    request: &GenerationRequest,
    now: NaiveDateTime,
) -> Vec<Signal> {
    let signals: Vec<Signal> = candidates(rng, request, now).collect();

    debug!(
        count = request.count,
        asset = %request.asset,
        filter = %request.direction_filter,
        backtest = request.backtest_filter,
        survivors = signals.len(),
        "generated signal batch"
    );

    signals
}

/// Generator owning its random source and clock.
#[derive(Debug)]
pub struct SignalGenerator<R = StdRng, C = SystemClock> {
    rng: R,
    clock: C,
}

impl SignalGenerator {
    /// Generator on the system clock, seeded per `policy`.
    pub fn new(policy: SeedPolicy) -> Self {
        Self {
            rng: policy.build(),
            clock: SystemClock,
        }
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(SeedPolicy::Entropy)
    }
}

impl<R: Rng, C: Clock> SignalGenerator<R, C> {
    pub fn with_parts(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Produce a batch for `request`, reading the clock once.
    pub fn generate(&mut self, request: &GenerationRequest) -> Vec<Signal> {
        let now = self.clock.now();
        generate_with(&mut self.rng, request, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::{Asset, DirectionFilter};
    use chrono::NaiveDate;
    use rand::RngCore;
    use std::collections::VecDeque;

    /// Replays a fixed list of uniform draws. Panics if over-consumed.
    struct ScriptedDraws {
        values: VecDeque<f64>,
    }

    impl ScriptedDraws {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }

        fn remaining(&self) -> usize {
            self.values.len()
        }
    }

    impl RngCore for ScriptedDraws {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        // rand's Standard f64 takes the top 53 bits of next_u64.
        fn next_u64(&mut self) -> u64 {
            let v = self.values.pop_front().expect("draw script exhausted");
            ((v * (1u64 << 53) as f64) as u64) << 11
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn draw_above_half_is_call() {
        let mut rng = ScriptedDraws::new(&[0.75, 0.25, 0.5]);
        let req = GenerationRequest::new(3, Asset::EurUsd);
        let out = generate_with(&mut rng, &req, noon());
        let dirs: Vec<Direction> = out.iter().map(|s| s.direction).collect();
        // exactly 0.5 is not strictly above the threshold
        assert_eq!(dirs, vec![Direction::Call, Direction::Put, Direction::Put]);
    }

    #[test]
    fn filter_keeps_original_index_spacing() {
        // PUT, CALL, PUT, CALL
        let mut rng = ScriptedDraws::new(&[0.1, 0.9, 0.2, 0.8]);
        let req = GenerationRequest::new(4, Asset::EurUsd).with_filter(DirectionFilter::Call);
        let out = generate_with(&mut rng, &req, noon());

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].index, 1);
        assert_eq!(out[1].index, 3);
        assert_eq!(out[0].time(), "12:10");
        assert_eq!(out[1].time(), "12:20");
    }

    #[test]
    fn backtest_draw_only_for_filter_survivors() {
        // idx0: CALL, backtest 0.10 keep
        // idx1: PUT, filtered out, no backtest draw
        // idx2: CALL, backtest 0.99 drop
        // idx3: CALL, backtest 0.95 keep (not strictly above)
        let draws = [0.9, 0.10, 0.2, 0.9, 0.99, 0.9, 0.95];
        let mut rng = ScriptedDraws::new(&draws);
        let req = GenerationRequest::new(4, Asset::EurGbp)
            .with_filter(DirectionFilter::Call)
            .with_backtest(true);
        let out = generate_with(&mut rng, &req, noon());

        assert_eq!(rng.remaining(), 0);
        let indices: Vec<usize> = out.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn no_backtest_draw_when_disabled() {
        let mut rng = ScriptedDraws::new(&[0.9, 0.1, 0.9]);
        let req = GenerationRequest::new(3, Asset::EurUsd);
        let out = generate_with(&mut rng, &req, noon());
        assert_eq!(out.len(), 3);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn ten_signals_every_five_minutes() {
        let clock = FixedClock(noon());
        let mut gen = SignalGenerator::with_parts(SeedPolicy::Fixed(7).build(), clock);
        let out = gen.generate(&GenerationRequest::new(10, Asset::EurUsd));

        assert_eq!(out.len(), 10);
        for (i, s) in out.iter().enumerate() {
            assert_eq!(s.index, i);
            assert_eq!(s.at, noon() + Duration::minutes(5 * (i as i64 + 1)));
            assert_eq!(s.asset, "EUR/USD NEXTGEN");
        }
        assert_eq!(out.first().unwrap().time(), "12:05");
        assert_eq!(out.last().unwrap().time(), "12:50");
    }

    #[test]
    fn huge_count_walks_lazily() {
        let mut rng = ScriptedDraws::new(&[0.1, 0.9, 0.2, 0.3]);
        let req = GenerationRequest::new(usize::MAX, Asset::EurUsd).with_filter(DirectionFilter::Put);
        let walk = candidates(&mut rng, &req, noon());
        assert_eq!(walk.size_hint().0, 0);

        let first: Vec<usize> = walk.take(3).map(|s| s.index).collect();
        assert_eq!(first, vec![0, 2, 3]);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn zero_count_is_empty() {
        let mut gen = SignalGenerator::new(SeedPolicy::Entropy);
        let out = gen.generate(&GenerationRequest::new(0, Asset::EurUsd));
        assert!(out.is_empty());
    }

    #[test]
    fn seeded_batches_reproduce() {
        let req = GenerationRequest::new(30, Asset::UsdJpy).with_backtest(true);
        let mut a = SignalGenerator::with_parts(SeedPolicy::Fixed(99).build(), FixedClock(noon()));
        let mut b = SignalGenerator::with_parts(SeedPolicy::Fixed(99).build(), FixedClock(noon()));
        assert_eq!(a.generate(&req), b.generate(&req));
    }

    #[test]
    fn times_cross_midnight_in_order() {
        let late = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(23, 50, 0)
            .unwrap();
        let mut rng = SeedPolicy::Fixed(1).build();
        let out = generate_with(&mut rng, &GenerationRequest::new(4, Asset::EurUsd), late);
        let labels: Vec<String> = out.iter().map(|s| s.time()).collect();
        assert_eq!(labels, vec!["23:55", "00:00", "00:05", "00:10"]);
        assert!(out.windows(2).all(|w| w[0].at < w[1].at));
    }
}

//! Property tests for filter invariants.
//!
//! Uses proptest to verify:
//! 1. Soundness: every returned record satisfies all four predicates
//! 2. Completeness: no excluded record satisfies all four predicates
//! 3. Idempotence: filtering a filtered result changes nothing
//! 4. Ordering: results are most recent first

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use levdash_core::{filter, FilterCriteria, TradeRecord, TradeType};

// ── Strategies (proptest) ────────────────────────────────────────────

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
}

fn arb_exchange() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Bitmex", "Deribit", "bitmex"]).prop_map(String::from)
}

fn arb_record() -> impl Strategy<Value = TradeRecord> {
    (arb_exchange(), 1u32..=3, 0i64..120, 0u32..24, any::<bool>(), 0.5..2.0_f64).prop_map(
        |(exchange, margin, day, hour, long, balance)| TradeRecord {
            number: None,
            exchange,
            margin,
            entry_time: (base_date() + Duration::days(day))
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            trade_type: if long { TradeType::Long } else { TradeType::Short },
            exposure: "1".into(),
            entry_balance: balance,
            exit_balance: balance * 1.01,
            pnl: balance * 0.01,
            btc_price: 4_000.0,
        },
    )
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (arb_exchange(), 1u32..=3, 0i64..120, 0i64..60).prop_map(|(exchange, leverage, from, span)| {
        let start = base_date() + Duration::days(from);
        FilterCriteria::new(exchange, leverage, start, start + Duration::days(span))
    })
}

fn satisfies_all(r: &TradeRecord, c: &FilterCriteria) -> bool {
    r.exchange == c.exchange
        && r.margin == c.leverage
        && r.entry_time.date() >= c.start
        && r.entry_time.date() <= c.end
}

// ── Invariants ───────────────────────────────────────────────────────

proptest! {
    /// Returned records match; everything left out does not.
    #[test]
    fn filter_is_sound_and_complete(
        records in prop::collection::vec(arb_record(), 0..60),
        criteria in arb_criteria(),
    ) {
        let out = filter(&records, &criteria);
        for r in &out {
            prop_assert!(satisfies_all(r, &criteria));
        }
        let expected = records.iter().filter(|r| satisfies_all(r, &criteria)).count();
        prop_assert_eq!(out.len(), expected);
    }

    /// Filtering twice with the same criteria returns the identical sequence.
    #[test]
    fn filter_is_idempotent(
        records in prop::collection::vec(arb_record(), 0..60),
        criteria in arb_criteria(),
    ) {
        let once = filter(&records, &criteria);
        let twice = filter(once.iter().copied(), &criteria);
        prop_assert_eq!(once, twice);
    }

    /// Results never go forward in time.
    #[test]
    fn filter_is_most_recent_first(
        records in prop::collection::vec(arb_record(), 0..60),
        criteria in arb_criteria(),
    ) {
        let out = filter(&records, &criteria);
        for pair in out.windows(2) {
            prop_assert!(pair[0].entry_time >= pair[1].entry_time);
        }
    }
}

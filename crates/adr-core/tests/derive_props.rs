//! Property tests for the derived-field engine.

use adr_core::{classify_chance, derive, split_adr_list};
use adr_model::{DrugRecord, PatientContext};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = DrugRecord> {
    (
        "[A-Za-z]{1,12}",
        proptest::option::of("[A-Za-z ,]{0,40}"),
        proptest::option::of("[A-Za-z ,]{0,40}"),
        proptest::option::of(-10.0f64..120.0),
        proptest::option::of(prop_oneof![
            Just("High".to_string()),
            Just("moderate".to_string()),
            Just("Low".to_string()),
            Just(String::new()),
        ]),
    )
        .prop_map(|(name, common, serious, chance, status)| {
            let mut record = DrugRecord::new(name);
            record.common_adrs = common;
            record.serious_adrs = serious;
            record.chance_of_serious_adr_percent = chance;
            record.adr_risk_status = status;
            record
        })
}

proptest! {
    #[test]
    fn derive_is_idempotent(record in record_strategy()) {
        let patient = PatientContext::default();
        prop_assert_eq!(derive(&record, &patient), derive(&record, &patient));
    }

    #[test]
    fn counts_match_list_lengths(record in record_strategy()) {
        let profile = derive(&record, &PatientContext::default());
        prop_assert_eq!(profile.common_count, profile.common_adrs.len());
        prop_assert_eq!(profile.serious_count, profile.serious_adrs.len());
    }

    #[test]
    fn split_entries_are_clean(raw in "[A-Za-z ,]{0,60}") {
        for entry in split_adr_list(Some(&raw)) {
            prop_assert!(!entry.is_empty());
            prop_assert_ne!(entry.as_str(), "None");
            prop_assert_eq!(entry.trim(), entry.as_str());
        }
    }

    #[test]
    fn banding_is_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify_chance(low) <= classify_chance(high));
    }
}

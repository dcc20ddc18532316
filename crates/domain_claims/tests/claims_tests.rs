//! Model-level tests for domain_claims

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::ClaimId;
use domain_claims::claim::{Claim, ClaimStatus, NewClaim};

fn claim_with(hours: Decimal, rate: Decimal) -> Claim {
    Claim {
        id: ClaimId::from_i64(1),
        lecturer_name: "Dr. A. van Wyk".to_string(),
        claim_period: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        hours_worked: hours,
        hourly_rate: rate,
        notes: None,
        status: ClaimStatus::Draft,
        created_at: Utc::now(),
    }
}

mod amount_tests {
    use super::*;

    proptest! {
        /// amount = hours * rate for every representable input, exactly
        #[test]
        fn amount_is_the_exact_product(hours_cents in 0i64..=100_000, rate_cents in 0i64..=1_000_000) {
            let hours = Decimal::new(hours_cents, 2);
            let rate = Decimal::new(rate_cents, 2);
            let claim = claim_with(hours, rate);
            prop_assert_eq!(claim.amount(), hours * rate);
        }

        /// amount is recomputed on every read, never stale
        #[test]
        fn amount_follows_mutation(initial in 1i64..=100_000, updated in 1i64..=100_000) {
            let rate = Decimal::new(25_000, 2);
            let mut claim = claim_with(Decimal::new(initial, 2), rate);
            claim.hours_worked = Decimal::new(updated, 2);
            prop_assert_eq!(claim.amount(), Decimal::new(updated, 2) * rate);
        }
    }
}

mod status_tests {
    use super::*;

    #[test]
    fn test_all_statuses_are_declared() {
        // Verified and Settled are inert but must stay representable
        let statuses = [
            ClaimStatus::Draft,
            ClaimStatus::Pending,
            ClaimStatus::Verified,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
            ClaimStatus::Settled,
        ];
        assert_eq!(statuses.len(), 6);
    }

    #[test]
    fn test_status_serde_round_trip() {
        for status in [
            ClaimStatus::Draft,
            ClaimStatus::Pending,
            ClaimStatus::Verified,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
            ClaimStatus::Settled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: ClaimStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, back);
        }
    }
}

mod payload_tests {
    use super::*;

    #[test]
    fn test_minimal_payload_deserializes() {
        let json = r#"{
            "lecturer_name": "Dr. A. van Wyk",
            "claim_period": "2024-03-01",
            "hours_worked": "50",
            "hourly_rate": "250.00"
        }"#;
        let payload: NewClaim = serde_json::from_str(json).unwrap();
        assert!(payload.notes.is_none());
        assert!(payload.status.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_payload_may_carry_a_status() {
        // The engine discards it, but the payload must accept one
        let json = r#"{
            "lecturer_name": "Dr. A. van Wyk",
            "claim_period": "2024-03-01",
            "hours_worked": "50",
            "hourly_rate": "250.00",
            "status": "Approved"
        }"#;
        let payload: NewClaim = serde_json::from_str(json).unwrap();
        assert_eq!(payload.status, Some(ClaimStatus::Approved));
    }
}

//! Comprehensive unit tests for the Identifiers module
//!
//! Tests cover both identifier types, their creation, parsing,
//! conversion, and display formatting.

use core_kernel::{AttachmentId, ClaimId};

mod claim_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(ClaimId::prefix(), "CLM");
    }

    #[test]
    fn test_display_format() {
        let id = ClaimId::from_i64(1234);
        assert_eq!(id.to_string(), "CLM-1234");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let original = ClaimId::from_i64(55);
        let parsed: ClaimId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_str_without_prefix() {
        let parsed: ClaimId = "55".parse().unwrap();
        assert_eq!(parsed, ClaimId::from_i64(55));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("CLM-abc".parse::<ClaimId>().is_err());
    }

    #[test]
    fn test_i64_conversion() {
        let id: ClaimId = 7i64.into();
        let back: i64 = id.into();
        assert_eq!(back, 7);
    }

    #[test]
    fn test_json_serialization_is_transparent() {
        let id = ClaimId::from_i64(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let deserialized: ClaimId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}

mod attachment_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(AttachmentId::prefix(), "ATT");
    }

    #[test]
    fn test_display_format() {
        let id = AttachmentId::from_i64(3);
        assert_eq!(id.to_string(), "ATT-3");
    }

    #[test]
    fn test_roundtrip() {
        let original = AttachmentId::from_i64(81);
        let parsed: AttachmentId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_ids_are_ordered_by_value() {
        assert!(AttachmentId::from_i64(1) < AttachmentId::from_i64(2));
    }
}

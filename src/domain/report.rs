//! Report requests
//!
//! The tool does not build reports; it records who asked for one and for
//! which scenario, and a fulfilment pipeline picks the queue up from the
//! store later.

use chrono::{DateTime, Utc};
use nutype::nutype;
use uuid::Uuid;

#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

use crate::domain::scenario::ScenarioId;

/// Unique identifier for a recorded report request
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct ReportId(Uuid);

impl ReportId {
    pub fn generate() -> Self {
        Self::new(Uuid::now_v7())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::generate()
    }
}

/// Contact address the finished report should go to
///
/// Shape check only (something@host.tld, no whitespace); deliverability is
/// the fulfilment pipeline's problem. Capped at 255 characters, the usual
/// mailbox limit.
#[nutype(
    validate(len_char_max = 255, regex = r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ContactEmail(String);

/// Acknowledgement that a report request was recorded
///
/// Deliberately does not echo the contact address back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub id: ReportId,
    pub scenario_id: ScenarioId,
    pub requested_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ap.lead@example.com")]
    #[case("finance+roi@sub.domain.co")]
    #[case("x@y.io")]
    fn test_contact_email_accepts_plausible_addresses(#[case] address: &str) {
        assert!(ContactEmail::try_new(address).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("missing@tld")]
    #[case("two words@example.com")]
    #[case("@example.com")]
    #[case("user@.com")]
    fn test_contact_email_rejects_malformed_addresses(#[case] address: &str) {
        assert!(ContactEmail::try_new(address).is_err());
    }

    #[test]
    fn test_contact_email_rejects_overlong_addresses() {
        let address = format!("{}@example.com", "x".repeat(250));
        assert!(ContactEmail::try_new(address).is_err());
    }

    #[test]
    fn test_report_id_generation_is_unique() {
        assert_ne!(ReportId::generate(), ReportId::generate());
    }

    #[test]
    fn test_receipt_omits_the_contact_address() {
        let receipt = ReportReceipt {
            id: ReportId::generate(),
            scenario_id: ScenarioId::generate(),
            requested_at: Utc::now(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert!(json.get("email").is_none());
        assert!(json["scenario_id"].is_string());
    }
}

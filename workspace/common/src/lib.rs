//! Transport types and pure presentation helpers for the donation analytics panel.
//! The structs mirror the JSON payload handed to the panel by the data layer so the
//! frontend and the CLI can deserialize snapshots without duplicating shapes.

mod format;
mod state;
mod summary;

pub use format::{format_currency, format_date, INVALID_DATE, ZERO_CURRENCY};
pub use state::{panel_state, PanelState, FAILED_TO_LOAD, NO_DATA_AVAILABLE};
pub use summary::{average_donation, progress_percent, AnalyticsSummary, GoalProgress};

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// Donor name shown when a donation carries no usable name.
pub const ANONYMOUS_DONOR: &str = "Anonymous";

/// The plan interval that gets the accented chip in the donations table.
pub const MONTHLY_INTERVAL: &str = "monthly";

// ===================== Donations =====================

/// The person behind a donation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Donor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Payment terms attached to a donation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub amount: f64,
    /// Free-text cadence label, e.g. "monthly" or "one-time".
    pub interval: String,
}

/// A single donation as delivered by the data layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donated_by: Option<Donor>,
    pub plan: Plan,
    /// ISO-8601 timestamp, only parsed for display. Missing reads as empty.
    #[serde(default)]
    pub created_at: String,
}

impl Donation {
    /// Donor name for display, falling back to [`ANONYMOUS_DONOR`].
    pub fn donor_name(&self) -> &str {
        self.donated_by
            .as_ref()
            .and_then(|donor| donor.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_DONOR)
    }

    pub fn is_monthly(&self) -> bool {
        self.plan.interval == MONTHLY_INTERVAL
    }
}

/// Count-only container for the donor total.
///
/// Upstream names this field `donations` but only its length is meaningful, so the
/// payload may be either `{ "length": n }` or a plain array whose items are counted
/// and discarded.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct DonorCount {
    pub length: usize,
}

impl DonorCount {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl<'de> Deserialize<'de> for DonorCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Count { length: usize },
            List(Vec<IgnoredAny>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Count { length } => Self { length },
            Repr::List(items) => Self { length: items.len() },
        })
    }
}

// ===================== Analytics =====================

/// Everything the populated panel displays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    /// Total raised so far.
    pub current_amount: f64,
    /// Fundraising goal. Zero, NaN and a missing value all mean "no goal".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    /// Most recent donations, rendered in the order given.
    #[serde(default)]
    pub recent_donations: Vec<Donation>,
    /// Donor total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donations: Option<DonorCount>,
}

impl AnalyticsData {
    pub fn total_donors(&self) -> usize {
        self.donations.map(|count| count.length).unwrap_or(0)
    }

    /// The goal, if it is set to something other than zero or NaN.
    pub fn goal(&self) -> Option<f64> {
        self.target_amount.filter(|target| *target != 0.0 && !target.is_nan())
    }
}

// ===================== Errors =====================

/// HTTP status code or a transport-level label such as `FETCH_ERROR`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorStatus {
    Code(u16),
    Label(String),
}

/// Body of a failed response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Opaque load failure handed to the panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ErrorStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ErrorPayload>,
}

impl AnalyticsError {
    /// Error carrying a nested message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            status: None,
            data: Some(ErrorPayload {
                message: Some(message.into()),
            }),
        }
    }

    /// The nested `data.message`, if present and non-empty.
    pub fn message(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|payload| payload.message.as_deref())
            .filter(|message| !message.is_empty())
    }
}

// ===================== Snapshot =====================

/// The full input of one render pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalyticsData>,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AnalyticsError>,
}

impl AnalyticsSnapshot {
    pub fn panel_state(&self) -> PanelState<'_> {
        panel_state(self.data.as_ref(), self.is_loading, self.error.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn donation(name: Option<&str>, interval: &str) -> Donation {
        Donation {
            id: "d1".to_string(),
            donated_by: Some(Donor {
                name: name.map(str::to_string),
            }),
            plan: Plan {
                amount: 25.0,
                interval: interval.to_string(),
            },
            created_at: "2024-03-05T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_donor_name_falls_back_to_anonymous() {
        assert_eq!(donation(Some("Ada"), "monthly").donor_name(), "Ada");
        assert_eq!(donation(None, "monthly").donor_name(), ANONYMOUS_DONOR);
        assert_eq!(donation(Some(""), "monthly").donor_name(), ANONYMOUS_DONOR);

        let mut without_donor = donation(Some("Ada"), "monthly");
        without_donor.donated_by = None;
        assert_eq!(without_donor.donor_name(), ANONYMOUS_DONOR);
    }

    #[test]
    fn test_only_exact_monthly_is_monthly() {
        assert!(donation(None, "monthly").is_monthly());
        assert!(!donation(None, "Monthly").is_monthly());
        assert!(!donation(None, "one-time").is_monthly());
    }

    #[test]
    fn test_deserialize_analytics_payload() {
        let data: AnalyticsData = serde_json::from_value(json!({
            "currentAmount": 250.0,
            "targetAmount": 1000,
            "recentDonations": [{
                "_id": "abc",
                "donatedBy": { "name": "Grace" },
                "plan": { "amount": 50, "interval": "monthly" },
                "createdAt": "2024-01-15T12:30:00.000Z"
            }],
            "donations": { "length": 7 }
        }))
        .expect("payload should deserialize");

        assert_eq!(data.current_amount, 250.0);
        assert_eq!(data.goal(), Some(1000.0));
        assert_eq!(data.total_donors(), 7);
        assert_eq!(data.recent_donations.len(), 1);
        assert_eq!(data.recent_donations[0].id, "abc");
        assert_eq!(data.recent_donations[0].donor_name(), "Grace");
    }

    #[test]
    fn test_donation_without_timestamp_still_deserializes() {
        let data: AnalyticsData = serde_json::from_value(json!({
            "currentAmount": 50,
            "recentDonations": [{
                "_id": "no-date",
                "plan": { "amount": 50, "interval": "one-time" }
            }]
        }))
        .expect("donation without createdAt should deserialize");

        let donation = &data.recent_donations[0];
        assert_eq!(donation.created_at, "");
        assert_eq!(format_date(&donation.created_at), INVALID_DATE);
    }

    #[test]
    fn test_donor_count_accepts_array() {
        let data: AnalyticsData = serde_json::from_value(json!({
            "currentAmount": 10,
            "donations": [{ "anything": 1 }, 2, "three"]
        }))
        .expect("payload should deserialize");

        assert_eq!(data.total_donors(), 3);
        assert!(data.recent_donations.is_empty());
        assert_eq!(data.goal(), None);
    }

    #[test]
    fn test_missing_donor_count_is_zero() {
        let data: AnalyticsData =
            serde_json::from_value(json!({ "currentAmount": 10 })).expect("should deserialize");
        assert_eq!(data.total_donors(), 0);
    }

    #[test]
    fn test_zero_and_nan_targets_are_no_goal() {
        let mut data: AnalyticsData =
            serde_json::from_value(json!({ "currentAmount": 10, "targetAmount": 0 }))
                .expect("should deserialize");
        assert_eq!(data.goal(), None);

        data.target_amount = Some(f64::NAN);
        assert_eq!(data.goal(), None);
    }

    #[test]
    fn test_error_message_lookup() {
        let nested: AnalyticsError = serde_json::from_value(json!({
            "status": 500,
            "data": { "message": "Campaign not found", "code": "E404" }
        }))
        .expect("error should deserialize");
        assert_eq!(nested.message(), Some("Campaign not found"));
        assert_eq!(nested.status, Some(ErrorStatus::Code(500)));

        let transport: AnalyticsError =
            serde_json::from_value(json!({ "status": "FETCH_ERROR" })).expect("should deserialize");
        assert_eq!(transport.message(), None);
        assert_eq!(
            transport.status,
            Some(ErrorStatus::Label("FETCH_ERROR".to_string()))
        );

        assert_eq!(AnalyticsError::with_message("").message(), None);
    }

    #[test]
    fn test_snapshot_defaults() {
        let snapshot: AnalyticsSnapshot =
            serde_json::from_value(json!({})).expect("empty snapshot should deserialize");
        assert!(!snapshot.is_loading);
        assert!(snapshot.data.is_none());
        assert!(snapshot.error.is_none());
    }
}

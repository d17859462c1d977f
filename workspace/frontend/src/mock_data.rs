use common::{AnalyticsData, AnalyticsError, AnalyticsSnapshot, Donation, Donor, DonorCount, Plan};

use crate::settings::DemoState;

fn donation(id: &str, name: Option<&str>, amount: f64, interval: &str, created_at: &str) -> Donation {
    Donation {
        id: id.to_string(),
        donated_by: Some(Donor {
            name: name.map(str::to_string),
        }),
        plan: Plan {
            amount,
            interval: interval.to_string(),
        },
        created_at: created_at.to_string(),
    }
}

pub fn get_mock_analytics() -> AnalyticsData {
    AnalyticsData {
        current_amount: 4_850.0,
        target_amount: Some(10_000.0),
        recent_donations: vec![
            donation("665f1c2a9b1e4a0012a1b001", Some("Maria Lopez"), 250.0, "monthly", "2024-06-02T14:21:00.000Z"),
            donation("665f1c2a9b1e4a0012a1b002", None, 50.0, "one-time", "2024-06-01T09:05:00.000Z"),
            donation("665f1c2a9b1e4a0012a1b003", Some("Chen Wei"), 1_000.0, "one-time", "2024-05-29T18:40:00.000Z"),
            donation("665f1c2a9b1e4a0012a1b004", Some("Sam Patel"), 25.0, "monthly", "2024-05-27T07:15:00.000Z"),
            donation("665f1c2a9b1e4a0012a1b005", Some("Olivia Brown"), 100.0, "yearly", "2024-05-20T12:00:00.000Z"),
        ],
        donations: Some(DonorCount::new(38)),
    }
}

/// Snapshot with the sample analytics loaded.
pub fn sample_snapshot() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        data: Some(get_mock_analytics()),
        is_loading: false,
        error: None,
    }
}

pub fn demo_snapshot(state: DemoState) -> AnalyticsSnapshot {
    match state {
        DemoState::Populated => sample_snapshot(),
        DemoState::Loading => AnalyticsSnapshot {
            is_loading: true,
            ..AnalyticsSnapshot::default()
        },
        DemoState::Error => AnalyticsSnapshot {
            error: Some(AnalyticsError::with_message("Campaign analytics are temporarily unavailable")),
            ..AnalyticsSnapshot::default()
        },
        DemoState::Empty => AnalyticsSnapshot::default(),
    }
}

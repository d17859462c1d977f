use crate::format::{format_currency, ZERO_CURRENCY};
use crate::AnalyticsData;

/// Percentage of the goal reached, capped at 100. Without a goal this is 0.
pub fn progress_percent(current_amount: f64, target_amount: Option<f64>) -> f64 {
    match target_amount {
        Some(target) if target != 0.0 && !target.is_nan() => {
            (current_amount / target * 100.0).min(100.0)
        }
        _ => 0.0,
    }
}

/// Formatted amount per donor, or [`ZERO_CURRENCY`] when there are no donors.
pub fn average_donation(current_amount: f64, total_donors: usize) -> String {
    if total_donors > 0 {
        format_currency(current_amount / total_donors as f64)
    } else {
        ZERO_CURRENCY.to_string()
    }
}

/// How far along the fundraising goal is.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// Formatted goal amount.
    pub target: String,
    /// Clamped percentage, 0..=100 for non-negative inputs.
    pub percent: f64,
}

impl GoalProgress {
    /// Caption for the total card, e.g. `25.0% of $1,000.00 goal`.
    pub fn caption(&self) -> String {
        format!("{:.1}% of {} goal", self.percent, self.target)
    }
}

/// Values shown on the three summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_raised: String,
    pub goal: Option<GoalProgress>,
    pub total_donors: usize,
    pub average_donation: String,
}

impl AnalyticsSummary {
    pub fn from_data(data: &AnalyticsData) -> Self {
        let total_donors = data.total_donors();
        let goal = data.goal().map(|target| GoalProgress {
            target: format_currency(target),
            percent: progress_percent(data.current_amount, Some(target)),
        });

        Self {
            total_raised: format_currency(data.current_amount),
            goal,
            total_donors,
            average_donation: average_donation(data.current_amount, total_donors),
        }
    }
}

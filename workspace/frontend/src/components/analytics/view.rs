use common::{panel_state, AnalyticsData, AnalyticsError, AnalyticsSnapshot, AnalyticsSummary, PanelState};
use yew::prelude::*;

use super::donations_table::RecentDonations;
use super::skeleton::AnalyticsSkeleton;
use super::summary::SummaryCards;
use crate::common::error::ErrorAlert;

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct AnalyticsProps {
    #[prop_or_default]
    pub data: Option<AnalyticsData>,
    pub is_loading: bool,
    #[prop_or_default]
    pub error: Option<AnalyticsError>,
}

impl From<AnalyticsSnapshot> for AnalyticsProps {
    fn from(snapshot: AnalyticsSnapshot) -> Self {
        Self {
            data: snapshot.data,
            is_loading: snapshot.is_loading,
            error: snapshot.error,
        }
    }
}

/// Donation analytics panel
/// - Loading: skeletons shaped like the final layout
/// - Error or no data: a single error banner
/// - Otherwise: summary cards and the recent donations table
#[function_component(Analytics)]
pub fn analytics(props: &AnalyticsProps) -> Html {
    match panel_state(props.data.as_ref(), props.is_loading, props.error.as_ref()) {
        PanelState::Loading => {
            log::debug!("Analytics data is loading");
            html! { <AnalyticsSkeleton /> }
        }
        PanelState::Unavailable(message) => {
            log::debug!("Analytics unavailable");
            html! { <ErrorAlert message={message.to_string()} /> }
        }
        PanelState::Ready(data) => {
            log::debug!(
                "Rendering analytics with {} recent donations",
                data.recent_donations.len()
            );
            let summary = AnalyticsSummary::from_data(data);

            html! {
                <div class="p-4" data-testid="analytics">
                    <h1 class="text-3xl font-bold text-primary mb-4">{"Donation Analytics"}</h1>
                    <SummaryCards summary={summary} />
                    <RecentDonations donations={data.recent_donations.clone()} />
                </div>
            }
        }
    }
}

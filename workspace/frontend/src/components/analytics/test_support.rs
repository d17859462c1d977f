use common::{AnalyticsData, Donation, Donor, DonorCount, Plan};
use yew::html::BaseComponent;
use yew::ServerRenderer;

/// Renders a component to plain HTML without hydration markers.
pub async fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
    C::Properties: Send,
{
    ServerRenderer::<C>::with_props(move || props)
        .hydratable(false)
        .render()
        .await
}

pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

pub fn donation(id: &str, name: Option<&str>, amount: f64, interval: &str) -> Donation {
    Donation {
        id: id.to_string(),
        donated_by: Some(Donor {
            name: name.map(str::to_string),
        }),
        plan: Plan {
            amount,
            interval: interval.to_string(),
        },
        created_at: "2024-03-05T10:00:00Z".to_string(),
    }
}

pub fn analytics_data(
    current_amount: f64,
    target_amount: Option<f64>,
    donors: usize,
    recent_donations: Vec<Donation>,
) -> AnalyticsData {
    AnalyticsData {
        current_amount,
        target_amount,
        recent_donations,
        donations: Some(DonorCount::new(donors)),
    }
}

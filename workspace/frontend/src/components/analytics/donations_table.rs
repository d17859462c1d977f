use common::{format_currency, format_date, Donation, MONTHLY_INTERVAL};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IntervalChipProps {
    pub interval: String,
}

/// Plan interval badge; monthly plans get the primary accent
#[function_component(IntervalChip)]
pub fn interval_chip(props: &IntervalChipProps) -> Html {
    let accent = if props.interval == MONTHLY_INTERVAL {
        Some("badge-primary")
    } else {
        None
    };

    html! {
        <span class={classes!("badge", "badge-outline", "badge-sm", accent)}>{&props.interval}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentDonationsProps {
    pub donations: Vec<Donation>,
}

#[function_component(RecentDonations)]
pub fn recent_donations(props: &RecentDonationsProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Recent Donations"}</h2>
                <div class="divider mt-0"></div>
                {if props.donations.is_empty() {
                    html! {
                        <div class="text-center py-8">
                            <p class="text-base-content/60">{"No recent donations"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr class="bg-base-200">
                                        <th class="font-bold">{"Donor"}</th>
                                        <th class="font-bold">{"Amount"}</th>
                                        <th class="font-bold">{"Interval"}</th>
                                        <th class="font-bold">{"Date"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for props.donations.iter().map(donation_row) }
                                </tbody>
                            </table>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

fn donation_row(donation: &Donation) -> Html {
    html! {
        <tr class="hover" data-testid="donation-row">
            <td>{donation.donor_name()}</td>
            <td>{format_currency(donation.plan.amount)}</td>
            <td><IntervalChip interval={donation.plan.interval.clone()} /></td>
            <td>{format_date(&donation.created_at)}</td>
        </tr>
    }
}

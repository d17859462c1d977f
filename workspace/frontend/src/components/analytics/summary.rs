use common::AnalyticsSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub title: AttrValue,
    /// Font Awesome icon class, e.g. "fa-users".
    pub icon: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub caption: Option<String>,
    #[prop_or_default]
    pub highlighted: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    let card_class = if props.highlighted {
        "bg-primary text-primary-content"
    } else {
        "bg-base-100"
    };

    html! {
        <div class={classes!("card", "shadow", "flex-1", card_class)} data-testid="summary-card">
            <div class="card-body">
                <div class="flex items-center mb-4 gap-2">
                    <i class={classes!("fas", props.icon.to_string(), "text-2xl")}></i>
                    <h2 class="text-lg font-medium">{&props.title}</h2>
                </div>
                <div class="text-4xl font-bold">{&props.value}</div>
                {if let Some(caption) = &props.caption {
                    html! { <p class="text-sm mt-2">{caption}</p> }
                } else {
                    html! {}
                }}
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: AnalyticsSummary,
}

/// Total raised, donor count and average donation.
#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="flex flex-col md:flex-row gap-6 mb-6">
            <SummaryCard
                title="Total Donations"
                icon="fa-dollar-sign"
                value={summary.total_raised.clone()}
                caption={summary.goal.as_ref().map(|goal| goal.caption())}
                highlighted=true
            >
                {if let Some(goal) = &summary.goal {
                    html! {
                        <progress
                            class="progress progress-accent w-full mt-2"
                            value={goal.percent.to_string()}
                            max="100"
                        ></progress>
                    }
                } else {
                    html! {}
                }}
            </SummaryCard>
            <SummaryCard
                title="Total Donors"
                icon="fa-users"
                value={summary.total_donors.to_string()}
                caption={"Unique contributors".to_string()}
            />
            <SummaryCard
                title="Average Donation"
                icon="fa-calculator"
                value={summary.average_donation.clone()}
                caption={"Per donor".to_string()}
            />
        </div>
    }
}

use yew::prelude::*;

use crate::common::loading::{Skeleton, SkeletonShape};

/// Number of placeholder rows in the donations table skeleton.
pub const SKELETON_ROWS: usize = 5;

/// Number of columns in the donations table.
pub const TABLE_COLUMNS: usize = 4;

/// Placeholder shaped like one summary card
#[function_component(SummaryCardSkeleton)]
pub fn summary_card_skeleton() -> Html {
    html! {
        <div class="card bg-base-100 shadow flex-1" data-testid="summary-card-skeleton">
            <div class="card-body">
                <div class="flex items-center mb-4 gap-2">
                    <Skeleton shape={SkeletonShape::Circular} width="28px" height="28px" />
                    <Skeleton width="120px" height="30px" />
                </div>
                <Skeleton shape={SkeletonShape::Rectangular} width="80%" height="50px" />
                <Skeleton width="60%" height="20px" class="mt-2" />
            </div>
        </div>
    }
}

/// Placeholder for one donations table row
#[function_component(TableRowSkeleton)]
pub fn table_row_skeleton() -> Html {
    html! {
        <tr data-testid="donation-row-skeleton">
            <td><Skeleton width="80%" /></td>
            <td><Skeleton width="60%" /></td>
            <td><Skeleton shape={SkeletonShape::Rectangular} width="80px" height="24px" /></td>
            <td><Skeleton width="70%" /></td>
        </tr>
    }
}

/// Loading layout mirroring the populated panel.
#[function_component(AnalyticsSkeleton)]
pub fn analytics_skeleton() -> Html {
    log::trace!("Rendering analytics skeleton");

    html! {
        <div class="p-4" data-testid="analytics-loading">
            <Skeleton width="300px" height="45px" class="mb-4" />

            <div class="flex flex-col md:flex-row gap-6 mb-6">
                <SummaryCardSkeleton />
                <SummaryCardSkeleton />
                <SummaryCardSkeleton />
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <Skeleton width="200px" height="30px" class="mb-2" />
                    <div class="divider mt-0"></div>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr class="bg-base-200">
                                    { for (0..TABLE_COLUMNS).map(|_| html! {
                                        <th><Skeleton width="80px" /></th>
                                    }) }
                                </tr>
                            </thead>
                            <tbody>
                                { for (0..SKELETON_ROWS).map(|_| html! { <TableRowSkeleton /> }) }
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

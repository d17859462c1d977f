mod donations_table;
mod skeleton;
mod summary;
mod view;

#[cfg(test)]
mod test_support;

pub use donations_table::{IntervalChip, RecentDonations};
pub use skeleton::{AnalyticsSkeleton, SummaryCardSkeleton, TableRowSkeleton};
pub use summary::{SummaryCard, SummaryCards};
pub use view::{Analytics, AnalyticsProps};

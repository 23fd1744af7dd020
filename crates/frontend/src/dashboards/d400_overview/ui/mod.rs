mod dashboard;
pub mod recent_orders;
pub mod sales_chart;
pub mod top_products;

pub use dashboard::OverviewDashboard;

mod dashboard;

pub use dashboard::DealerOverviewDashboard;

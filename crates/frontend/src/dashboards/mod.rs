pub mod d400_dealer_overview;

pub use d400_dealer_overview::DealerOverviewDashboard;

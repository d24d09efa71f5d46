pub mod dashboard;
pub mod fleet;
pub mod news;

pub use dashboard::DashboardPage;
pub use fleet::FleetPage;
pub use news::NewsPage;

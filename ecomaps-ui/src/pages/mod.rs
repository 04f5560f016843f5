//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod detail;
pub mod login;

pub use dashboard::Dashboard;
pub use detail::PointDetail;
pub use login::Login;

//! Application State
//!
//! Session, collection points and the dashboard's registration flow.

pub mod dashboard;
pub mod global;
pub mod points;
pub mod registration;
pub mod session;

pub use dashboard::PendingPoint;
pub use global::{provide_global_state, use_global_state, GlobalState};
pub use points::PointStore;
pub use registration::{RegistrationError, RegistrationForm};
pub use session::Session;

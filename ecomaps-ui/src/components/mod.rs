//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod nav;
pub mod point_list;
pub mod registration_form;

pub use nav::Nav;
pub use point_list::PointList;
pub use registration_form::RegistrationModal;

//! Dashboard Registration Flow
//!
//! Tracks the coordinate picked on the map while the registration modal
//! is open.

use crate::model::LatLng;

/// Pending new point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PendingPoint {
    /// No coordinate captured, modal closed
    #[default]
    Idle,
    /// A map click was captured and the form is open
    AwaitingDetails(LatLng),
}

impl PendingPoint {
    /// A map click opens the form, or moves the pin if it is already open
    pub fn map_clicked(&mut self, at: LatLng) {
        *self = PendingPoint::AwaitingDetails(at);
    }

    /// Close the form and drop the captured coordinate
    pub fn cancel(&mut self) {
        *self = PendingPoint::Idle;
    }

    /// Close the form, handing back the coordinate for the save
    pub fn take(&mut self) -> Option<LatLng> {
        match std::mem::take(self) {
            PendingPoint::AwaitingDetails(at) => Some(at),
            PendingPoint::Idle => None,
        }
    }

    pub fn location(&self) -> Option<LatLng> {
        match self {
            PendingPoint::AwaitingDetails(at) => Some(*at),
            PendingPoint::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PendingPoint::AwaitingDetails(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_opens_form() {
        let mut pending = PendingPoint::default();
        assert!(!pending.is_open());

        pending.map_clicked(LatLng::new(-3.1, -60.02));
        assert!(pending.is_open());
        assert_eq!(pending.location(), Some(LatLng::new(-3.1, -60.02)));
    }

    #[test]
    fn test_second_click_moves_pin() {
        let mut pending = PendingPoint::default();
        pending.map_clicked(LatLng::new(1.0, 1.0));
        pending.map_clicked(LatLng::new(2.0, 2.0));
        assert_eq!(pending.location(), Some(LatLng::new(2.0, 2.0)));
    }

    #[test]
    fn test_cancel_discards_coordinate() {
        let mut pending = PendingPoint::default();
        pending.map_clicked(LatLng::new(1.0, 1.0));
        pending.cancel();
        assert_eq!(pending, PendingPoint::Idle);
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_take_returns_to_idle() {
        let mut pending = PendingPoint::default();
        pending.map_clicked(LatLng::new(1.0, 1.0));
        assert_eq!(pending.take(), Some(LatLng::new(1.0, 1.0)));
        assert!(!pending.is_open());
    }
}

//! Global Application State
//!
//! Session and collection points, held as Leptos signals and provided to
//! the component tree through context. This is the only mutable state that
//! outlives a single screen.

use leptos::*;

use super::dashboard::PendingPoint;
use super::points::PointStore;
use super::registration::{RegistrationError, RegistrationForm};
use super::session::Session;
use crate::model::{CollectionPoint, NewPoint, PointId};
use crate::routes::{self, AppRoute, Resolution};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Logged-in user, if any
    pub session: RwSignal<Session>,
    /// Registered collection points
    pub points: RwSignal<PointStore>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState::new();
    provide_context(state);
    state
}

/// Fetch the state provided by `App`
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            session: create_rw_signal(Session::default()),
            points: create_rw_signal(PointStore::new()),
        }
    }

    /// Start a session. Returns false for a blank email.
    pub fn login(&self, email: &str) -> bool {
        let mut accepted = false;
        self.session.update(|session| accepted = session.login(email));
        if accepted {
            log::info!("session started");
        }
        accepted
    }

    pub fn display_name(&self) -> Option<String> {
        self.session
            .with(|session| session.display_name().map(str::to_string))
    }

    /// Append a point to the shared list
    pub fn add_point(&self, new: NewPoint) -> PointId {
        let mut id = PointId(0);
        let mut total = 0;
        self.points.update(|points| {
            id = points.append(new);
            total = points.len();
        });
        log::info!("registered collection point {} ({} total)", id, total);
        id
    }

    /// Save the modal: validate `form` against the picked coordinate, append
    /// the point and close `pending`. On error nothing changes.
    pub fn save_pending(
        &self,
        pending: &mut PendingPoint,
        form: &RegistrationForm,
    ) -> Result<PointId, RegistrationError> {
        let at = pending.location().ok_or(RegistrationError::NoLocation)?;
        let new = form.submit(at)?;
        pending.take();
        Ok(self.add_point(new))
    }

    pub fn point(&self, id: PointId) -> Option<CollectionPoint> {
        self.points.with(|points| points.get(id).cloned())
    }

    /// Evaluate the route table against the current state (tracked)
    pub fn resolve(&self, route: &AppRoute) -> Resolution {
        self.session.with(|session| {
            self.points
                .with(|points| routes::resolve(route, session, points))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LatLng, Material};
    use crate::routes::{Screen, DASHBOARD_PATH, LOGIN_PATH};

    #[test]
    fn test_login_gates_dashboard() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        assert_eq!(state.resolve(&AppRoute::Dashboard), Resolution::Redirect(LOGIN_PATH));
        assert!(!state.login(""));
        assert_eq!(state.resolve(&AppRoute::Dashboard), Resolution::Redirect(LOGIN_PATH));

        assert!(state.login("user@example.com"));
        assert_eq!(
            state.resolve(&AppRoute::Dashboard),
            Resolution::Render(Screen::Dashboard)
        );
        assert_eq!(state.display_name().as_deref(), Some("user"));

        // The login page relies on the "/" gate to move on
        assert_eq!(
            state.resolve(&AppRoute::Login),
            Resolution::Redirect(DASHBOARD_PATH)
        );

        runtime.dispose();
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Posto Verde".into(),
            address: "Rua A, 123".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_save_pending_rejects_invalid_form() {
        let runtime = create_runtime();
        let state = GlobalState::default();
        state.login("user@example.com");

        let at = LatLng::new(1.0, 2.0);
        let mut pending = PendingPoint::default();
        pending.map_clicked(at);

        let form = RegistrationForm {
            name: "   ".into(),
            ..valid_form()
        };
        assert_eq!(
            state.save_pending(&mut pending, &form),
            Err(RegistrationError::MissingName)
        );
        assert_eq!(pending, PendingPoint::AwaitingDetails(at));
        assert_eq!(state.points.with(PointStore::len), 0);

        runtime.dispose();
    }

    #[test]
    fn test_save_pending_appends_once_and_closes() {
        let runtime = create_runtime();
        let state = GlobalState::default();

        let mut pending = PendingPoint::default();
        pending.map_clicked(LatLng::new(1.0, 2.0));

        let id = state.save_pending(&mut pending, &valid_form()).unwrap();
        assert_eq!(pending, PendingPoint::Idle);
        assert_eq!(state.points.with(PointStore::len), 1);
        assert_eq!(state.point(id).unwrap().location, LatLng::new(1.0, 2.0));

        // A second submit of the same closed modal must not duplicate the point
        assert_eq!(
            state.save_pending(&mut pending, &valid_form()),
            Err(RegistrationError::NoLocation)
        );
        assert_eq!(state.points.with(PointStore::len), 1);

        runtime.dispose();
    }

    #[test]
    fn test_cancel_then_save_appends_nothing() {
        let runtime = create_runtime();
        let state = GlobalState::default();

        let mut idle = PendingPoint::default();
        assert_eq!(
            state.save_pending(&mut idle, &valid_form()),
            Err(RegistrationError::NoLocation)
        );

        let mut pending = PendingPoint::default();
        pending.map_clicked(LatLng::new(1.0, 2.0));
        pending.cancel();
        assert_eq!(
            state.save_pending(&mut pending, &valid_form()),
            Err(RegistrationError::NoLocation)
        );
        assert_eq!(state.points.with(PointStore::len), 0);

        runtime.dispose();
    }

    #[test]
    fn test_register_and_view_scenario() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        assert!(state.login("user@example.com"));

        let mut pending = PendingPoint::default();
        pending.map_clicked(LatLng::new(-3.1, -60.02));

        let mut form = valid_form();
        form.set_material(Material::Plastic, true);
        form.set_material(Material::Glass, true);

        let id = state.save_pending(&mut pending, &form).unwrap();
        assert!(!pending.is_open());

        let listed: Vec<_> = state.points.with(|points| {
            points
                .iter()
                .map(|p| (p.name.clone(), p.address.clone(), p.materials_label()))
                .collect()
        });
        assert_eq!(
            listed,
            vec![(
                "Posto Verde".to_string(),
                "Rua A, 123".to_string(),
                "Plástico, Vidro".to_string()
            )]
        );

        let route = AppRoute::parse("/detalhes/0");
        assert_eq!(state.resolve(&route), Resolution::Render(Screen::Detail(id)));

        let point = state.point(id).unwrap();
        assert_eq!(point.name, "Posto Verde");
        assert_eq!(point.address, "Rua A, 123");
        assert_eq!(point.materials_label(), "Plástico, Vidro");
        assert_eq!(point.hours_label(), "-");
        assert_eq!(point.location, LatLng::new(-3.1, -60.02));

        assert_eq!(
            state.resolve(&AppRoute::parse("/detalhes/1")),
            Resolution::Redirect(DASHBOARD_PATH)
        );

        runtime.dispose();
    }
}

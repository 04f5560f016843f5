//! Route Table
//!
//! Decides what each path renders given the session and the stored points.
//! The router components in `app` only translate these decisions into views.

use crate::model::PointId;
use crate::state::{PointStore, Session};

pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A navigation target
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
    /// `/detalhes/:id` with the raw, unparsed parameter
    Detail(String),
    Unknown,
}

impl AppRoute {
    /// Classify a location path
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => AppRoute::Login,
            "/dashboard" => AppRoute::Dashboard,
            _ => match trimmed.strip_prefix("/detalhes/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    AppRoute::Detail(id.to_string())
                }
                _ => AppRoute::Unknown,
            },
        }
    }
}

/// A screen the application can render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Detail(PointId),
}

/// Outcome of evaluating a route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Screen),
    Redirect(&'static str),
}

/// Evaluate the route table for one navigation
pub fn resolve(route: &AppRoute, session: &Session, points: &PointStore) -> Resolution {
    let logged_in = session.is_logged_in();
    match route {
        AppRoute::Login if logged_in => Resolution::Redirect(DASHBOARD_PATH),
        AppRoute::Login => Resolution::Render(Screen::Login),
        AppRoute::Dashboard if logged_in => Resolution::Render(Screen::Dashboard),
        AppRoute::Detail(raw) if logged_in => match PointId::parse(raw) {
            Some(id) if points.contains(id) => Resolution::Render(Screen::Detail(id)),
            _ => Resolution::Redirect(DASHBOARD_PATH),
        },
        AppRoute::Dashboard | AppRoute::Detail(_) | AppRoute::Unknown => {
            Resolution::Redirect(LOGIN_PATH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LatLng, NewPoint};

    fn logged_in() -> Session {
        let mut session = Session::default();
        session.login("user@example.com");
        session
    }

    fn store_with(n: usize) -> PointStore {
        let mut store = PointStore::new();
        for i in 0..n {
            store.append(NewPoint {
                name: format!("p{}", i),
                address: "Rua A".into(),
                materials: vec![],
                hours: String::new(),
                location: LatLng::new(0.0, 0.0),
            });
        }
        store
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(AppRoute::parse("/"), AppRoute::Login);
        assert_eq!(AppRoute::parse(""), AppRoute::Login);
        assert_eq!(AppRoute::parse("/dashboard"), AppRoute::Dashboard);
        assert_eq!(AppRoute::parse("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::parse("/detalhes/3"), AppRoute::Detail("3".into()));
        assert_eq!(AppRoute::parse("/detalhes/"), AppRoute::Unknown);
        assert_eq!(AppRoute::parse("/detalhes/1/x"), AppRoute::Unknown);
        assert_eq!(AppRoute::parse("/settings"), AppRoute::Unknown);
    }

    #[test]
    fn test_login_screen() {
        let store = PointStore::new();
        assert_eq!(
            resolve(&AppRoute::Login, &Session::default(), &store),
            Resolution::Render(Screen::Login)
        );
        assert_eq!(
            resolve(&AppRoute::Login, &logged_in(), &store),
            Resolution::Redirect(DASHBOARD_PATH)
        );
    }

    #[test]
    fn test_guarded_routes_without_session() {
        let store = store_with(1);
        let session = Session::default();
        assert_eq!(
            resolve(&AppRoute::Dashboard, &session, &store),
            Resolution::Redirect(LOGIN_PATH)
        );
        assert_eq!(
            resolve(&AppRoute::parse("/detalhes/0"), &session, &store),
            Resolution::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn test_dashboard_with_session() {
        assert_eq!(
            resolve(&AppRoute::Dashboard, &logged_in(), &PointStore::new()),
            Resolution::Render(Screen::Dashboard)
        );
    }

    #[test]
    fn test_detail_in_range() {
        let store = store_with(2);
        assert_eq!(
            resolve(&AppRoute::parse("/detalhes/1"), &logged_in(), &store),
            Resolution::Render(Screen::Detail(PointId(1)))
        );
    }

    #[test]
    fn test_detail_out_of_range_redirects_to_dashboard() {
        let session = logged_in();
        for n in 0..4 {
            let store = store_with(n);
            for idx in n..n + 3 {
                let route = AppRoute::Detail(idx.to_string());
                assert_eq!(
                    resolve(&route, &session, &store),
                    Resolution::Redirect(DASHBOARD_PATH)
                );
            }
        }
    }

    #[test]
    fn test_detail_garbage_id_redirects_to_dashboard() {
        let store = store_with(1);
        for raw in ["abc", "-1", "0x0", "1e2"] {
            assert_eq!(
                resolve(&AppRoute::Detail(raw.into()), &logged_in(), &store),
                Resolution::Redirect(DASHBOARD_PATH)
            );
        }
    }

    #[test]
    fn test_unknown_path_redirects_home() {
        let store = PointStore::new();
        for session in [Session::default(), logged_in()] {
            assert_eq!(
                resolve(&AppRoute::parse("/nowhere"), &session, &store),
                Resolution::Redirect(LOGIN_PATH)
            );
            assert_eq!(
                resolve(&AppRoute::parse("/detalhes/"), &session, &store),
                Resolution::Redirect(LOGIN_PATH)
            );
        }
    }
}

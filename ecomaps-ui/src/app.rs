//! App Root Component
//!
//! Owns the global state and maps paths to screens. Every route goes
//! through `routes::resolve`, which also decides the redirects.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Login, PointDetail};
use crate::routes::{AppRoute, Resolution, Screen};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LoginRoute />
                    <Route path="/dashboard" view=DashboardRoute />
                    <Route path="/detalhes/:id" view=DetailRoute />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LoginRoute() -> impl IntoView {
    gate(|| AppRoute::Login)
}

#[component]
fn DashboardRoute() -> impl IntoView {
    gate(|| AppRoute::Dashboard)
}

#[component]
fn DetailRoute() -> impl IntoView {
    let params = use_params_map();
    gate(move || AppRoute::Detail(params.with(|p| p.get("id").cloned().unwrap_or_default())))
}

#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    gate(move || AppRoute::parse(&location.pathname.get()))
}

/// Render whatever the route table decides for `route`.
///
/// The resolution is memoized so registering a point does not rebuild the
/// screen (and its map) unless the outcome actually changes.
fn gate(route: impl Fn() -> AppRoute + 'static) -> impl IntoView {
    let state = use_global_state();
    let resolution = create_memo(move |_| state.resolve(&route()));

    move || match resolution.get() {
        Resolution::Render(Screen::Login) => view! { <Login /> }.into_view(),
        Resolution::Render(Screen::Dashboard) => view! { <Dashboard /> }.into_view(),
        Resolution::Render(Screen::Detail(id)) => view! { <PointDetail id=id /> }.into_view(),
        Resolution::Redirect(to) => {
            log::debug!("redirecting to {}", to);
            view! { <Redirect path=to options=replace() /> }.into_view()
        }
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

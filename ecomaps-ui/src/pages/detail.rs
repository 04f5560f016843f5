//! Point Detail Page
//!
//! All fields of one collection point next to a map focused on it.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::map::{MapView, MarkerSpec, DETAIL_ZOOM};
use crate::model::PointId;
use crate::routes::DASHBOARD_PATH;
use crate::state::use_global_state;

/// Point detail page component
#[component]
pub fn PointDetail(id: PointId) -> impl IntoView {
    let state = use_global_state();

    // Points are never edited, so one lookup is enough.
    let Some(point) = state.point(id) else {
        return view! { <Redirect path=DASHBOARD_PATH /> }.into_view();
    };

    let marker = MarkerSpec::focused(&point);
    let materials = point.materials_label();
    let hours = point.hours_label().to_string();

    view! {
        <div class="min-h-screen bg-green-50 flex flex-col">
            <Nav />
            <div class="flex flex-col md:flex-row gap-6 w-full max-w-4xl mx-auto mt-8">
                <div class="md:w-2/3">
                    <MapView
                        center=point.location
                        zoom=DETAIL_ZOOM
                        height="300px"
                        markers=Signal::derive(move || vec![marker.clone()])
                    />
                </div>
                <div class="md:w-1/3 bg-white rounded-2xl shadow-lg p-6 flex flex-col">
                    <h2 class="text-green-800 font-bold mb-2">{point.name}</h2>
                    <p class="mb-2">{point.address}</p>
                    <p class="text-sm text-gray-600 mb-2">"Materiais: " {materials}</p>
                    <p class="text-sm text-gray-600 mb-2">"Horário: " {hours}</p>
                    <A
                        href=DASHBOARD_PATH
                        class="mt-4 bg-green-700 text-white py-2 rounded text-center hover:bg-green-800"
                    >
                        "Voltar"
                    </A>
                </div>
            </div>
        </div>
    }
    .into_view()
}

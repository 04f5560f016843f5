//! Dashboard Page
//!
//! Map of all collection points, the list panel, and the registration modal
//! opened by clicking on the map.

use leptos::*;

use crate::components::{Nav, PointList, RegistrationModal};
use crate::map::{MapView, MarkerSpec, DASHBOARD_ZOOM, DEFAULT_CENTER};
use crate::model::LatLng;
use crate::state::{use_global_state, PendingPoint};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let pending = create_rw_signal(PendingPoint::default());

    let markers = Signal::derive(move || {
        state
            .points
            .with(|points| points.iter().map(MarkerSpec::summary).collect::<Vec<_>>())
    });

    let on_map_click = Callback::new(move |at: LatLng| {
        log::debug!("map clicked at {}", at);
        pending.update(|pending| pending.map_clicked(at));
    });

    view! {
        <div class="flex flex-col items-center bg-green-50 min-h-screen">
            <Nav />
            <div class="flex flex-col md:flex-row gap-6 w-full max-w-6xl mt-8 p-4">
                // Map panel
                <section class="md:w-2/3 bg-white rounded-2xl shadow-lg p-4">
                    <h2 class="font-bold text-green-700 mb-2">"Mapa Interativo"</h2>
                    <MapView
                        center=DEFAULT_CENTER
                        zoom=DASHBOARD_ZOOM
                        height="420px"
                        markers=markers
                        on_click=on_map_click
                    />
                    <p class="mt-2 text-gray-500 text-sm">
                        "Clique no mapa para cadastrar um novo ponto de coleta."
                    </p>
                </section>

                // List panel
                <section class="md:w-1/3 bg-white rounded-2xl shadow-lg p-4 flex flex-col">
                    <h2 class="font-bold text-green-700 mb-2">"Pontos de Coleta"</h2>
                    <PointList />
                </section>
            </div>

            <Show when=move || pending.with(PendingPoint::is_open)>
                <RegistrationModal pending=pending />
            </Show>
        </div>
    }
}

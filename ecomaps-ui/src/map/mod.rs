//! Map Widget
//!
//! Leaflet-backed map panel. The component owns one Leaflet instance for its
//! lifetime, keeps its markers in sync with a signal and reports clicks.

pub mod leaflet;
pub mod popup;

pub use leaflet::{LeafletMap, TileSource};
pub use popup::MarkerSpec;

use leptos::*;

use crate::model::LatLng;

/// OpenStreetMap tiles used by every map
pub const OSM_TILES: TileSource = TileSource {
    url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: "© OpenStreetMap",
};

/// Dashboard map center (Manaus)
pub const DEFAULT_CENTER: LatLng = LatLng::new(-3.1, -60.02);
pub const DASHBOARD_ZOOM: u32 = 13;
pub const DETAIL_ZOOM: u32 = 16;

const ICON_RETINA_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-icon-2x.png";
const ICON_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-icon.png";
const SHADOW_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/images/marker-shadow.png";

/// Use the CDN marker images instead of the bundler-relative defaults
pub fn configure_marker_icons() {
    if let Err(e) = leaflet::configure_default_icons(ICON_RETINA_URL, ICON_URL, SHADOW_URL) {
        log::error!("could not configure marker icons: {}", e);
    }
}

/// Interactive map panel
#[component]
pub fn MapView(
    center: LatLng,
    zoom: u32,
    /// CSS height of the map container, e.g. "420px"
    #[prop(into)]
    height: String,
    #[prop(into)]
    markers: Signal<Vec<MarkerSpec>>,
    #[prop(optional, into)]
    on_click: Option<Callback<LatLng>>,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let map = store_value::<Option<LeafletMap>>(None);

    // Created lazily once the container is attached, then only markers change.
    create_effect(move |_| {
        let markers = markers.get();
        let Some(element) = container.get() else {
            return;
        };

        if map.with_value(Option::is_none) {
            let handler = on_click.map(|callback| {
                Box::new(move |at: LatLng| callback.call(at)) as Box<dyn FnMut(LatLng)>
            });
            match LeafletMap::create(&element, center, zoom, OSM_TILES, handler) {
                Ok(created) => map.set_value(Some(created)),
                Err(e) => {
                    log::error!("map unavailable: {}", e);
                    return;
                }
            }
        }

        map.with_value(|current| {
            if let Some(current) = current {
                if let Err(e) = current.set_markers(&markers) {
                    log::error!("failed to update markers: {}", e);
                }
            }
        });
    });

    on_cleanup(move || {
        map.try_update_value(|current| current.take());
    });

    view! {
        <div
            node_ref=container
            class="rounded-lg z-0"
            style=format!("height: {}; width: 100%;", height)
        />
    }
}

//! Leaflet Bindings
//!
//! Thin wasm-bindgen shim over the global `L` object loaded by index.html.
//! Only the calls the views need are exposed: create a map with a tile layer,
//! replace its markers, forward clicks and tear it down.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::popup::MarkerSpec;
use crate::model::LatLng;

#[wasm_bindgen(inline_js = "
function __ecomaps_leaflet() {
    if (typeof window === 'undefined' || !window.L || typeof window.L.map !== 'function') {
        throw new Error('Leaflet is not loaded');
    }
    return window.L;
}

export function ecomaps_leaflet_configure_icons(retinaUrl, iconUrl, shadowUrl) {
    const L = __ecomaps_leaflet();
    delete L.Icon.Default.prototype._getIconUrl;
    L.Icon.Default.mergeOptions({ iconRetinaUrl: retinaUrl, iconUrl: iconUrl, shadowUrl: shadowUrl });
}

export function ecomaps_leaflet_create(element, lat, lng, zoom, tileUrl, attribution, onClick) {
    const L = __ecomaps_leaflet();
    const map = L.map(element).setView([lat, lng], zoom);
    L.tileLayer(tileUrl, { attribution: attribution }).addTo(map);
    const markers = L.layerGroup().addTo(map);
    if (typeof onClick === 'function') {
        map.on('click', (e) => onClick(e.latlng.lat, e.latlng.lng));
    }
    // The container may have been sized after insertion.
    setTimeout(() => map.invalidateSize(), 0);
    return { map: map, markers: markers };
}

export function ecomaps_leaflet_set_markers(handle, markersJson) {
    const L = __ecomaps_leaflet();
    handle.markers.clearLayers();
    for (const m of JSON.parse(markersJson)) {
        L.marker([m.lat, m.lng]).bindPopup(m.popup).addTo(handle.markers);
    }
}

export function ecomaps_leaflet_destroy(handle) {
    handle.map.off();
    handle.map.remove();
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn ecomaps_leaflet_configure_icons(
        retina_url: &str,
        icon_url: &str,
        shadow_url: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn ecomaps_leaflet_create(
        element: &web_sys::HtmlElement,
        lat: f64,
        lng: f64,
        zoom: u32,
        tile_url: &str,
        attribution: &str,
        on_click: &JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    fn ecomaps_leaflet_set_markers(handle: &JsValue, markers_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn ecomaps_leaflet_destroy(handle: &JsValue) -> Result<(), JsValue>;
}

/// Map widget failures
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Leaflet call failed: {0}")]
    Leaflet(String),

    #[error("Failed to encode markers: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<JsValue> for MapError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        MapError::Leaflet(message)
    }
}

/// Point Leaflet's default marker icons at the CDN images
pub fn configure_default_icons(retina_url: &str, icon_url: &str, shadow_url: &str) -> Result<(), MapError> {
    ecomaps_leaflet_configure_icons(retina_url, icon_url, shadow_url)?;
    Ok(())
}

/// Tile source shown under the markers
#[derive(Clone, Copy, Debug)]
pub struct TileSource {
    pub url: &'static str,
    pub attribution: &'static str,
}

/// A live Leaflet map bound to a DOM element. Dropping it removes the map.
pub struct LeafletMap {
    handle: JsValue,
    _on_click: Option<Closure<dyn FnMut(f64, f64)>>,
}

impl LeafletMap {
    pub fn create(
        element: &web_sys::HtmlElement,
        center: LatLng,
        zoom: u32,
        tiles: TileSource,
        on_click: Option<Box<dyn FnMut(LatLng)>>,
    ) -> Result<Self, MapError> {
        let on_click = on_click.map(|mut handler| {
            Closure::wrap(Box::new(move |lat: f64, lng: f64| {
                handler(LatLng::new(lat, lng));
            }) as Box<dyn FnMut(f64, f64)>)
        });

        let callback = on_click
            .as_ref()
            .map(|closure| closure.as_ref().clone())
            .unwrap_or(JsValue::NULL);

        let handle = ecomaps_leaflet_create(
            element,
            center.lat,
            center.lng,
            zoom,
            tiles.url,
            tiles.attribution,
            &callback,
        )?;

        Ok(Self {
            handle,
            _on_click: on_click,
        })
    }

    /// Replace every marker on the map
    pub fn set_markers(&self, markers: &[MarkerSpec]) -> Result<(), MapError> {
        let json = serde_json::to_string(markers)?;
        ecomaps_leaflet_set_markers(&self.handle, &json)?;
        Ok(())
    }
}

impl Drop for LeafletMap {
    fn drop(&mut self) {
        if let Err(e) = ecomaps_leaflet_destroy(&self.handle) {
            log::warn!("failed to remove map: {}", MapError::from(e));
        }
    }
}

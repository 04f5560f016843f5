//! Marker Popups
//!
//! Popup content is handed to Leaflet as HTML, so every user-typed field is
//! escaped here.

use serde::Serialize;

use crate::model::CollectionPoint;

/// One marker placement as sent to the map widget
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub popup: String,
}

impl MarkerSpec {
    /// Dashboard marker: name, address, materials and a details link
    pub fn summary(point: &CollectionPoint) -> Self {
        let popup = format!(
            "<b>{}</b><br/>{}<br/><span class=\"text-xs\">Materiais: {}</span><br/>\
             <a href=\"{}\" class=\"text-green-700 underline\">Detalhes</a>",
            escape_html(&point.name),
            escape_html(&point.address),
            escape_html(&point.materials_label()),
            point.id.detail_path(),
        );
        Self::at(point, popup)
    }

    /// Detail marker: name and address only
    pub fn focused(point: &CollectionPoint) -> Self {
        let popup = format!(
            "<b>{}</b><br/>{}",
            escape_html(&point.name),
            escape_html(&point.address),
        );
        Self::at(point, popup)
    }

    fn at(point: &CollectionPoint, popup: String) -> Self {
        Self {
            lat: point.location.lat,
            lng: point.location.lng,
            popup,
        }
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

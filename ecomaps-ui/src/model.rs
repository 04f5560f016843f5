//! Domain Types
//!
//! Collection points, the fixed materials catalog and map coordinates.

use std::fmt;

/// Geographic coordinate as reported by the map widget
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Recyclable material accepted at a collection point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    Plastic,
    Glass,
    Metal,
    Paper,
    Electronics,
}

impl Material {
    /// The full catalog, in display order
    pub const CATALOG: [Material; 5] = [
        Material::Plastic,
        Material::Glass,
        Material::Metal,
        Material::Paper,
        Material::Electronics,
    ];

    /// Label shown in the form, list and popups
    pub fn label(self) -> &'static str {
        match self {
            Material::Plastic => "Plástico",
            Material::Glass => "Vidro",
            Material::Metal => "Metal",
            Material::Paper => "Papel",
            Material::Electronics => "Eletrônicos",
        }
    }

    /// Value attribute used by the checkbox inputs
    pub fn slug(self) -> &'static str {
        match self {
            Material::Plastic => "plastic",
            Material::Glass => "glass",
            Material::Metal => "metal",
            Material::Paper => "paper",
            Material::Electronics => "electronics",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Join material labels the way every view displays them ("Plástico, Vidro")
pub fn materials_label(materials: &[Material]) -> String {
    materials
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Stable identifier of a registered point, used in `/detalhes/:id`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

impl PointId {
    /// Parse a route parameter. Anything but a plain decimal number is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok().map(PointId)
    }

    /// Route to this point's detail screen
    pub fn detail_path(self) -> String {
        format!("/detalhes/{}", self.0)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated form contents waiting for an id
#[derive(Clone, Debug, PartialEq)]
pub struct NewPoint {
    pub name: String,
    pub address: String,
    pub materials: Vec<Material>,
    pub hours: String,
    pub location: LatLng,
}

/// A registered recycling collection point
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionPoint {
    pub id: PointId,
    pub name: String,
    pub address: String,
    pub materials: Vec<Material>,
    pub hours: String,
    pub location: LatLng,
}

impl CollectionPoint {
    pub fn from_new(id: PointId, new: NewPoint) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            materials: new.materials,
            hours: new.hours,
            location: new.location,
        }
    }

    pub fn materials_label(&self) -> String {
        materials_label(&self.materials)
    }

    /// Opening hours, or "-" when none were given
    pub fn hours_label(&self) -> &str {
        if self.hours.is_empty() {
            "-"
        } else {
            &self.hours
        }
    }
}

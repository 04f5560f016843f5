//! Registration Form
//!
//! Field values of the "Cadastrar Ponto" modal and their validation.

use thiserror::Error;

use crate::model::{LatLng, Material, NewPoint};

/// Reasons a registration cannot be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Clique no mapa para escolher o local")]
    NoLocation,

    #[error("Informe o nome do local")]
    MissingName,

    #[error("Informe o endereço")]
    MissingAddress,
}

/// Current contents of the registration form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub address: String,
    materials: Vec<Material>,
    pub hours: String,
}

impl RegistrationForm {
    /// Check or uncheck a material. The selection stays in catalog order.
    pub fn set_material(&mut self, material: Material, checked: bool) {
        let present = self.materials.contains(&material);
        if checked && !present {
            self.materials.push(material);
            self.materials.sort();
        } else if !checked && present {
            self.materials.retain(|m| *m != material);
        }
    }

    pub fn has_material(&self, material: Material) -> bool {
        self.materials.contains(&material)
    }

    /// Validate the fields and pair them with the picked coordinate.
    ///
    /// An empty materials selection is accepted.
    pub fn submit(&self, location: LatLng) -> Result<NewPoint, RegistrationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RegistrationError::MissingName);
        }

        let address = self.address.trim();
        if address.is_empty() {
            return Err(RegistrationError::MissingAddress);
        }

        Ok(NewPoint {
            name: name.to_string(),
            address: address.to_string(),
            materials: self.materials.clone(),
            hours: self.hours.trim().to_string(),
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            name: "Posto Verde".into(),
            address: "Rua A, 123".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_builds_point() {
        let mut form = filled();
        form.set_material(Material::Glass, true);
        form.set_material(Material::Plastic, true);

        let at = LatLng::new(-3.1, -60.02);
        let point = form.submit(at).unwrap();

        assert_eq!(point.name, "Posto Verde");
        assert_eq!(point.address, "Rua A, 123");
        assert_eq!(point.materials, vec![Material::Plastic, Material::Glass]);
        assert_eq!(point.hours, "");
        assert_eq!(point.location, at);
    }

    #[test]
    fn test_required_fields() {
        let at = LatLng::new(0.0, 0.0);

        let mut form = filled();
        form.name = "  ".into();
        assert_eq!(form.submit(at), Err(RegistrationError::MissingName));

        let mut form = filled();
        form.address.clear();
        assert_eq!(form.submit(at), Err(RegistrationError::MissingAddress));
    }

    #[test]
    fn test_empty_materials_allowed() {
        let point = filled().submit(LatLng::new(0.0, 0.0)).unwrap();
        assert!(point.materials.is_empty());
    }

    #[test]
    fn test_uncheck_material() {
        let mut form = filled();
        form.set_material(Material::Metal, true);
        form.set_material(Material::Metal, true);
        let at = LatLng::new(0.0, 0.0);
        assert_eq!(form.submit(at).unwrap().materials, vec![Material::Metal]);

        form.set_material(Material::Metal, false);
        assert!(!form.has_material(Material::Metal));
        assert!(form.submit(at).unwrap().materials.is_empty());
    }

    #[test]
    fn test_hours_kept_when_given() {
        let mut form = filled();
        form.hours = " Seg-Sex 8h-17h ".into();
        let point = form.submit(LatLng::new(0.0, 0.0)).unwrap();
        assert_eq!(point.hours, "Seg-Sex 8h-17h");
    }
}

//! Point Store
//!
//! Append-only list of registered collection points. Insertion order is
//! display order; ids come from a counter and never get reused, so lookups
//! stay valid however the list is displayed.

use crate::model::{CollectionPoint, NewPoint, PointId};

/// In-memory collection point storage
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStore {
    points: Vec<CollectionPoint>,
    next_id: u64,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and return its id
    pub fn append(&mut self, new: NewPoint) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.points.push(CollectionPoint::from_new(id, new));
        id
    }

    /// Find a point by id
    pub fn get(&self, id: PointId) -> Option<&CollectionPoint> {
        // Ids are handed out in increasing order, so the vector is sorted by id.
        self.points
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|idx| &self.points[idx])
    }

    pub fn contains(&self, id: PointId) -> bool {
        self.get(id).is_some()
    }

    /// All points in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CollectionPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LatLng, Material};

    fn sample(name: &str) -> NewPoint {
        NewPoint {
            name: name.to_string(),
            address: format!("Rua {}", name),
            materials: vec![Material::Paper],
            hours: String::new(),
            location: LatLng::new(-3.1, -60.02),
        }
    }

    #[test]
    fn test_append_assigns_sequential_ids() {
        let mut store = PointStore::new();
        let a = store.append(sample("a"));
        let b = store.append(sample("b"));
        let c = store.append(sample("c"));

        assert_eq!((a, b, c), (PointId(0), PointId(1), PointId(2)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_nth_point_matches_submission() {
        let mut store = PointStore::new();
        let submissions: Vec<_> = (0..5).map(|i| sample(&format!("p{}", i))).collect();
        for new in &submissions {
            store.append(new.clone());
        }

        assert_eq!(store.len(), submissions.len());
        for (idx, new) in submissions.iter().enumerate() {
            let point = store.get(PointId(idx as u64)).unwrap();
            assert_eq!(point.name, new.name);
            assert_eq!(point.address, new.address);
            assert_eq!(point.materials, new.materials);
            assert_eq!(point.hours, new.hours);
            assert_eq!(point.location, new.location);
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let mut store = PointStore::new();
        assert!(store.get(PointId(0)).is_none());

        store.append(sample("a"));
        assert!(store.contains(PointId(0)));
        assert!(!store.contains(PointId(1)));
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut store = PointStore::new();
        store.append(sample("first"));
        store.append(sample("second"));

        let names: Vec<_> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}

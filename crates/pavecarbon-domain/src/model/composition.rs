//! Composition: a named, independently sized stack of layers

use serde::{Deserialize, Serialize};

use super::layer::Layer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Unique identifier, stable across edits
    pub id: String,
    pub name: String,
    /// Surface area in m²
    pub surface_area: f64,
    /// Layers from top to bottom
    pub layers: Vec<Layer>,
}

impl Composition {
    pub fn new(name: String, surface_area: f64, layers: Vec<Layer>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            surface_area,
            layers,
        }
    }

    /// Deep copy with a fresh id and a suffixed name
    pub fn duplicate(&self, suffix: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: format!("{}{}", self.name, suffix),
            surface_area: self.surface_area,
            layers: self.layers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Composition::new("A".to_string(), 1.0, vec![]);
        let b = Composition::new("A".to_string(), 1.0, vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = Composition::new(
            "Parking".to_string(),
            12.0,
            vec![Layer::new("Gravier", 5.0)],
        );
        let mut copy = original.duplicate(" (copie)");
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "Parking (copie)");
        assert_eq!(copy.layers, original.layers);

        copy.layers[0].thickness_cm = 50.0;
        copy.layers.push(Layer::new("Grave", 20.0));
        assert_eq!(original.layers.len(), 1);
        assert_eq!(original.layers[0].thickness_cm, 5.0);
    }
}

//! Base compositions offered when adding a new composition

use serde::{Deserialize, Serialize};

use pavecarbon_domain::Layer;

use super::materials::UNDEFINED_MATERIAL;

/// Named seed layer stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    /// Layers from top to bottom
    pub layers: Vec<Layer>,
}

fn template(name: &str, layers: &[(&str, f64)]) -> Template {
    Template {
        name: name.to_string(),
        layers: layers
            .iter()
            .map(|(material, thickness)| Layer::new(material, *thickness))
            .collect(),
    }
}

/// Templates in display order
pub fn standard_templates() -> Vec<Template> {
    vec![
        template(
            "Revêtement bitumineux",
            &[("Enrobé bitumineux", 7.0), ("Gravier", 5.0), ("Grave", 20.0)],
        ),
        template(
            "Revêtement béton",
            &[("Béton", 15.0), ("Gravier", 5.0), ("Grave", 25.0)],
        ),
        template(
            "Revêtement gravier",
            &[("Gravier", 5.0), ("Gravier", 10.0), ("Grave", 25.0)],
        ),
        template(
            "Revêtement pavé en pierre naturelle",
            &[("Pavé en pierre", 8.0), ("Gravier", 3.0), ("Grave", 25.0)],
        ),
        template(
            "Revêtement dalle en pierre naturelle",
            &[("Dalle en pierre polie", 4.0), ("Gravier", 3.0), ("Grave", 25.0)],
        ),
        template(
            "Revêtement dalle en pierre naturelle, mixte",
            &[
                ("Dalle en pierre polie", 4.0),
                ("Granulés de béton", 6.0),
                ("Béton maigre", 12.0),
                ("Grave", 10.0),
            ],
        ),
        template(
            "Revêtement béton préfabriqué",
            &[("Pavé béton préfabriquée", 8.0), ("Gravier", 3.0), ("Grave", 25.0)],
        ),
        template(
            "Revêtement grille de béton préfabriquée",
            &[("Grille béton préfabriquée", 4.0), ("Gravier", 3.0), ("Grave", 25.0)],
        ),
        template(UNDEFINED_MATERIAL, &[(UNDEFINED_MATERIAL, 30.0)]),
    ]
}

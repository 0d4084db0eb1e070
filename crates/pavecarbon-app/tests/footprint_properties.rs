//! Property tests for the footprint engine on the canonical catalog.

use proptest::prelude::*;

use pavecarbon_app::{CompositionSession, LayerUpdate, MaterialCatalog};
use pavecarbon_domain::service::{
    compare, footprint_from_factor, layer_footprint, layer_footprint_per_area,
    resolve_layer_factor, total_footprint, EmissionFactor,
};
use pavecarbon_domain::{Composition, Layer, MaterialRepository};

const VOLUME_MATERIALS: [&str; 12] = [
    "Gravier",
    "Béton",
    "Enrobé bitumineux",
    "Pavé béton préfabriquée",
    "Grille béton préfabriquée",
    "Pavé en pierre",
    "Dalle en pierre",
    "Dalle en pierre polie",
    "Béton maigre",
    "Granulés de béton",
    "Grave",
    "Indéfini",
];

fn volume_material() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(VOLUME_MATERIALS.to_vec())
}

fn any_layer() -> impl Strategy<Value = Layer> {
    (
        prop_oneof![volume_material(), Just("Géotextile")],
        0.0f64..60.0,
    )
        .prop_map(|(material, thickness)| {
            let thickness = if material == "Géotextile" { 0.0 } else { thickness };
            Layer::new(material, thickness)
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a per-volume layer scales linearly with thickness and area.
    #[test]
    fn property_volume_layer_is_linear(
        material in volume_material(),
        thickness in 0.0f64..80.0,
        area in 0.01f64..10_000.0,
    ) {
        let catalog = MaterialCatalog::standard();
        let layer = Layer::new(material, thickness);
        let factor = resolve_layer_factor(&layer, &catalog).unwrap();
        let EmissionFactor::PerVolume(f) = factor else {
            panic!("{material} should resolve per volume");
        };

        let absolute = layer_footprint(&layer, area, &catalog).unwrap();
        prop_assert!(close(absolute, f * thickness / 100.0 * area));

        let per_m2 = layer_footprint_per_area(&layer, &catalog).unwrap();
        prop_assert!(close(absolute / area, per_m2));
    }

    /// PROPERTY: a textile layer does not depend on thickness.
    #[test]
    fn property_textile_ignores_thickness(
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
        area in 0.0f64..1_000.0,
    ) {
        let catalog = MaterialCatalog::standard();
        let thin = layer_footprint(&Layer::new("Géotextile", a), area, &catalog).unwrap();
        let thick = layer_footprint(&Layer::new("Géotextile", b), area, &catalog).unwrap();
        prop_assert_eq!(thin, thick);
    }

    /// PROPERTY: the total does not depend on layer order.
    #[test]
    fn property_total_is_order_independent(
        layers in proptest::collection::vec(any_layer(), 0..8)
            .prop_flat_map(|layers| (Just(layers.clone()), Just(layers).prop_shuffle())),
        area in 0.0f64..500.0,
    ) {
        let catalog = MaterialCatalog::standard();
        let (original, shuffled) = layers;
        let a = Composition::new("A".to_string(), area, original);
        let b = Composition::new("B".to_string(), area, shuffled);
        prop_assert!(close(
            total_footprint(&a, &catalog).unwrap(),
            total_footprint(&b, &catalog).unwrap()
        ));
    }

    /// PROPERTY: the total row sums the composition rows.
    #[test]
    fn property_total_row_is_consistent(
        entries in proptest::collection::vec(
            (proptest::collection::vec(any_layer(), 1..5), 0.0f64..1_000.0),
            1..5,
        ),
    ) {
        let catalog = MaterialCatalog::standard();
        let compositions: Vec<_> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (layers, area))| Composition::new(format!("C{i}"), area, layers))
            .collect();
        let report = compare(&compositions, &catalog).unwrap();

        let sum: f64 = report.rows.iter().map(|r| r.total_footprint).sum();
        let area: f64 = report.rows.iter().map(|r| r.surface_area).sum();
        prop_assert!(close(report.total.total_footprint, sum));
        prop_assert!(close(report.total.surface_area, area));
        match report.total.footprint_per_area {
            Some(per_area) => prop_assert!(close(per_area, report.total.total_footprint / area)),
            None => prop_assert_eq!(area, 0.0),
        }
        for row in &report.rows {
            prop_assert_eq!(row.footprint_per_area.is_none(), row.surface_area == 0.0);
        }
    }
}

#[test]
fn scenario_single_gravel_layer() {
    let catalog = MaterialCatalog::standard();
    let composition = Composition::new("Gravier".to_string(), 10.0, vec![Layer::new("Gravier", 20.0)]);
    let factor = resolve_layer_factor(&composition.layers[0], &catalog).unwrap();
    assert!(close(factor.value(), 26.415));
    assert!(close(
        footprint_from_factor(factor, 20.0, 10.0),
        52.83
    ));
    assert!(close(total_footprint(&composition, &catalog).unwrap(), 53.69));
}

#[test]
fn scenario_sand_versus_cement_joint() {
    let catalog = MaterialCatalog::standard();
    let (thickness, area) = (8.0, 25.0);
    let sand = Layer::new("Pavé béton préfabriquée", thickness)
        .with_joint(pavecarbon_domain::JointType::Sand);
    let cement = Layer::new("Pavé béton préfabriquée", thickness)
        .with_joint(pavecarbon_domain::JointType::Cement);

    let sand_fp = layer_footprint(&sand, area, &catalog).unwrap();
    let cement_fp = layer_footprint(&cement, area, &catalog).unwrap();
    let expected = (1550.0 * 0.26 - 1500.0 * 0.01565) * 0.05 * thickness / 100.0 * area;
    assert!(sand_fp < cement_fp);
    assert!(close(cement_fp - sand_fp, expected));
}

#[test]
fn scenario_zero_area_in_comparison() {
    let mut session = CompositionSession::default();
    let empty = session.create_composition("Revêtement béton").unwrap().id.clone();
    let real = session.create_composition("Revêtement bitumineux").unwrap().id.clone();
    session.set_surface_area(&empty, 0.0).unwrap();
    session.set_surface_area(&real, 12.0).unwrap();

    let report = session.compute_comparison().unwrap();
    assert!(report.rows[0].footprint_per_area.is_none());
    assert_eq!(report.rows[0].total_footprint, 0.0);
    let total = &report.total;
    assert_eq!(total.surface_area, 12.0);
    assert!(close(
        total.footprint_per_area.unwrap(),
        report.rows[1].total_footprint / 12.0
    ));
}

#[test]
fn duplicate_matches_then_diverges() {
    let mut session = CompositionSession::default();
    let id = session.create_composition("Revêtement pavé en pierre naturelle").unwrap().id.clone();
    session.set_surface_area(&id, 40.0).unwrap();
    let copy = session.duplicate_composition(&id).unwrap().id.clone();

    let report = session.compute_comparison().unwrap();
    assert_eq!(report.rows[0].total_footprint, report.rows[1].total_footprint);
    assert_eq!(report.rows[0].footprint_per_area, report.rows[1].footprint_per_area);

    session
        .update_layer(&copy, 0, LayerUpdate::material("Dalle en pierre"))
        .unwrap();
    let after = session.compute_comparison().unwrap();
    assert_eq!(after.rows[0].total_footprint, report.rows[0].total_footprint);
    assert_ne!(after.rows[1].total_footprint, report.rows[1].total_footprint);
}

#[test]
fn every_template_computes() {
    let mut session = CompositionSession::default();
    let names: Vec<String> = session.list_templates().iter().map(|t| t.name.clone()).collect();
    for name in &names {
        session.create_composition(name).unwrap();
    }
    let report = session.compute_comparison().unwrap();
    assert_eq!(report.rows.len(), names.len());
    for row in &report.rows {
        assert!(row.total_footprint.is_finite() && row.total_footprint > 0.0, "{}", row.name);
    }
    assert!(session.catalog().contains("Indéfini"));
}

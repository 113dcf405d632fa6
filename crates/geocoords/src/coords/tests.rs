use super::*;
use crate::geometry::GeometryKind;
use proptest::prelude::*;
use serde_json::json;

fn line(pts: &[[f64; 2]]) -> Vec<Coordinate> {
    pts.iter().map(|p| p.to_vec()).collect()
}

fn square() -> Vec<Coordinate> {
    line(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]])
}

fn all(source: CoordinateSource<'_>) -> Vec<Coordinate> {
    extract(source).unwrap().try_collect().unwrap()
}

#[test]
fn feature_point_yields_single_coordinate() {
    let f = Feature::from_geometry(Geometry::Point {
        coordinates: vec![1.0, 2.0],
    });
    assert_eq!(all((&f).into()), vec![vec![1.0, 2.0]]);
}

#[test]
fn linestring_yields_in_order() {
    let g = Geometry::LineString {
        coordinates: line(&[[0.0, 0.0], [1.0, 1.0]]),
    };
    assert_eq!(all((&g).into()), line(&[[0.0, 0.0], [1.0, 1.0]]));
}

#[test]
fn polygon_includes_closing_vertex() {
    let g = Geometry::Polygon {
        coordinates: vec![square()],
    };
    let out = all((&g).into());
    assert_eq!(out, square());
    assert_eq!(out.first(), out.last());
}

#[test]
fn multipolygon_and_collection_are_depth_first() {
    let mp = Geometry::MultiPolygon {
        coordinates: vec![
            vec![square(), line(&[[0.2, 0.2], [0.4, 0.2], [0.2, 0.4], [0.2, 0.2]])],
            vec![line(&[[5.0, 5.0], [6.0, 5.0], [5.0, 6.0], [5.0, 5.0]])],
        ],
    };
    let out = all((&mp).into());
    assert_eq!(out.len(), 5 + 4 + 4);
    assert_eq!(out[5], vec![0.2, 0.2]);
    assert_eq!(out[9], vec![5.0, 5.0]);

    let gc = Geometry::GeometryCollection {
        geometries: vec![
            Geometry::Point {
                coordinates: vec![9.0, 9.0],
            },
            mp.clone(),
        ],
    };
    let out_gc = all((&gc).into());
    assert_eq!(out_gc[0], vec![9.0, 9.0]);
    assert_eq!(&out_gc[1..], out.as_slice());
}

#[test]
fn raw_nests_of_any_depth() {
    let flat: Nested = vec![3.0, 4.0, 5.0].into();
    assert_eq!(all((&flat).into()), vec![vec![3.0, 4.0, 5.0]]);

    let deep: Nested =
        serde_json::from_value(json!([[[[1, 2], [3, 4]]], [[[5, 6]]], []])).unwrap();
    assert_eq!(
        all((&deep).into()),
        line(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])
    );

    let empty = Nested::List(vec![]);
    assert!(all((&empty).into()).is_empty());
}

#[test]
fn empty_branches_yield_nothing() {
    let g = Geometry::MultiLineString {
        coordinates: vec![vec![], line(&[[1.0, 1.0]]), vec![]],
    };
    assert_eq!(all((&g).into()), vec![vec![1.0, 1.0]]);
}

#[test]
fn unresolvable_sources_fail_up_front() {
    let null_geometry = Feature::default();
    assert!(matches!(
        extract(&null_geometry),
        Err(GeoError::MalformedGeometryInput { .. })
    ));
    let scalar = Nested::Number(1.0);
    assert!(matches!(
        extract(&scalar),
        Err(GeoError::MalformedGeometryInput { .. })
    ));
}

#[test]
fn mixed_level_fails_after_partial_output() {
    // [[1, 2], [[3, 4], 5]]: (1,2) is fine, then the second level mixes kinds.
    let mixed: Nested = serde_json::from_value(json!([[1, 2], [[3, 4], 5]])).unwrap();
    let items: Vec<_> = extract(&mixed).unwrap().collect();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Ok(vec![1.0, 2.0]));
    assert_eq!(items[1], Ok(vec![3.0, 4.0]));
    assert!(matches!(
        items[2],
        Err(GeoError::MalformedGeometryInput { .. })
    ));

    let mut it = extract(&mixed).unwrap();
    assert!(it.by_ref().any(|r| r.is_err()));
    assert!(it.next().is_none());
}

#[test]
fn level_starting_with_a_number_rejects_later_sequences() {
    // [1, [2]]: the first item makes this a leaf level, so nothing is emitted.
    let mixed: Nested = serde_json::from_value(json!([1, [2]])).unwrap();
    let mut it = extract(&mixed).unwrap();
    assert!(matches!(
        it.next(),
        Some(Err(GeoError::MalformedGeometryInput { .. }))
    ));
    assert!(it.next().is_none());

    // Nested under a valid sibling, the sibling still comes out first.
    let nested: Nested = serde_json::from_value(json!([[0, 0], [1, [2]], [3, 3]])).unwrap();
    let items: Vec<_> = extract(&nested).unwrap().collect();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Ok(vec![0.0, 0.0]));
    assert!(items[1].is_err());
}

#[test]
fn early_termination_and_fresh_restart() {
    let g = Geometry::Polygon {
        coordinates: vec![square()],
    };
    let first_two: Vec<_> = extract(&g).unwrap().take(2).collect::<GeoResult<_>>().unwrap();
    assert_eq!(first_two, line(&[[0.0, 0.0], [1.0, 0.0]]));
    // A fresh call starts over.
    assert_eq!(extract(&g).unwrap().count(), 5);
    assert_eq!(g.coords().count(), 5);
}

#[test]
fn map_point_and_polygon() {
    let p = Geometry::Point {
        coordinates: vec![1.0, 2.0],
    };
    assert_eq!(
        map_coords(|x| x * 10.0, &p).unwrap(),
        Geometry::Point {
            coordinates: vec![10.0, 20.0]
        }
    );

    let poly = Geometry::Polygon {
        coordinates: vec![square()],
    };
    let shifted = map_coords(|x| x + 1.0, &poly).unwrap();
    assert_eq!(shifted.kind(), GeometryKind::Polygon);
    match shifted {
        Geometry::Polygon { coordinates } => {
            assert_eq!(coordinates.len(), 1);
            assert_eq!(coordinates[0][2], vec![2.0, 2.0]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn map_leaves_input_untouched() {
    let poly = Geometry::Polygon {
        coordinates: vec![square()],
    };
    let before = poly.clone();
    let _ = map_coords(|x| -x, &poly).unwrap();
    assert_eq!(poly, before);
}

#[test]
fn map_rejects_collections() {
    let gc = Geometry::GeometryCollection { geometries: vec![] };
    assert_eq!(
        map_coords(|x| x, &gc),
        Err(GeoError::UnsupportedGeometryType {
            kind: "GeometryCollection".into()
        })
    );
}

#[test]
fn map_tuples_can_change_arity() {
    let ls = Geometry::LineString {
        coordinates: line(&[[1.0, 2.0], [3.0, 4.0]]),
    };
    let with_alt = map_tuples(|c| vec![c[0], c[1], 100.0], &ls).unwrap();
    assert!(with_alt.coords().all(|c| c.len() == 3 && c[2] == 100.0));
}

fn coordinate() -> impl Strategy<Value = Coordinate> {
    prop::collection::vec(-180.0f64..180.0, 2..=3)
}

fn curve() -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(coordinate(), 0..6)
}

fn curves() -> impl Strategy<Value = Vec<Vec<Coordinate>>> {
    prop::collection::vec(curve(), 0..4)
}

fn any_geometry() -> impl Strategy<Value = Geometry> {
    prop_oneof![
        coordinate().prop_map(|coordinates| Geometry::Point { coordinates }),
        curve().prop_map(|coordinates| Geometry::LineString { coordinates }),
        curve().prop_map(|coordinates| Geometry::MultiPoint { coordinates }),
        curves().prop_map(|coordinates| Geometry::Polygon { coordinates }),
        curves().prop_map(|coordinates| Geometry::MultiLineString { coordinates }),
        prop::collection::vec(curves(), 0..3)
            .prop_map(|coordinates| Geometry::MultiPolygon { coordinates }),
    ]
}

/// Same nesting and counts, with every component zeroed.
fn shape(g: &Geometry) -> Geometry {
    map_tuples(|c| vec![0.0; c.len()], g).unwrap()
}

proptest! {
    #[test]
    fn map_identity_is_structural_identity(g in any_geometry()) {
        prop_assert_eq!(map_coords(|x| x, &g).unwrap(), g);
    }

    #[test]
    fn map_preserves_shape(g in any_geometry(), k in -3.0f64..3.0) {
        let mapped = map_coords(|x| x * k + 1.0, &g).unwrap();
        prop_assert_eq!(mapped.kind(), g.kind());
        prop_assert_eq!(shape(&mapped), shape(&g));
    }

    #[test]
    fn extract_commutes_with_map(g in any_geometry()) {
        let mapped = map_coords(|x| x / 2.0, &g).unwrap();
        let lhs: Vec<Coordinate> = mapped.coords().collect();
        let rhs: Vec<Coordinate> = g
            .coords()
            .map(|c| c.into_iter().map(|x| x / 2.0).collect())
            .collect();
        prop_assert_eq!(lhs, rhs);
    }
}

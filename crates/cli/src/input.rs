//! Reading CLI input into one of the three coordinate-source shapes.

use anyhow::{Context, Result};
use geocoords::prelude::{CoordinateSource, Feature, Geometry, Nested};
use serde_json::Value;
use std::io::Read;

/// Parsed input, classified in priority order: raw array, then feature
/// (an object with a `geometry` key), then geometry.
#[derive(Debug)]
pub enum Input {
    Raw(Nested),
    Feature(Feature),
    Geometry(Geometry),
}

impl Input {
    /// Read JSON from a file path, or stdin for `-`.
    pub fn read(path: &str) -> Result<Self> {
        let text = if path == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        } else {
            std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?
        };
        let value: Value =
            serde_json::from_str(&text).with_context(|| format!("parsing JSON from {path}"))?;
        Self::classify(value)
    }

    pub fn classify(value: Value) -> Result<Self> {
        let has_geometry = value
            .as_object()
            .map_or(false, |obj| obj.contains_key("geometry"));
        let input = if value.is_array() {
            Self::Raw(serde_json::from_value(value).context("raw coordinates")?)
        } else if has_geometry {
            Self::Feature(serde_json::from_value(value).context("feature")?)
        } else {
            Self::Geometry(serde_json::from_value(value).context("geometry")?)
        };
        Ok(input)
    }

    pub fn source(&self) -> CoordinateSource<'_> {
        match self {
            Self::Raw(n) => n.into(),
            Self::Feature(f) => f.into(),
            Self::Geometry(g) => g.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geocoords::prelude::extract;
    use serde_json::json;

    fn coords_of(v: Value) -> Vec<Vec<f64>> {
        let input = Input::classify(v).unwrap();
        extract(input.source()).unwrap().try_collect().unwrap()
    }

    #[test]
    fn classifies_in_priority_order() {
        assert!(matches!(
            Input::classify(json!([[1, 2]])).unwrap(),
            Input::Raw(_)
        ));
        assert!(matches!(
            Input::classify(json!({"type": "Feature", "geometry": null})).unwrap(),
            Input::Feature(_)
        ));
        assert!(matches!(
            Input::classify(json!({"type": "Point", "coordinates": [1, 2]})).unwrap(),
            Input::Geometry(_)
        ));
        assert!(Input::classify(json!({"type": "Circle"})).is_err());
    }

    #[test]
    fn extracts_from_each_shape() {
        assert_eq!(
            coords_of(json!({"geometry": {"type": "Point", "coordinates": [1, 2]}})),
            vec![vec![1.0, 2.0]]
        );
        assert_eq!(
            coords_of(json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]})),
            vec![vec![0.0, 0.0], vec![1.0, 1.0]]
        );
        assert_eq!(coords_of(json!([[[5, 6]]])), vec![vec![5.0, 6.0]]);
    }
}

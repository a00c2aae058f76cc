use crate::domain::GeoPoint;
use crate::domain::marker::Marker;
use crate::domain::polygon::Polygon;
use crate::map_canvas::MapSnapshot;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};

/// Renders a snapshot as a GeoJSON FeatureCollection. Positions are `[longitude, latitude]`.
pub fn to_feature_collection(snapshot: &MapSnapshot, generated_at: DateTime<Utc>) -> Value {
    let features: Vec<Value> = snapshot
        .markers
        .iter()
        .map(marker_feature)
        .chain(snapshot.polygons.iter().map(polygon_feature))
        .collect();

    json!({
        "type": "FeatureCollection",
        "properties": {
            "style": snapshot.style,
            "generated_at": generated_at.to_rfc3339(),
        },
        "features": features,
    })
}

fn position(point: &GeoPoint) -> Value {
    json!([point.longitude, point.latitude])
}

fn marker_feature(marker: &Marker) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": position(&marker.position) },
        "properties": { "title": marker.title },
    })
}

/// Rings of polygons with fewer than three vertices are not valid LinearRings. They are kept as drawn
/// and flagged with a `degenerate` property.
fn polygon_feature(polygon: &Polygon) -> Value {
    // A ring is closed by repeating its first position
    let ring: Vec<Value> = polygon.vertices.iter().chain(polygon.vertices.first()).map(position).collect();

    json!({
        "type": "Feature",
        "geometry": { "type": "Polygon", "coordinates": [ring] },
        "properties": {
            "fill": polygon.fill_color.to_string(),
            "degenerate": polygon.is_degenerate(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Color;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn snapshot(markers: Vec<Marker>, polygons: Vec<Polygon>) -> MapSnapshot {
        MapSnapshot {
            style: "streets".to_string(),
            markers,
            polygons,
            camera: None,
        }
    }

    #[test]
    fn empty_map_has_no_features() {
        let value = to_feature_collection(&snapshot(vec![], vec![]), generated_at());

        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "properties": { "style": "streets", "generated_at": "2024-05-01T12:00:00+00:00" },
                "features": [],
            })
        );
    }

    #[test]
    fn markers_become_points_in_lon_lat_order() {
        let marker = Marker::new(GeoPoint::new(10.0, -20.0), "marker 0");

        let value = to_feature_collection(&snapshot(vec![marker], vec![]), generated_at());

        assert_eq!(
            value["features"][0],
            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-20.0, 10.0] },
                "properties": { "title": "marker 0" },
            })
        );
    }

    #[test]
    fn polygon_rings_are_closed() {
        let polygon = Polygon::new(
            vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 10.0), GeoPoint::new(10.0, 10.0)],
            Color::RGB(98, 0, 238),
        );

        let value = to_feature_collection(&snapshot(vec![], vec![polygon]), generated_at());

        assert_eq!(
            value["features"][0],
            json!({
                "type": "Feature",
                "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]]] },
                "properties": { "fill": "#6200ee", "degenerate": false },
            })
        );
    }

    #[test]
    fn empty_polygon_has_an_empty_ring() {
        let polygon = Polygon::new(vec![], Color::Hex("#6200ee".to_string()));

        let value = to_feature_collection(&snapshot(vec![], vec![polygon]), generated_at());

        assert_eq!(value["features"][0]["geometry"]["coordinates"], json!([[]]));
        assert_eq!(value["features"][0]["properties"]["degenerate"], true);
    }

    #[test]
    fn polygons_below_three_vertices_are_flagged_degenerate() {
        let polygon = Polygon::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(5.0, 5.0)], Color::RGB(98, 0, 238));

        let value = to_feature_collection(&snapshot(vec![], vec![polygon]), generated_at());

        assert_eq!(
            value["features"][0],
            json!({
                "type": "Feature",
                "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [5.0, 5.0], [0.0, 0.0]]] },
                "properties": { "fill": "#6200ee", "degenerate": true },
            })
        );
    }

    #[test]
    fn markers_come_before_polygons() {
        let marker = Marker::new(GeoPoint::new(1.0, 1.0), "marker 0");
        let polygon = Polygon::new(vec![GeoPoint::new(2.0, 2.0)], Color::RGB(0, 0, 0));

        let value = to_feature_collection(&snapshot(vec![marker], vec![polygon]), generated_at());

        assert_eq!(value["features"][0]["geometry"]["type"], "Point");
        assert_eq!(value["features"][1]["geometry"]["type"], "Polygon");
    }
}

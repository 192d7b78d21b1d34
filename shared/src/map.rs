//! Projection of province coordinates onto the landing page map.
//!
//! The map is a flat equirectangular canvas over the Indonesian archipelago.
//! Zoom levels follow web-map conventions: every level halves the visible
//! span.

use crate::models::Province;

/// Westernmost longitude on the canvas.
pub const WEST: f64 = 94.0;
/// Easternmost longitude on the canvas.
pub const EAST: f64 = 142.0;
/// Northernmost latitude on the canvas.
pub const NORTH: f64 = 6.5;
/// Southernmost latitude on the canvas.
pub const SOUTH: f64 = -11.5;

/// Canvas width in SVG user units.
pub const CANVAS_WIDTH: f64 = 960.0;
/// Canvas height in SVG user units.
pub const CANVAS_HEIGHT: f64 = CANVAS_WIDTH * (NORTH - SOUTH) / (EAST - WEST);

/// Zoom level that shows the whole canvas.
pub const OVERVIEW_ZOOM: u8 = 5;
/// Zoom level used after clicking a province.
pub const PROVINCE_ZOOM: u8 = 8;

/// Where the map is looking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFocus {
    /// Centre latitude.
    pub lat: f64,
    /// Centre longitude.
    pub lng: f64,
    /// Web-map zoom level.
    pub zoom: u8,
}

impl Default for MapFocus {
    fn default() -> Self {
        Self {
            lat: -2.5,
            lng: 118.0,
            zoom: OVERVIEW_ZOOM,
        }
    }
}

impl MapFocus {
    /// Focus on a province pin, or `None` when it has no coordinates.
    pub fn on_province(province: &Province) -> Option<Self> {
        province.has_coordinates().then_some(Self {
            lat: province.lat,
            lng: province.lng,
            zoom: PROVINCE_ZOOM,
        })
    }

    /// Visible window of the canvas for this focus.
    pub fn view_box(&self) -> ViewBox {
        let scale = f64::from(1u32 << self.zoom.saturating_sub(OVERVIEW_ZOOM).min(16));
        let width = CANVAS_WIDTH / scale;
        let height = CANVAS_HEIGHT / scale;
        let (cx, cy) = project(self.lat, self.lng);

        let x = (cx - width / 2.0).clamp(0.0, CANVAS_WIDTH - width);
        let y = (cy - height / 2.0).clamp(0.0, CANVAS_HEIGHT - height);
        ViewBox {
            x,
            y,
            width,
            height,
        }
    }
}

/// SVG `viewBox` rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl ViewBox {
    /// Attribute value, e.g. `"0 0 960 360"`.
    pub fn to_attr(&self) -> String {
        format!("{:.2} {:.2} {:.2} {:.2}", self.x, self.y, self.width, self.height)
    }

    /// Scale factor relative to the overview, used to keep pins a constant
    /// on-screen size.
    pub fn pin_scale(&self) -> f64 {
        self.width / CANVAS_WIDTH
    }
}

/// Canvas position of a coordinate. Points outside the archipelago bounds
/// are clamped to the canvas edge.
pub fn project(lat: f64, lng: f64) -> (f64, f64) {
    let x = (lng - WEST) / (EAST - WEST) * CANVAS_WIDTH;
    let y = (NORTH - lat) / (NORTH - SOUTH) * CANVAS_HEIGHT;
    (x.clamp(0.0, CANVAS_WIDTH), y.clamp(0.0, CANVAS_HEIGHT))
}

/// A drawable province pin.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPin {
    /// Province behind the pin.
    pub province: Province,
    /// Canvas x.
    pub x: f64,
    /// Canvas y.
    pub y: f64,
}

/// Pins for every province that has coordinates.
pub fn pins(provinces: &[Province]) -> Vec<MapPin> {
    provinces
        .iter()
        .filter(|p| p.has_coordinates())
        .map(|p| {
            let (x, y) = project(p.lat, p.lng);
            MapPin {
                province: p.clone(),
                x,
                y,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn province(id: i64, lat: f64, lng: f64) -> Province {
        Province {
            id,
            name: format!("PROVINSI {id}"),
            article_count: 1,
            lat,
            lng,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn canvas_corners_project_to_edges() {
        let (x, y) = project(NORTH, WEST);
        assert!(close(x, 0.0) && close(y, 0.0));

        let (x, y) = project(SOUTH, EAST);
        assert!(close(x, CANVAS_WIDTH) && close(y, CANVAS_HEIGHT));
    }

    #[test]
    fn overview_shows_whole_canvas() {
        let view = MapFocus::default().view_box();
        assert!(close(view.x, 0.0) && close(view.y, 0.0));
        assert!(close(view.width, CANVAS_WIDTH));
        assert!(close(view.pin_scale(), 1.0));
    }

    #[test]
    fn province_zoom_centres_on_pin() {
        let bali = province(1, -8.3405, 115.092);
        let focus = MapFocus::on_province(&bali).expect("bali has coordinates");
        let view = focus.view_box();
        let (px, py) = project(bali.lat, bali.lng);

        assert!(close(view.width, CANVAS_WIDTH / 8.0));
        assert!(close(view.x + view.width / 2.0, px));
        assert!(close(view.y + view.height / 2.0, py));
    }

    #[test]
    fn zoomed_view_is_clamped_inside_canvas() {
        let aceh = province(2, 4.6951, 96.7494);
        let view = MapFocus::on_province(&aceh).expect("coordinates").view_box();

        assert!(view.x >= 0.0 && view.y >= 0.0);
        assert!(view.x + view.width <= CANVAS_WIDTH + 1e-9);
        assert!(view.y + view.height <= CANVAS_HEIGHT + 1e-9);
    }

    #[test]
    fn provinces_without_coordinates_get_no_pin() {
        let provinces = vec![province(1, -8.34, 115.09), province(2, 0.0, 0.0)];
        let pins = pins(&provinces);

        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].province.id, 1);
        assert!(MapFocus::on_province(&provinces[1]).is_none());
    }

    #[test]
    fn one_zero_coordinate_still_gets_a_pin() {
        let provinces = vec![province(20, 0.0, 109.3)];
        assert_eq!(pins(&provinces).len(), 1);
        assert!(MapFocus::on_province(&provinces[0]).is_some());
    }
}

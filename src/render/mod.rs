pub mod animator;

use egui::Pos2;

/// Sample an axis-aligned ellipse outline as a closed polyline.
/// egui has no ellipse primitive, so orbit outlines are drawn from
/// sampled points.
pub fn ellipse_points(center: Pos2, radius_x: f32, radius_y: f32, segments: usize) -> Vec<Pos2> {
    (0..segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * std::f32::consts::TAU;
            Pos2::new(center.x + radius_x * t.cos(), center.y + radius_y * t.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_points_lie_on_the_ellipse() {
        let center = Pos2::new(400.0, 300.0);
        let (rx, ry) = (120.0, 95.0);
        let points = ellipse_points(center, rx, ry, 64);
        assert_eq!(points.len(), 64);
        for p in points {
            let nx = (p.x - center.x) / rx;
            let ny = (p.y - center.y) / ry;
            assert!((nx * nx + ny * ny - 1.0).abs() < 1e-4);
        }
    }
}

//! # Demo Outlines
//!
//! Fixed outlines used to exercise the generator by hand: a square block, a
//! concave star and a "cheese" slab with four square holes.
//!
//! The cheese holes sit strictly inside the slab. Holes that touch the
//! outline are not supported by the bridging cut.

use glam::DVec2;

/// 3×3 square block, clockwise.
pub fn box_outline() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 3.0),
        DVec2::new(3.0, 3.0),
        DVec2::new(3.0, 0.0),
    ]
}

/// Ten-point concave star, clockwise. Shoelace area 13.5.
pub fn star_outline() -> Vec<DVec2> {
    vec![
        DVec2::new(3.5, 6.5),
        DVec2::new(4.5, 4.5),
        DVec2::new(6.0, 5.0),
        DVec2::new(5.0, 2.5),
        DVec2::new(5.5, 1.0),
        DVec2::new(3.5, 2.0),
        DVec2::new(1.5, 1.0),
        DVec2::new(2.0, 2.5),
        DVec2::new(1.0, 5.0),
        DVec2::new(2.5, 4.5),
    ]
}

/// 6×4 slab, clockwise.
pub fn cheese_outline() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(0.0, 4.0),
        DVec2::new(6.0, 4.0),
        DVec2::new(6.0, 0.0),
    ]
}

/// Four 1×1 holes for [`cheese_outline`], leaving an area of 20.
pub fn cheese_holes() -> Vec<Vec<DVec2>> {
    [(0.5, 0.5), (2.0, 1.0), (3.5, 2.5), (4.75, 0.5)]
        .into_iter()
        .map(|(x, y)| unit_square_at(DVec2::new(x, y)))
        .collect()
}

fn unit_square_at(corner: DVec2) -> Vec<DVec2> {
    vec![
        corner,
        corner + DVec2::new(0.0, 1.0),
        corner + DVec2::new(1.0, 1.0),
        corner + DVec2::new(1.0, 0.0),
    ]
}

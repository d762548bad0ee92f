//! Distance and angle primitives over normalized landmarks.

use super::landmark::Landmark;

/// Euclidean distance between two landmarks.
#[must_use]
pub fn distance(p1: &Landmark, p2: &Landmark) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// Unsigned angle at `b`, in degrees, between rays `b -> a` and `b -> c`.
///
/// Always in `[0, 180]`. Coincident points are not special-cased: the
/// result is then whatever `atan2(0, 0)` yields, which is finite.
#[must_use]
pub fn angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let degrees = radians.to_degrees().abs();
    if degrees <= 180.0 {
        degrees
    } else {
        360.0 - degrees
    }
}

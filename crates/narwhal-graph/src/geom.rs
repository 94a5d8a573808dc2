//! 2D points, segments and the segment contact predicate used for visibility.
//!
//! All predicates are exact in the sense that no epsilon is applied: orientation is the sign of
//! a cross product and equality is bitwise on the coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable 2D point.
///
/// Equality and hashing compare the raw bits of both coordinates, so `-0.0` and `0.0` are
/// distinct and a NaN coordinate equals itself. This keeps `Point` usable as a map key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Orientation of the ordered triple `(a, b, c)`.
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross > 0.0 {
        Orientation::CounterClockwise
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// How a segment meets another one, seen from the first segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No common point.
    None,
    /// Exactly one common point, and it is an endpoint of the first segment.
    Endpoint,
    /// Exactly one common point strictly inside the first segment.
    Interior,
    /// The segments are collinear and share a stretch of positive length.
    Overlap,
}

impl Contact {
    fn worst(self, other: Contact) -> Contact {
        fn rank(c: Contact) -> u8 {
            match c {
                Contact::None => 0,
                Contact::Endpoint => 1,
                Contact::Interior => 2,
                Contact::Overlap => 3,
            }
        }
        if rank(other) > rank(self) { other } else { self }
    }
}

/// An ordered pair of points. Used for obstacles and for candidate lines of sight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn length_squared(&self) -> f64 {
        self.start.distance_squared(&self.end)
    }

    /// Bounding-box test; only meaningful for a point already known to be collinear.
    fn spans(&self, p: Point) -> bool {
        p.x >= self.start.x.min(self.end.x)
            && p.x <= self.start.x.max(self.end.x)
            && p.y >= self.start.y.min(self.end.y)
            && p.y <= self.start.y.max(self.end.y)
    }

    fn is_endpoint(&self, p: Point) -> bool {
        p == self.start || p == self.end
    }

    /// General segment intersection: true when the segments share at least one point,
    /// touching included.
    pub fn intersects(&self, other: &Segment) -> bool {
        self.contact(other) != Contact::None
    }

    /// Classifies how `other` meets `self`.
    pub fn contact(&self, other: &Segment) -> Contact {
        if self.is_degenerate() {
            let on_other = orientation(other.start, other.end, self.start)
                == Orientation::Collinear
                && other.spans(self.start);
            return if on_other {
                Contact::Endpoint
            } else {
                Contact::None
            };
        }

        let o1 = orientation(self.start, self.end, other.start);
        let o2 = orientation(self.start, self.end, other.end);

        if o1 == Orientation::Collinear && o2 == Orientation::Collinear {
            return self.collinear_contact(other);
        }

        let o3 = orientation(other.start, other.end, self.start);
        let o4 = orientation(other.start, other.end, self.end);

        if o1 != o2 && o3 != o4 && [o1, o2, o3, o4].iter().all(|o| *o != Orientation::Collinear)
        {
            return Contact::Interior;
        }

        let mut contact = Contact::None;
        for (o, p) in [(o1, other.start), (o2, other.end)] {
            if o == Orientation::Collinear && self.spans(p) {
                contact = contact.worst(if self.is_endpoint(p) {
                    Contact::Endpoint
                } else {
                    Contact::Interior
                });
            }
        }
        for (o, p) in [(o3, self.start), (o4, self.end)] {
            if o == Orientation::Collinear && other.spans(p) {
                contact = contact.worst(Contact::Endpoint);
            }
        }
        contact
    }

    fn collinear_contact(&self, other: &Segment) -> Contact {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len2 = dx * dx + dy * dy;
        let project = |p: Point| (p.x - self.start.x) * dx + (p.y - self.start.y) * dy;

        let a = project(other.start);
        let b = project(other.end);
        let lo = a.min(b).max(0.0);
        let hi = a.max(b).min(len2);

        if lo > hi {
            Contact::None
        } else if lo == hi {
            if lo == 0.0 || lo == len2 {
                Contact::Endpoint
            } else {
                Contact::Interior
            }
        } else {
            Contact::Overlap
        }
    }

    /// Visibility boundary policy: a line of sight is blocked by an obstacle on an interior
    /// crossing, an interior touch, or a collinear overlap. Meeting the obstacle only at one
    /// of the line's own endpoints does not block.
    pub fn is_blocked_by(&self, obstacle: &Segment) -> bool {
        matches!(
            self.contact(obstacle),
            Contact::Interior | Contact::Overlap
        )
    }
}

impl From<((f64, f64), (f64, f64))> for Segment {
    fn from((a, b): ((f64, f64), (f64, f64))) -> Self {
        Segment::new(a.into(), b.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    #[test]
    fn orientation_signs() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        assert_eq!(orientation(a, b, Point::new(0.0, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(a, b, Point::new(0.0, -1.0)), Orientation::Clockwise);
        assert_eq!(orientation(a, b, Point::new(5.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn proper_crossing_is_interior() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        assert_eq!(s.contact(&seg(0.0, 2.0, 2.0, 0.0)), Contact::Interior);
        assert!(s.intersects(&seg(0.0, 2.0, 2.0, 0.0)));
    }

    #[test]
    fn shared_endpoint_is_endpoint_contact() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(s.contact(&seg(2.0, 0.0, 3.0, 5.0)), Contact::Endpoint);
        assert!(!s.is_blocked_by(&seg(2.0, 0.0, 3.0, 5.0)));
    }

    #[test]
    fn obstacle_tip_inside_segment_is_interior() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_eq!(s.contact(&seg(2.0, 0.0, 2.0, 3.0)), Contact::Interior);
    }

    #[test]
    fn segment_ending_on_obstacle_wall_is_endpoint() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(s.contact(&seg(2.0, -1.0, 2.0, 1.0)), Contact::Endpoint);
    }

    #[test]
    fn collinear_cases() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_eq!(s.contact(&seg(1.0, 0.0, 2.0, 0.0)), Contact::Overlap);
        assert_eq!(s.contact(&seg(3.0, 0.0, 9.0, 0.0)), Contact::Overlap);
        assert_eq!(s.contact(&seg(4.0, 0.0, 9.0, 0.0)), Contact::Endpoint);
        assert_eq!(s.contact(&seg(5.0, 0.0, 9.0, 0.0)), Contact::None);
        assert_eq!(s.contact(&seg(-3.0, 0.0, -1.0, 0.0)), Contact::None);
    }

    #[test]
    fn degenerate_obstacle() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_eq!(s.contact(&seg(2.0, 0.0, 2.0, 0.0)), Contact::Interior);
        assert_eq!(s.contact(&seg(0.0, 0.0, 0.0, 0.0)), Contact::Endpoint);
        assert_eq!(s.contact(&seg(2.0, 1.0, 2.0, 1.0)), Contact::None);
    }

    #[test]
    fn parallel_segments_do_not_meet() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_eq!(s.contact(&seg(0.0, 1.0, 4.0, 1.0)), Contact::None);
    }

    #[test]
    fn point_equality_is_bitwise() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
        assert_ne!(Point::new(0.0, 0.0), Point::new(-0.0, 0.0));
        assert_eq!(Point::new(1.26, -3.0).to_string(), "(1.3, -3.0)");
        assert_eq!(Point::new(0.0, 0.0).distance_to(&Point::new(3.0, 4.0)), 5.0);
    }
}

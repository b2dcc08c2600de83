//! Axis-aligned hit boxes and the `Collidable` capability.

use crate::command::Commands;
use crate::object::ObjectId;
use crate::Vector;

/// Hit box dimensions. The box is centered on its owner's position, so it
/// moves with the object without holding any reference to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub width: f64,
    pub height: f64,
}

impl HitBox {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bounds of this box anchored at `center`.
    pub fn bounds(&self, center: Vector) -> Aabb {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        Aabb {
            min_x: center.x - hw,
            min_y: center.y - hh,
            max_x: center.x + hw,
            max_y: center.y + hh,
        }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Aabb {
    /// Closed-interval intersection: boxes sharing only an edge overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Read-only view of the other party in a collision, captured before
/// either participant's callback runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Handle of the object that owns the hit box.
    pub owner: ObjectId,
    /// Role tag, e.g. "Ball" or "Wall".
    pub name: &'static str,
    pub bounds: Aabb,
    pub position: Vector,
    pub velocity: Vector,
    pub immutable: bool,
}

/// Participation in named collision logic.
///
/// The physics pass only detects and dispatches. Any response, such as
/// flipping a velocity, is up to the implementor. World-level effects go
/// through `commands` and are applied once the pass is over.
pub trait Collidable {
    /// Role tag other objects match against.
    fn name(&self) -> &'static str;

    /// Fired once when this object starts overlapping `other`.
    fn collision(&mut self, _other: &Contact, _commands: &mut Commands) {}

    /// Fired once per tick for every tick this object overlaps `other`.
    fn touch(&mut self, _other: &Contact, _commands: &mut Commands) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Aabb {
        HitBox::new(size, size).bounds(Vector::xy(x, y))
    }

    #[test]
    fn bounds_are_centered_on_anchor() {
        let b = HitBox::new(20.0, 10.0).bounds(Vector::xy(100.0, 50.0));
        assert_eq!(b.min_x, 90.0);
        assert_eq!(b.max_x, 110.0);
        assert_eq!(b.min_y, 45.0);
        assert_eq!(b.max_y, 55.0);
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 10.0);
    }

    #[test]
    fn overlapping_boxes_intersect() {
        assert!(square(0.0, 0.0, 10.0).overlaps(&square(5.0, 5.0, 10.0)));
    }

    #[test]
    fn touching_edges_count_as_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 0.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        assert!(!square(0.0, 0.0, 10.0).overlaps(&square(10.5, 0.0, 10.0)));
        assert!(!square(0.0, 0.0, 10.0).overlaps(&square(0.0, -10.5, 10.0)));
    }
}

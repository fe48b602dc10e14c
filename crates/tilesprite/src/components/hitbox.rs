//! Edge hitboxes: four thin hitboxes along an instance's border.
//!
//! The hitboxes tile the border ring of the bounding rectangle and leave an
//! `inset`-wide interior uncovered. They are geometry only; collision
//! resolution happens elsewhere.

use crate::api::types::Rect;

/// Which edge a hitbox sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HitboxSide {
    Top = 0,
    Left = 1,
    Right = 2,
    Bottom = 3,
}

impl HitboxSide {
    pub const COUNT: usize = 4;
    pub const ALL: [HitboxSide; Self::COUNT] = [
        HitboxSide::Top,
        HitboxSide::Left,
        HitboxSide::Right,
        HitboxSide::Bottom,
    ];
}

/// The four edge hitboxes of one instance, indexed by [`HitboxSide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hitboxes([Rect; HitboxSide::COUNT]);

impl Hitboxes {
    /// Derive the hitboxes for a bounding rectangle.
    pub fn from_bounds(bounds: Rect, inset: i32) -> Self {
        let Rect { x, y, w, h } = bounds;
        let side_h = h - 2 * inset;
        Self([
            Rect::new(x, y, w, inset),
            Rect::new(x, y + inset, inset, side_h),
            Rect::new(x + w - inset, y + inset, inset, side_h),
            Rect::new(x, y + h - inset, w, inset),
        ])
    }

    pub fn get(&self, side: HitboxSide) -> Rect {
        self.0[side as usize]
    }

    pub fn top(&self) -> Rect {
        self.get(HitboxSide::Top)
    }

    pub fn left(&self) -> Rect {
        self.get(HitboxSide::Left)
    }

    pub fn right(&self) -> Rect {
        self.get(HitboxSide::Right)
    }

    pub fn bottom(&self) -> Rect {
        self.get(HitboxSide::Bottom)
    }

    /// Iterate (side, rect) in Top, Left, Right, Bottom order.
    pub fn iter(&self) -> impl Iterator<Item = (HitboxSide, Rect)> + '_ {
        HitboxSide::ALL.into_iter().map(move |side| (side, self.get(side)))
    }

    /// Sides whose hitbox overlaps `other`.
    pub fn touching(&self, other: &Rect) -> impl Iterator<Item = HitboxSide> + '_ {
        let other = *other;
        self.iter()
            .filter(move |(_, r)| r.intersects(&other))
            .map(|(side, _)| side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hitboxes_for_32px_object() {
        let hb = Hitboxes::from_bounds(Rect::new(100, 100, 32, 32), 8);
        assert_eq!(hb.top(), Rect::new(100, 100, 32, 8));
        assert_eq!(hb.left(), Rect::new(100, 108, 8, 16));
        assert_eq!(hb.right(), Rect::new(124, 108, 8, 16));
        assert_eq!(hb.bottom(), Rect::new(100, 124, 32, 8));
    }

    #[test]
    fn formulas_hold_across_sizes() {
        for (x, y) in [(0, 0), (-40, 17), (1000, -3)] {
            for w in [16, 17, 32, 48, 100] {
                for h in [16, 24, 64] {
                    let hb = Hitboxes::from_bounds(Rect::new(x, y, w, h), 8);
                    assert_eq!(hb.top(), Rect::new(x, y, w, 8));
                    assert_eq!(hb.left(), Rect::new(x, y + 8, 8, h - 16));
                    assert_eq!(hb.right(), Rect::new(x + w - 8, y + 8, 8, h - 16));
                    assert_eq!(hb.bottom(), Rect::new(x, y + h - 8, w, 8));
                    assert!(hb.left().h >= 0);
                }
            }
        }
    }

    #[test]
    fn hitboxes_leave_interior_uncovered() {
        let hb = Hitboxes::from_bounds(Rect::new(0, 0, 32, 32), 8);
        let interior = Rect::new(8, 8, 16, 16);
        assert_eq!(hb.touching(&interior).count(), 0);
    }

    #[test]
    fn touching_reports_sides() {
        let hb = Hitboxes::from_bounds(Rect::new(0, 0, 32, 32), 8);
        // Floor tile under the object's bottom edge.
        let floor = Rect::new(0, 28, 64, 16);
        let sides: Vec<_> = hb.touching(&floor).collect();
        assert_eq!(sides, vec![HitboxSide::Bottom]);
    }
}

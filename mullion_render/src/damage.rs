// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial damage tracking for partial repaints.

use alloc::vec::Vec;

use kurbo::Rect;
use mullion_core::geometry::PixelRect;

/// The part of the window a paint request has to cover.
///
/// The compositor skips plan items that do not overlap the region, so a
/// host that only exposes a strip of the frame only pays for that strip.
#[derive(Clone, Debug, Default)]
pub enum DamageRegion {
    /// The whole window needs repainting.
    #[default]
    Full,
    /// A list of axis-aligned rectangles in window pixels.
    Rects(Vec<Rect>),
    /// Nothing changed.
    None,
}

impl DamageRegion {
    /// A region made of one pixel rectangle.
    #[must_use]
    pub fn from_rect(rect: PixelRect) -> Self {
        Self::Rects(alloc::vec![rect.to_kurbo()])
    }

    /// Returns `true` if no region needs repainting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Full => false,
            Self::Rects(rects) => rects.iter().all(|r| r.area() <= 0.0),
        }
    }

    /// Returns `true` if `rect` overlaps the region by a positive area.
    #[must_use]
    pub fn intersects(&self, rect: &PixelRect) -> bool {
        if !rect.is_valid() {
            return false;
        }
        match self {
            Self::Full => true,
            Self::None => false,
            Self::Rects(rects) => {
                let r = rect.to_kurbo();
                rects.iter().any(|d| d.intersect(r).area() > 0.0)
            }
        }
    }

    /// Merges another damage region into this one.
    pub fn merge(&mut self, other: &Self) {
        match (&*self, other) {
            (Self::Full, _) | (_, Self::Full) => *self = Self::Full,
            (Self::None, _) => *self = other.clone(),
            (_, Self::None) => {}
            (Self::Rects(a), Self::Rects(b)) => {
                let mut merged = a.clone();
                merged.extend_from_slice(b);
                *self = Self::Rects(merged);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_none() {
        let r = PixelRect::new(0, 0, 4, 4);
        assert!(DamageRegion::Full.intersects(&r), "full covers everything");
        assert!(!DamageRegion::None.intersects(&r), "none covers nothing");
        assert!(DamageRegion::None.is_empty(), "none is empty");
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let damage = DamageRegion::from_rect(PixelRect::new(0, 0, 10, 10));
        assert!(damage.intersects(&PixelRect::new(9, 9, 5, 5)), "corner pixel shared");
        assert!(!damage.intersects(&PixelRect::new(10, 0, 5, 5)), "edge only touches");
    }

    #[test]
    fn invalid_rects_never_intersect() {
        assert!(!DamageRegion::Full.intersects(&PixelRect::new(0, 0, 0, 5)));
    }

    #[test]
    fn merge_rules() {
        let mut d = DamageRegion::None;
        d.merge(&DamageRegion::from_rect(PixelRect::new(0, 0, 1, 1)));
        assert!(matches!(&d, DamageRegion::Rects(r) if r.len() == 1));
        d.merge(&DamageRegion::from_rect(PixelRect::new(5, 5, 1, 1)));
        assert!(matches!(&d, DamageRegion::Rects(r) if r.len() == 2));
        d.merge(&DamageRegion::None);
        assert!(matches!(&d, DamageRegion::Rects(r) if r.len() == 2));
        d.merge(&DamageRegion::Full);
        assert!(matches!(d, DamageRegion::Full));
    }
}

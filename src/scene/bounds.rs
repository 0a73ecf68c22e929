use glam::DVec3;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(DVec3::ZERO, DVec3::ZERO)
    }
}

impl BoundingBox {
    /// Box spanning the two corners.
    #[must_use]
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Box from `[xmin, ymin, zmin, xmax, ymax, zmax]` extents.
    #[must_use]
    pub fn from_extents(e: [f64; 6]) -> Self {
        Self::new(DVec3::new(e[0], e[1], e[2]), DVec3::new(e[3], e[4], e[5]))
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: DVec3) -> BoundingBox {
        BoundingBox {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_negative() {
        let bb = BoundingBox::from_extents([-2.0, -4.0, -6.0, 2.0, 4.0, 6.0]);
        assert_eq!(bb.center(), DVec3::ZERO);
        assert_eq!(bb.size(), DVec3::new(4.0, 8.0, 12.0));
    }

    #[test]
    fn test_union_non_overlapping() {
        let a = BoundingBox::new(DVec3::ZERO, DVec3::ONE);
        let b = BoundingBox::new(DVec3::splat(2.0), DVec3::splat(3.0));
        let union = a.union(&b);
        assert_eq!(union.min, DVec3::ZERO);
        assert_eq!(union.max, DVec3::splat(3.0));
    }

    #[test]
    fn test_translated() {
        let bb = BoundingBox::new(DVec3::ZERO, DVec3::ONE)
            .translated(DVec3::new(1.0, 0.0, -1.0));
        assert_eq!(bb.min, DVec3::new(1.0, 0.0, -1.0));
        assert_eq!(bb.max, DVec3::new(2.0, 1.0, 0.0));
    }
}

use crate::Vec3;

/// Axis-aligned bounds over a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Bounds of all points, or `None` when the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |mut b, p| {
            b.expand(p);
            b
        }))
    }

    /// Grow the bounds to include `p`.
    #[inline]
    pub fn expand(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Per-axis `|max - min|`.
    #[inline]
    pub fn extent(&self) -> Vec3 {
        (self.max - self.min).abs()
    }

    /// Per-axis midpoint `(max + min) / 2`.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.max + self.min) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn empty_points_have_no_bounds() {
        assert_eq!(Bounds3::from_points(std::iter::empty()), None);
    }

    #[test]
    fn single_point_is_degenerate() {
        let b = Bounds3::from_points([vec3(1.0, -2.0, 3.0)]).unwrap();
        assert_eq!(b.min, b.max);
        assert_eq!(b.extent(), Vec3::ZERO);
        assert_eq!(b.center(), vec3(1.0, -2.0, 3.0));
    }

    #[test]
    fn extent_and_center_per_axis() {
        let b = Bounds3::from_points([
            vec3(0.0, 0.0, 0.0),
            vec3(4.0, -1.0, 2.0),
            vec3(-2.0, 3.0, 2.0),
        ])
        .unwrap();
        assert_eq!(b.min, vec3(-2.0, -1.0, 0.0));
        assert_eq!(b.max, vec3(4.0, 3.0, 2.0));
        assert_eq!(b.extent(), vec3(6.0, 4.0, 2.0));
        assert_eq!(b.center(), vec3(1.0, 1.0, 1.0));
    }
}

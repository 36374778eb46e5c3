//! # Bounding Volumes
//!
//! Axis-aligned bounding rectangle for 2D shapes and an enclosing sphere for
//! 3D vertex buffers.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned 2D rectangle, stored as its lower-left corner and extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingRectangle {
    /// Minimum x
    pub x: f64,
    /// Minimum y
    pub y: f64,
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
}

impl BoundingRectangle {
    /// Computes the rectangle enclosing `points`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use volume_outline::BoundingRectangle;
    ///
    /// let rect = BoundingRectangle::from_points(&[DVec2::new(-1.0, 2.0), DVec2::new(3.0, 5.0)]);
    /// assert_eq!((rect.x, rect.y, rect.width, rect.height), (-1.0, 2.0, 4.0, 3.0));
    /// ```
    pub fn from_points(points: &[DVec2]) -> Self {
        let mut rect = Self::default();
        rect.fit_points(points);
        rect
    }

    /// Recomputes this rectangle in place to enclose `points`.
    ///
    /// An empty slice yields the zero rectangle.
    pub fn fit_points(&mut self, points: &[DVec2]) {
        let Some(&first) = points.first() else {
            *self = Self::default();
            return;
        };

        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));

        self.x = min.x;
        self.y = min.y;
        self.width = max.x - min.x;
        self.height = max.y - min.y;
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// A sphere enclosing a set of points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// Sphere center
    pub center: DVec3,
    /// Sphere radius
    pub radius: f64,
}

impl BoundingSphere {
    /// Computes an enclosing sphere for `points`.
    ///
    /// Runs Ritter's single-pass algorithm alongside the naive box-centered
    /// sphere and keeps whichever is smaller. An empty slice yields the zero
    /// sphere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use volume_outline::BoundingSphere;
    ///
    /// let sphere = BoundingSphere::from_points(&[DVec3::new(-1.0, 0.0, 0.0), DVec3::X]);
    /// assert_eq!(sphere.center, DVec3::ZERO);
    /// assert_eq!(sphere.radius, 1.0);
    /// ```
    pub fn from_points(points: &[DVec3]) -> Self {
        Self::enclose(points.iter().copied())
    }

    /// Computes an enclosing sphere for a flat `[x, y, z, x, y, z, ...]` buffer.
    ///
    /// Trailing values that do not form a full point are ignored.
    pub fn from_flat_positions(positions: &[f64]) -> Self {
        Self::enclose(
            positions
                .chunks_exact(3)
                .map(|c| DVec3::new(c[0], c[1], c[2])),
        )
    }

    fn enclose<I>(points: I) -> Self
    where
        I: Iterator<Item = DVec3> + Clone,
    {
        let mut iter = points.clone();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        // Extreme points along each axis
        let mut x_min = first;
        let mut x_max = first;
        let mut y_min = first;
        let mut y_max = first;
        let mut z_min = first;
        let mut z_max = first;
        let mut box_min = first;
        let mut box_max = first;

        for p in iter {
            if p.x < x_min.x {
                x_min = p;
            }
            if p.x > x_max.x {
                x_max = p;
            }
            if p.y < y_min.y {
                y_min = p;
            }
            if p.y > y_max.y {
                y_max = p;
            }
            if p.z < z_min.z {
                z_min = p;
            }
            if p.z > z_max.z {
                z_max = p;
            }
            box_min = box_min.min(p);
            box_max = box_max.max(p);
        }

        // Seed Ritter's sphere with the widest axis-extreme pair
        let spans = [
            (x_max.distance_squared(x_min), x_min, x_max),
            (y_max.distance_squared(y_min), y_min, y_max),
            (z_max.distance_squared(z_min), z_min, z_max),
        ];
        let (_, dia1, dia2) = spans
            .into_iter()
            .fold(spans[0], |best, span| if span.0 > best.0 { span } else { best });

        let mut ritter_center = (dia1 + dia2) * 0.5;
        let mut ritter_radius = dia2.distance(ritter_center);
        let mut ritter_radius_squared = ritter_radius * ritter_radius;

        let naive_center = (box_min + box_max) * 0.5;
        let mut naive_radius: f64 = 0.0;

        for p in points {
            naive_radius = naive_radius.max(p.distance(naive_center));

            let old_center_to_point_squared = p.distance_squared(ritter_center);
            if old_center_to_point_squared > ritter_radius_squared {
                let old_center_to_point = old_center_to_point_squared.sqrt();
                ritter_radius = (ritter_radius + old_center_to_point) * 0.5;
                ritter_radius_squared = ritter_radius * ritter_radius;
                let old_to_new = old_center_to_point - ritter_radius;
                ritter_center =
                    (ritter_center * ritter_radius + p * old_to_new) / old_center_to_point;
            }
        }

        if ritter_radius < naive_radius {
            Self {
                center: ritter_center,
                radius: ritter_radius,
            }
        } else {
            Self {
                center: naive_center,
                radius: naive_radius,
            }
        }
    }

    /// Returns true if `point` lies within `radius + epsilon` of the center.
    #[inline]
    pub fn contains(&self, point: DVec3, epsilon: f64) -> bool {
        point.distance(self.center) <= self.radius + epsilon
    }
}

#[cfg(test)]
mod tests;

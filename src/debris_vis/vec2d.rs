use num::Num;
use num::traits::real::Real;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A 2-D point or offset, generic over the numeric type.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Vec2D<T> {
    x: T,
    y: T,
}

impl<T: Copy> Vec2D<T> {
    pub const fn new(x: T, y: T) -> Self { Self { x, y } }

    pub const fn x(&self) -> T { self.x }

    pub const fn y(&self) -> T { self.y }
}

impl<T> Vec2D<T>
where T: Real
{
    /// Euclidean distance to another point.
    pub fn euclid_distance(&self, other: &Self) -> T {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl<T: Num + Copy> Add for Vec2D<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}

impl<T: Num + Copy> Sub for Vec2D<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}

impl<T: Num + Copy> Mul<T> for Vec2D<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}

impl<T: fmt::Display> fmt::Display for Vec2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

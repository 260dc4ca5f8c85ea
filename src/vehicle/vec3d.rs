use num::traits::{Num, NumAssignOps, real::Real};
use serde::Serialize;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 3D vector generic over any numeric type.
///
/// Used for position, velocity, acceleration and orientation of the vehicle.
/// All components share the same unit, the vector itself carries none.
#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize)]
pub struct Vec3D<T> {
    /// The x-component of the vector.
    x: T,
    /// The y-component of the vector, "up" at the launch site.
    y: T,
    /// The z-component of the vector.
    z: T,
}

impl<T: Copy> Vec3D<T> {
    /// Creates a new vector with the given components.
    pub const fn new(x: T, y: T, z: T) -> Self { Self { x, y, z } }

    pub const fn x(&self) -> T { self.x }
    pub const fn y(&self) -> T { self.y }
    pub const fn z(&self) -> T { self.z }

    pub fn set_y(&mut self, y: T) { self.y = y; }
}

impl<T: Num + Copy> Vec3D<T> {
    /// Returns the zero vector.
    pub fn zero() -> Self { Self::new(T::zero(), T::zero(), T::zero()) }

    /// Computes the dot product of two vectors.
    pub fn dot(self, other: Self) -> T { self.x * other.x + self.y * other.y + self.z * other.z }
}

impl<T> Vec3D<T>
where
    T: Real + NumAssignOps,
{
    /// Computes the euclidean norm of the vector.
    pub fn abs(&self) -> T { self.dot(*self).sqrt() }
}

impl<T: Num + Copy> Add for Vec3D<T> {
    type Output = Vec3D<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Num + NumAssignOps + Copy> AddAssign for Vec3D<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Num + Copy> Sub for Vec3D<T> {
    type Output = Vec3D<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Num + Copy> Mul<T> for Vec3D<T> {
    type Output = Vec3D<T>;

    fn mul(self, rhs: T) -> Self::Output { Self::new(self.x * rhs, self.y * rhs, self.z * rhs) }
}

impl<T: Neg<Output = T> + Copy> Neg for Vec3D<T> {
    type Output = Vec3D<T>;

    fn neg(self) -> Self::Output { Self { x: -self.x, y: -self.y, z: -self.z } }
}

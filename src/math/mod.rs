/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Homogeneous control point `(x, y, z, w)`.
pub type Point4 = nalgebra::Point4<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

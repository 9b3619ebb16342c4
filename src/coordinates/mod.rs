pub mod angle;
pub mod cartesian;
pub mod geographic;
pub mod rotation;
pub mod sphere;

pub use cartesian::CartesianPoint;
pub use geographic::GeographicPoint;
pub use rotation::AxisRotation;
pub use sphere::ReferenceSphere;

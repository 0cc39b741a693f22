mod make_route_curve;

pub use make_route_curve::{ImportOptions, MakeRouteCurve};

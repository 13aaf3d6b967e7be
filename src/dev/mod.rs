/// Development utilities module
///
/// Screenshot capture and a built-in demo data set, available with the
/// `development` feature.

pub mod demo_source;
pub mod screenshot;

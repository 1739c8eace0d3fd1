pub(crate) mod ease;
pub(crate) mod interpolate;
pub mod ops;
pub(crate) mod random;
pub(crate) mod spring;

pub mod ease;
pub mod sequence;
pub mod spring;
pub mod timing;

pub mod bbox;
pub mod extent;
pub mod normalize;
pub mod overlap;
pub mod point;

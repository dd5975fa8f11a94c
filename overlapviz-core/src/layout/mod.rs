pub mod element;
pub mod group;

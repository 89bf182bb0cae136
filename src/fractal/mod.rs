pub mod background;
pub mod subdivide;

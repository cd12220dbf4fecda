pub mod align;
pub mod placement;

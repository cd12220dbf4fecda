pub mod context;
pub mod state;

pub mod attributes;
pub mod contract;
pub mod error;
mod median;
pub mod msg;
pub mod state;

pub use median::median;

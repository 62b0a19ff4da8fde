pub mod keyed;
pub mod harvest;

// Re-exports
pub use keyed::*;
pub use harvest::*;

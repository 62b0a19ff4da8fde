pub mod transaction_context;
pub mod scoped_iterator;
pub mod exist_by_key;
pub mod create_from_payload;
pub mod load;
pub mod load_all;

// Re-exports
pub use transaction_context::*;
pub use scoped_iterator::*;
pub use exist_by_key::*;
pub use create_from_payload::*;
pub use load::*;
pub use load_all::*;

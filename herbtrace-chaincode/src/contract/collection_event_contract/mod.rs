pub mod repo_impl;
#[cfg(test)]
pub mod test_utils;
pub mod exist_by_key;
pub mod create_from_payload;
pub mod load;
pub mod load_all;

pub use repo_impl::CollectionEventContract;

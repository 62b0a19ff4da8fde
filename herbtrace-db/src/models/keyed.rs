/// Trait for records filed in world state under a string key
pub trait Keyed {
    /// Returns the key the record is stored under
    fn ledger_key(&self) -> &str;
}

//! Dirty-region bookkeeping and backing-store save/restore.

/// Scoped save/restore over a screen-sized backing buffer.
pub mod backing;
/// The compositor that owns the ledger and the backing buffer.
pub mod compositor;
/// Bounded dirty-rectangle ledger.
pub mod ledger;

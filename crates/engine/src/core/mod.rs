//! Replacement engine internals.
//!
//! The engine is built from three pieces:
//! 1. **Page/frame tables** ([`page`]): per-page metadata and the inverted
//!    frame table, kept in bijection at all times.
//! 2. **Future-use index** ([`future`]): per-page queues of upcoming trace
//!    positions, consumed only by the OPT policy.
//! 3. **Policies** ([`policies`]): the four interchangeable eviction
//!    algorithms behind a common fault/hit interface.

/// Future-use queues for the clairvoyant policy.
pub mod future;
/// Address translation, page entries, and the residency tables.
pub mod page;
/// Eviction policies (OPT, CLOCK, AGING, WORKING_SET_CLOCK).
pub mod policies;

//! Provide the fixed-seed hasher used by [`Map`](crate::Map).
//!
//! Based on `foldhash`, with a fixed seed so hash results depend only on
//! the input. Keyed containers stay reproducible across runs and builds.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHashState

/// The fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x51B9_D2F4_A03C_6E85);

/// A hasher whose results depend only on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`], created through
/// [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state with a fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use dw_value::FixedHashState;
///
/// let mut hasher = FixedHashState.build_hasher();
/// "level1".hash(&mut hasher);
/// let result = hasher.finish(); // same result on every run
/// # let _ = result;
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

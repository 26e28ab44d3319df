//! Strongly typed, zero-cost identifier wrappers.
//!
//! The inner integer is `pub` so records can be indexed directly via
//! `id.0 as usize`, but callers should prefer the `.index()` helper for
//! clarity.

use std::fmt;

/// Generate a typed ID wrapper around `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a node in the graph arena.
    pub struct NodeId;
}

typed_id! {
    /// Stable index of an edge in the graph arena.  Distinct from the
    /// multigraph identity `(from, to, key)` carried on the edge record.
    pub struct EdgeId;
}

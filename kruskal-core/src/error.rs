//! Error types for the Kruskal core library.
//!
//! Defines the iterator error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while driving a [`crate::KruskalIterator`].
///
/// Both variants are terminal for the iterator that raised them. Neither is
/// retried internally; they surface at the offending call.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum KruskalError {
    /// `next_edge` was called after the iterator ran out of forest edges.
    #[error("the Kruskal iterator has no remaining edges")]
    Exhausted,
    /// The graph gained a node or an edge after the iterator was created.
    #[error(
        "graph was modified after the iterator was created \
         (expected modification count {expected}, found {found})"
    )]
    ConcurrentModification {
        /// Modification count captured when the iterator was created.
        expected: u64,
        /// Modification count observed on the offending call.
        found: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`KruskalError`] variants.
    enum KruskalErrorCode for KruskalError {
        /// The iterator has no remaining edges.
        Exhausted => Exhausted => "KRUSKAL_ITERATOR_EXHAUSTED",
        /// The graph was structurally modified under the iterator.
        ConcurrentModification => ConcurrentModification { .. } => "KRUSKAL_CONCURRENT_MODIFICATION",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KruskalError>;

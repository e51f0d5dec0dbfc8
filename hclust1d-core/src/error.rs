//! Error types for the hclust1d core library.
//!
//! Defines the error enums exposed by the public API, their stable codes, and
//! a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while turning a distance matrix into 1-D coordinates.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DistanceError {
    /// Reconstruction needs at least two points.
    #[error("a distance matrix needs at least two points (got {got})")]
    TooFewPoints {
        /// Number of points the caller declared.
        got: usize,
    },
    /// The condensed vector length does not match `n * (n - 1) / 2`.
    #[error("condensed distance vector has length {len} but {expected} entries were expected")]
    CondensedLengthMismatch {
        /// Length of the supplied condensed vector.
        len: usize,
        /// Length implied by the declared point count.
        expected: usize,
    },
    /// A distance was negative or not finite.
    #[error("distance at condensed index {index} is invalid: {value}")]
    InvalidDistance {
        /// Position of the offending entry in the condensed vector.
        index: usize,
        /// The rejected value.
        value: f64,
    },
    /// A squared distance was negative, so it has no real square root.
    #[error("a negative value {value} was found at index {index} of a squared distance matrix")]
    NegativeSquaredDistance {
        /// Position of the offending entry in the condensed vector.
        index: usize,
        /// The rejected value.
        value: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`DistanceError`] variants.
    enum DistanceErrorCode for DistanceError {
        /// Reconstruction needs at least two points.
        TooFewPoints => TooFewPoints { .. } => "DISTANCE_TOO_FEW_POINTS",
        /// The condensed vector length does not match the point count.
        CondensedLengthMismatch => CondensedLengthMismatch { .. } => "DISTANCE_CONDENSED_LENGTH_MISMATCH",
        /// A distance was negative or not finite.
        InvalidDistance => InvalidDistance { .. } => "DISTANCE_INVALID_VALUE",
        /// A squared distance was negative.
        NegativeSquaredDistance => NegativeSquaredDistance { .. } => "DISTANCE_NEGATIVE_SQUARED",
    }
}

/// Error type produced when configuring or running [`crate::Hclust1d`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Hclust1dError {
    /// Clustering requires at least two points.
    #[error("clustering requires at least two points (got {got})")]
    InsufficientPoints {
        /// Number of points supplied by the caller.
        got: usize,
    },
    /// A coordinate was NaN or infinite.
    #[error("point {index} is not finite: {value}")]
    NonFinitePoint {
        /// Index of the offending point in input order.
        index: usize,
        /// The rejected coordinate.
        value: f64,
    },
    /// Labels were supplied but their count differs from the point count.
    #[error("{labels} labels were supplied for {points} points")]
    LabelCountMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of labels supplied.
        labels: usize,
    },
    /// The linkage method selector was not recognised.
    #[error("unknown linkage method `{name}`; expected one of {}", crate::LinkageMethod::supported_names())]
    UnknownMethod {
        /// The selector as supplied by the caller.
        name: String,
    },
    /// Distance-matrix input could not be turned into coordinates.
    #[error("distance input rejected: {0}")]
    Distance(#[from] DistanceError),
}

define_error_codes! {
    /// Stable codes describing [`Hclust1dError`] variants.
    enum Hclust1dErrorCode for Hclust1dError {
        /// Clustering requires at least two points.
        InsufficientPoints => InsufficientPoints { .. } => "HCLUST1D_INSUFFICIENT_POINTS",
        /// A coordinate was NaN or infinite.
        NonFinitePoint => NonFinitePoint { .. } => "HCLUST1D_NON_FINITE_POINT",
        /// Labels were supplied with the wrong length.
        LabelCountMismatch => LabelCountMismatch { .. } => "HCLUST1D_LABEL_COUNT_MISMATCH",
        /// The linkage method selector was not recognised.
        UnknownMethod => UnknownMethod { .. } => "HCLUST1D_UNKNOWN_METHOD",
        /// Distance-matrix input could not be turned into coordinates.
        DistanceFailure => Distance(..) => "HCLUST1D_DISTANCE_FAILURE",
    }
}

impl Hclust1dError {
    /// Retrieve the inner [`DistanceErrorCode`] when the error originated in
    /// distance-matrix handling.
    #[must_use]
    pub const fn distance_code(&self) -> Option<DistanceErrorCode> {
        match self {
            Self::Distance(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, Hclust1dError>;

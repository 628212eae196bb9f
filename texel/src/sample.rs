// Distributed under The MIT License (MIT)
//
// Copyright (c) 2023, 2024 The `rasterimage` developers
use core::fmt;

use self::sealed::{Normalized, Sealed};

/// The representation of a single sample.
///
/// The ordinal of each variant is part of the contract of this type: it is used to compute the
/// index of a runtime image format, see `rasterimage::to_variant_index`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Depth {
    /// An 8-bit unsigned integer, normalized to `0..=0xff`.
    #[default]
    U8,
    /// A 16-bit unsigned integer, normalized to `0..=0xffff`.
    U16,
    /// A 32-bit float, normalized to `0.0..=1.0`.
    F32,
}

/// A single channel value of a pixel.
///
/// This trait is sealed. It is implemented for exactly `u8`, `u16` and `f32`, which allows the
/// rest of the library to dispatch over a closed set of sample representations.
///
/// Integer samples denote a normalized value where `0` is zero and the maximum of the type is
/// one. Float samples denote the value itself, nominally within `[0, 1]`. The range of floats is
/// only checked by debug assertions.
pub trait Sample:
    Sealed
    + bytemuck::Pod
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// The depth tag of this representation.
    const DEPTH: Depth;
    /// The normalized zero.
    const ZERO: Self;
    /// The normalized one, fully opaque when used as alpha.
    const MAX: Self;

    /// Construct a sample from a normalized float.
    ///
    /// This is mainly for writing sample literals independent of the representation. Float samples
    /// return `f` unchanged. Integer samples clamp `f` to `[0, 1]` first and then round
    /// `f * MAX` to the nearest integer.
    fn value_of(f: f32) -> Self;

    /// Multiply two normalized values.
    ///
    /// For integers the product is computed in a type twice as wide and scaled back by `MAX`, so
    /// `MAX * x == x` holds exactly. Float operands must lie within `[0, 1]`.
    fn multiply(self, rhs: Self) -> Self;

    /// Divide one normalized value by another, clamping the result to `MAX`.
    ///
    /// # Panics
    ///
    /// Integer samples panic when `rhs` is zero. For float samples a divisor outside of `(0, 1]`
    /// is a contract violation that is only caught by debug assertions.
    fn divide(self, rhs: Self) -> Self;

    /// Convert to another representation, preserving the normalized value.
    ///
    /// - The same representation is the identity.
    /// - Float to integer multiplies by the integer maximum and truncates.
    /// - Integer to float divides by the integer maximum.
    /// - Integer to integer rescales by the ratio of both maxima in a widened type, truncating.
    fn convert<T: Sample>(self) -> T {
        if Self::DEPTH == T::DEPTH {
            // The set of samples is sealed, equal depths imply equal types.
            return bytemuck::cast(self);
        }

        T::from_normalized(self.into_normalized())
    }
}

mod sealed {
    /// A sample split into the parts that a conversion between representations requires.
    #[derive(Clone, Copy, Debug)]
    pub enum Normalized {
        /// An integer sample widened to `u32`, with the maximum of its original type.
        Int { value: u32, max: u32 },
        Float(f32),
    }

    pub trait Sealed: Sized {
        fn into_normalized(self) -> Normalized;
        fn from_normalized(value: Normalized) -> Self;
    }
}

macro_rules! integer_sample {
    ($($ty:ty = $depth:ident),*) => {
        $(
            impl Sealed for $ty {
                fn into_normalized(self) -> Normalized {
                    Normalized::Int {
                        value: u32::from(self),
                        max: u32::from(<$ty>::MAX),
                    }
                }

                fn from_normalized(value: Normalized) -> Self {
                    match value {
                        // Both values are at most `u16::MAX`, the product fits into `u32`.
                        Normalized::Int { value, max } => {
                            (value * u32::from(<$ty>::MAX) / max) as $ty
                        }
                        // Saturating cast, truncates the fractional part.
                        Normalized::Float(f) => (f * f32::from(<$ty>::MAX)) as $ty,
                    }
                }
            }

            impl Sample for $ty {
                const DEPTH: Depth = Depth::$depth;
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                fn value_of(f: f32) -> Self {
                    let f = f.clamp(0.0, 1.0);
                    libm::roundf(f * f32::from(<$ty>::MAX)) as $ty
                }

                fn multiply(self, rhs: Self) -> Self {
                    let product = u32::from(self) * u32::from(rhs);
                    (product / u32::from(<$ty>::MAX)) as $ty
                }

                fn divide(self, rhs: Self) -> Self {
                    let max = u32::from(<$ty>::MAX);
                    let quotient = u32::from(self) * max / u32::from(rhs);
                    quotient.min(max) as $ty
                }
            }
        )*
    };
}

integer_sample!(u8 = U8, u16 = U16);

impl Sealed for f32 {
    fn into_normalized(self) -> Normalized {
        Normalized::Float(self)
    }

    fn from_normalized(value: Normalized) -> Self {
        match value {
            Normalized::Int { value, max } => value as f32 / max as f32,
            Normalized::Float(f) => f,
        }
    }
}

impl Sample for f32 {
    const DEPTH: Depth = Depth::F32;
    const ZERO: Self = 0.0;
    const MAX: Self = 1.0;

    fn value_of(f: f32) -> Self {
        f
    }

    fn multiply(self, rhs: Self) -> Self {
        debug_assert!((0.0..=1.0).contains(&self), "{self} not normalized");
        debug_assert!((0.0..=1.0).contains(&rhs), "{rhs} not normalized");
        self * rhs
    }

    fn divide(self, rhs: Self) -> Self {
        debug_assert!((0.0..=1.0).contains(&self), "{self} not normalized");
        debug_assert!(0.0 < rhs && rhs <= 1.0, "{rhs} is not a valid divisor");
        (self / rhs).min(1.0)
    }
}

impl Depth {
    /// All depths, in ordinal order.
    pub const ALL: [Depth; 3] = [Depth::U8, Depth::U16, Depth::F32];

    /// The number of distinct depths.
    pub const COUNT: usize = Self::ALL.len();

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Depth::U8),
            1 => Some(Depth::U16),
            2 => Some(Depth::F32),
            _ => None,
        }
    }

    /// The number of bytes of one sample.
    pub const fn bytes(self) -> usize {
        match self {
            Depth::U8 => 1,
            Depth::U16 => 2,
            Depth::F32 => 4,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Depth::F32)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Depth::U8 => "u8",
            Depth::U16 => "u16",
            Depth::F32 => "f32",
        };
        f.write_str(name)
    }
}

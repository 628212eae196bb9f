// Distributed under The MIT License (MIT)
//
// Copyright (c) 2023, 2024 The `rasterimage` developers
use core::{fmt, mem};

use crate::sample::Sample;

/// The channels making up a pixel.
///
/// The channel count is `ordinal() + 1`. Like [`Depth`](crate::Depth), the ordinal is part of the
/// contract and used to index the runtime image formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Format {
    /// Luminance only.
    Grey,
    /// Luminance and alpha.
    GreyAlpha,
    /// Red, green and blue.
    Rgb,
    /// Red, green, blue and alpha.
    #[default]
    Rgba,
}

/// A pixel, a tightly packed array of one to four samples.
///
/// This trait is sealed and implemented for `[S; 1]` through `[S; 4]` for each [`Sample`] type.
/// The arrays have no padding, neither between samples nor between consecutive pixels, which is
/// what allows reinterpreting pixel slices as sample or byte slices.
pub trait Pixel:
    sealed::Sealed + bytemuck::Pod + Default + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// The representation of each channel.
    type Sample: Sample;
    /// A pixel with the same channels but another sample representation.
    type With<S: Sample>: Pixel<Sample = S>;

    /// The number of channels, between one and four.
    const CHANNELS: usize;
    /// The channel semantics of this pixel.
    const FORMAT: Format;

    /// Construct a pixel with all channels set to the same value.
    fn splat(value: Self::Sample) -> Self;

    /// Canonicalize to RGBA.
    ///
    /// Grey is replicated into all color channels. Missing alpha is filled with `MAX`.
    ///
    /// | channels | result |
    /// |----------|--------|
    /// | `[v]` | `[v, v, v, MAX]` |
    /// | `[v, a]` | `[v, v, v, a]` |
    /// | `[r, g, b]` | `[r, g, b, MAX]` |
    /// | `[r, g, b, a]` | `[r, g, b, a]` |
    fn to_rgba(self) -> [Self::Sample; 4];

    /// Get the alpha channel.
    ///
    /// Note the convention for single channel pixels: here the only channel *is* the alpha while
    /// [`Pixel::to_rgba`] treats it as luminance. Both interpretations are in use and they are
    /// deliberately not unified. RGB pixels are fully opaque.
    fn alpha(self) -> Self::Sample;

    /// Convert every channel to another sample representation.
    fn convert<S: Sample>(self) -> Self::With<S>;

    /// View the channels as a slice of samples.
    fn samples(&self) -> &[Self::Sample];

    /// View the channels as a mutable slice of samples.
    fn samples_mut(&mut self) -> &mut [Self::Sample];

    /// Get the channel at `idx`.
    ///
    /// # Panics
    ///
    /// When `idx` is not smaller than [`Pixel::CHANNELS`].
    fn channel(&self, idx: usize) -> Self::Sample {
        self.samples()[idx]
    }

    /// Get a mutable reference to the channel at `idx`, see [`Pixel::channel`].
    fn channel_mut(&mut self, idx: usize) -> &mut Self::Sample {
        &mut self.samples_mut()[idx]
    }
}

/// A pixel with red, green and blue channels.
pub trait ColorPixel: Pixel {
    /// Index of the red channel.
    const RED: usize = 0;
    /// Index of the blue channel.
    const BLUE: usize = 2;

    /// Exchange the red and blue channels, e.g. to go from RGB to BGR order.
    fn swap_red_blue(&mut self) {
        self.samples_mut().swap(Self::RED, Self::BLUE);
    }
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! array_pixel {
    ($n:literal => $format:ident, |$px:ident| rgba = $rgba:expr, alpha = $alpha:expr) => {
        impl<S: Sample> sealed::Sealed for [S; $n] {}

        impl<S: Sample> Pixel for [S; $n] {
            type Sample = S;
            type With<T: Sample> = [T; $n];

            const CHANNELS: usize = $n;
            const FORMAT: Format = Format::$format;

            fn splat(value: S) -> Self {
                [value; $n]
            }

            fn to_rgba(self) -> [S; 4] {
                let $px = self;
                $rgba
            }

            fn alpha(self) -> S {
                let $px = self;
                $alpha
            }

            fn convert<T: Sample>(self) -> Self::With<T> {
                self.map(|sample| sample.convert::<T>())
            }

            fn samples(&self) -> &[S] {
                self
            }

            fn samples_mut(&mut self) -> &mut [S] {
                self
            }
        }
    };
}

array_pixel!(1 => Grey, |px| rgba = [px[0], px[0], px[0], S::MAX], alpha = px[0]);
array_pixel!(2 => GreyAlpha, |px| rgba = [px[0], px[0], px[0], px[1]], alpha = px[1]);
array_pixel!(3 => Rgb, |px| rgba = [px[0], px[1], px[2], S::MAX], alpha = S::MAX);
array_pixel!(4 => Rgba, |px| rgba = px, alpha = px[3]);

impl<S: Sample> ColorPixel for [S; 3] {}
impl<S: Sample> ColorPixel for [S; 4] {}

macro_rules! assert_packed {
    ($($ty:ty),*) => {
        $(
            const _: () = {
                assert!(mem::size_of::<[$ty; 1]>() == mem::size_of::<$ty>());
                assert!(mem::size_of::<[$ty; 2]>() == 2 * mem::size_of::<$ty>());
                assert!(mem::size_of::<[$ty; 3]>() == 3 * mem::size_of::<$ty>());
                assert!(mem::size_of::<[$ty; 4]>() == 4 * mem::size_of::<$ty>());
                assert!(mem::size_of::<[[$ty; 3]; 2]>() == 2 * mem::size_of::<[$ty; 3]>());
            };
        )*
    };
}

assert_packed!(u8, u16, f32);

impl Format {
    /// All formats, in ordinal order.
    pub const ALL: [Format; 4] = [Format::Grey, Format::GreyAlpha, Format::Rgb, Format::Rgba];

    /// The number of distinct formats.
    pub const COUNT: usize = Self::ALL.len();

    pub const fn num_channels(self) -> usize {
        self as usize + 1
    }

    pub const fn ordinal(self) -> usize {
        self as usize
    }

    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Format::Grey),
            1 => Some(Format::GreyAlpha),
            2 => Some(Format::Rgb),
            3 => Some(Format::Rgba),
            _ => None,
        }
    }

    /// The format with the given number of channels.
    pub const fn from_num_channels(channels: usize) -> Option<Self> {
        match channels.checked_sub(1) {
            Some(ordinal) => Self::from_ordinal(ordinal),
            None => None,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Format::GreyAlpha | Format::Rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts() {
        assert_eq!(<[u8; 1]>::CHANNELS, 1);
        assert_eq!(<[u16; 2]>::CHANNELS, 2);
        assert_eq!(<[f32; 3]>::CHANNELS, 3);
        assert_eq!(<[u8; 4]>::CHANNELS, 4);

        for format in Format::ALL {
            assert_eq!(Format::from_num_channels(format.num_channels()), Some(format));
        }

        assert_eq!(Format::from_num_channels(0), None);
        assert_eq!(Format::from_num_channels(5), None);
    }

    #[test]
    fn grey_is_luminance_for_rgba_but_alpha_for_alpha() {
        let grey: [u8; 1] = [0x20];
        assert_eq!(grey.to_rgba(), [0x20, 0x20, 0x20, 0xff]);
        assert_eq!(grey.alpha(), 0x20);
    }

    #[test]
    fn swap_red_blue() {
        let mut px: [u16; 4] = [1, 2, 3, 4];
        px.swap_red_blue();
        assert_eq!(px, [3, 2, 1, 4]);

        let mut px: [f32; 3] = [0.1, 0.2, 0.3];
        px.swap_red_blue();
        assert_eq!(px, [0.3, 0.2, 0.1]);
    }

    #[test]
    fn convert_keeps_channels() {
        let px: [u16; 2] = [0x1000, 0xffff];
        let converted: [u8; 2] = px.convert();
        assert_eq!(converted, [0x0f, 0xff]);
        assert_eq!(<[u8; 3]>::splat(7), [7, 7, 7]);
    }

    #[test]
    fn channel_access() {
        let mut px: [u8; 2] = [0x10, 0x20];
        assert_eq!(px.channel(1), 0x20);
        *px.channel_mut(0) = 0x30;
        assert_eq!(px, [0x30, 0x20]);
    }

    #[test]
    #[should_panic]
    fn channel_out_of_range() {
        let px: [u8; 3] = [0; 3];
        let _ = px.channel(3);
    }
}

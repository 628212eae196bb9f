// Distributed under The MIT License (MIT)
//
// Copyright (c) 2023, 2024 The `rasterimage` developers
//! An image whose pixel type is chosen at runtime.
use rasterimage_texel::{Depth, Format, Pixel, Sample};

use crate::dims::Dimensions;
use crate::image::Image;
use crate::log::{debug, trace};

/// The number of distinct pixel types an [`ImageVariant`] can hold.
pub const VARIANT_COUNT: usize = Format::COUNT * Depth::COUNT;

/// The position of a pixel type among the alternatives of [`ImageVariant`].
///
/// Formats are consecutive within one depth, that is the index is
/// `depth.ordinal() * 4 + format.ordinal()`.
///
/// ```
/// use rasterimage::{to_variant_index, Depth, Format};
///
/// assert_eq!(to_variant_index(Format::Grey, Depth::U8), 0);
/// assert_eq!(to_variant_index(Format::Rgba, Depth::U16), 7);
/// assert_eq!(to_variant_index(Format::Rgb, Depth::F32), 10);
/// ```
pub const fn to_variant_index(format: Format, depth: Depth) -> usize {
    let index = depth.ordinal() * Format::COUNT + format.ordinal();
    assert!(index < VARIANT_COUNT, "Variant index out of range");
    index
}

/// The format and depth at a variant index, the inverse of [`to_variant_index`].
///
/// # Panics
///
/// When `index` is not smaller than [`VARIANT_COUNT`].
pub const fn from_variant_index(index: usize) -> (Format, Depth) {
    assert!(index < VARIANT_COUNT, "Variant index out of range");
    (
        Format::ALL[index % Format::COUNT],
        Depth::ALL[index / Format::COUNT],
    )
}

/// A pixel type that one of the alternatives of [`ImageVariant`] holds.
///
/// This trait is sealed and implemented for every [`Pixel`].
pub trait VariantPixel: Pixel + sealed::Sealed {
    #[doc(hidden)]
    fn into_variant(image: Image<Self>) -> ImageVariant;
    #[doc(hidden)]
    fn from_variant(variant: &ImageVariant) -> Option<&Image<Self>>;
    #[doc(hidden)]
    fn from_variant_mut(variant: &mut ImageVariant) -> Option<&mut Image<Self>>;
    #[doc(hidden)]
    fn from_variant_owned(variant: ImageVariant) -> Result<Image<Self>, ImageVariant>;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! image_variant {
    ($($index:literal => $name:ident($px:ty)),* $(,)?) => {
        /// An owned image of one of the twelve pixel types.
        ///
        /// The alternative is chosen at construction from a [`Format`] and a [`Depth`] and never
        /// changes afterwards. Format and depth are derived from the alternative. Use
        /// [`ImageVariant::get`] to access the statically typed image.
        ///
        /// ```
        /// use rasterimage::{Depth, Dimensions, Format, ImageVariant};
        ///
        /// let mut variant = ImageVariant::new(Dimensions::new(4, 4), Format::Rgb, Depth::U16);
        /// assert_eq!(variant.num_channels(), 3);
        ///
        /// variant.get_mut::<[u16; 3]>()[(1, 1)] = [0xffff, 0, 0];
        /// assert_eq!(variant.get::<[u16; 3]>()[(1, 1)], [0xffff, 0, 0]);
        /// ```
        #[derive(Clone, Debug, PartialEq)]
        pub enum ImageVariant {
            $($name(Image<$px>),)*
        }

        impl ImageVariant {
            /// The index of the active alternative, see [`to_variant_index`].
            pub fn index(&self) -> usize {
                match self {
                    $(ImageVariant::$name(_) => $index,)*
                }
            }
        }

        $(
            const _: () = {
                let format = <$px as Pixel>::FORMAT;
                let depth = <<$px as Pixel>::Sample as Sample>::DEPTH;
                assert!(to_variant_index(format, depth) == $index);
            };

            impl sealed::Sealed for $px {}

            impl VariantPixel for $px {
                fn into_variant(image: Image<Self>) -> ImageVariant {
                    ImageVariant::$name(image)
                }

                fn from_variant(variant: &ImageVariant) -> Option<&Image<Self>> {
                    match variant {
                        ImageVariant::$name(image) => Some(image),
                        _ => None,
                    }
                }

                fn from_variant_mut(variant: &mut ImageVariant) -> Option<&mut Image<Self>> {
                    match variant {
                        ImageVariant::$name(image) => Some(image),
                        _ => None,
                    }
                }

                fn from_variant_owned(variant: ImageVariant) -> Result<Image<Self>, ImageVariant> {
                    match variant {
                        ImageVariant::$name(image) => Ok(image),
                        other => Err(other),
                    }
                }
            }
        )*

        const FACTORIES: [fn(Dimensions) -> ImageVariant; VARIANT_COUNT] = [
            $(factory::<$px>,)*
        ];
    };
}

image_variant! {
    0 => GreyU8([u8; 1]),
    1 => GreyAlphaU8([u8; 2]),
    2 => RgbU8([u8; 3]),
    3 => RgbaU8([u8; 4]),
    4 => GreyU16([u16; 1]),
    5 => GreyAlphaU16([u16; 2]),
    6 => RgbU16([u16; 3]),
    7 => RgbaU16([u16; 4]),
    8 => GreyF32([f32; 1]),
    9 => GreyAlphaF32([f32; 2]),
    10 => RgbF32([f32; 3]),
    11 => RgbaF32([f32; 4]),
}

fn factory<P: VariantPixel>(dims: Dimensions) -> ImageVariant {
    P::into_variant(Image::new(dims))
}

fn mismatch<P: Pixel>(format: Format, depth: Depth) -> ! {
    panic!(
        "Requested a {:?} image of {} but the variant holds {format:?} of {depth}",
        P::FORMAT,
        <P::Sample as Sample>::DEPTH,
    )
}

/// Evaluate an expression with the image of any alternative bound to a name.
macro_rules! with_image {
    ($variant:expr, |$image:ident| $body:expr) => {
        match $variant {
            ImageVariant::GreyU8($image) => $body,
            ImageVariant::GreyAlphaU8($image) => $body,
            ImageVariant::RgbU8($image) => $body,
            ImageVariant::RgbaU8($image) => $body,
            ImageVariant::GreyU16($image) => $body,
            ImageVariant::GreyAlphaU16($image) => $body,
            ImageVariant::RgbU16($image) => $body,
            ImageVariant::RgbaU16($image) => $body,
            ImageVariant::GreyF32($image) => $body,
            ImageVariant::GreyAlphaF32($image) => $body,
            ImageVariant::RgbF32($image) => $body,
            ImageVariant::RgbaF32($image) => $body,
        }
    };
}

impl ImageVariant {
    /// Allocate a zeroed image of the given format and depth.
    pub fn new(dims: Dimensions, format: Format, depth: Depth) -> Self {
        let index = to_variant_index(format, depth);
        trace!("New {dims} image variant {index} ({format:?}, {depth})");
        FACTORIES[index](dims)
    }

    /// The channels of the held pixel type.
    pub fn format(&self) -> Format {
        let (format, _) = from_variant_index(self.index());
        debug_assert_eq!(
            format,
            with_image!(self, |image| image.format()),
            "Variant index disagrees with the format of its image"
        );
        format
    }

    /// The sample representation of the held pixel type.
    pub fn depth(&self) -> Depth {
        let (_, depth) = from_variant_index(self.index());
        debug_assert_eq!(
            depth,
            with_image!(self, |image| image.depth()),
            "Variant index disagrees with the depth of its image"
        );
        depth
    }

    pub fn num_channels(&self) -> usize {
        let channels = self.format().num_channels();
        debug_assert_eq!(
            channels,
            with_image!(self, |image| image.num_channels()),
            "Variant index disagrees with the channels of its image"
        );
        channels
    }

    pub fn dims(&self) -> Dimensions {
        with_image!(self, |image| image.dims())
    }

    pub fn is_empty(&self) -> bool {
        with_image!(self, |image| image.is_empty())
    }

    pub fn as_bytes(&self) -> &[u8] {
        with_image!(self, |image| image.as_bytes())
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        with_image!(self, |image| image.as_bytes_mut())
    }

    /// Get the image, if it has pixel type `P`.
    pub fn try_get<P: VariantPixel>(&self) -> Option<&Image<P>> {
        P::from_variant(self)
    }

    /// Get the mutable image, if it has pixel type `P`.
    pub fn try_get_mut<P: VariantPixel>(&mut self) -> Option<&mut Image<P>> {
        P::from_variant_mut(self)
    }

    /// Get the image with pixel type `P`.
    ///
    /// # Panics
    ///
    /// When the variant holds another pixel type.
    pub fn get<P: VariantPixel>(&self) -> &Image<P> {
        match P::from_variant(self) {
            Some(image) => image,
            None => mismatch::<P>(self.format(), self.depth()),
        }
    }

    /// Get the mutable image with pixel type `P`.
    ///
    /// # Panics
    ///
    /// When the variant holds another pixel type.
    pub fn get_mut<P: VariantPixel>(&mut self) -> &mut Image<P> {
        let (format, depth) = (self.format(), self.depth());
        match P::from_variant_mut(self) {
            Some(image) => image,
            None => mismatch::<P>(format, depth),
        }
    }

    /// Convert the image to another sample representation, keeping its format.
    ///
    /// ```
    /// use rasterimage::{Depth, Dimensions, Format, ImageVariant};
    ///
    /// let variant = ImageVariant::new(Dimensions::new(2, 1), Format::GreyAlpha, Depth::U8);
    /// let float = variant.to_depth(Depth::F32);
    ///
    /// assert_eq!(float.format(), Format::GreyAlpha);
    /// assert_eq!(float.depth(), Depth::F32);
    /// assert_eq!(float.dims(), variant.dims());
    /// ```
    pub fn to_depth(&self, depth: Depth) -> ImageVariant {
        debug!(
            "Converting {} image variant from {} to {depth}",
            self.dims(),
            self.depth()
        );

        with_image!(self, |image| match depth {
            Depth::U8 => image.convert::<u8>().into(),
            Depth::U16 => image.convert::<u16>().into(),
            Depth::F32 => image.convert::<f32>().into(),
        })
    }
}

impl Default for ImageVariant {
    /// An empty image of 8-bit RGBA.
    fn default() -> Self {
        ImageVariant::new(Dimensions::default(), Format::default(), Depth::default())
    }
}

impl<P: VariantPixel> From<Image<P>> for ImageVariant {
    fn from(image: Image<P>) -> Self {
        P::into_variant(image)
    }
}

impl<P: VariantPixel> TryFrom<ImageVariant> for Image<P> {
    type Error = ImageVariant;

    /// Unwrap the image, or return the variant unchanged if it holds another pixel type.
    fn try_from(variant: ImageVariant) -> Result<Self, ImageVariant> {
        P::from_variant_owned(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_match_indices() {
        for (index, factory) in FACTORIES.iter().enumerate() {
            let variant = factory(Dimensions::new(1, 1));
            assert_eq!(variant.index(), index);
            assert_eq!(from_variant_index(index), (variant.format(), variant.depth()));
        }
    }

    #[test]
    fn default_is_empty_rgba8() {
        let variant = ImageVariant::default();
        assert!(variant.is_empty());
        assert!(matches!(variant, ImageVariant::RgbaU8(_)));
    }

    #[test]
    fn typed_access() {
        let mut variant = ImageVariant::new(Dimensions::new(2, 2), Format::Grey, Depth::F32);
        assert!(variant.try_get::<[u8; 1]>().is_none());
        assert!(variant.try_get_mut::<[f32; 2]>().is_none());

        variant.get_mut::<[f32; 1]>().clear([0.5]);
        assert_eq!(variant.as_bytes().len(), 16);

        let image = Image::<[f32; 1]>::try_from(variant).unwrap();
        assert!(image.pixels().iter().all(|&px| px == [0.5]));
    }

    #[test]
    fn owned_mismatch_returns_variant() {
        let variant = ImageVariant::new(Dimensions::new(3, 1), Format::Rgb, Depth::U8);
        let variant = Image::<[u8; 4]>::try_from(variant).unwrap_err();
        assert_eq!(variant.dims(), Dimensions::new(3, 1));
    }

    #[test]
    #[should_panic]
    fn get_mismatch() {
        let variant = ImageVariant::new(Dimensions::new(1, 1), Format::Rgba, Depth::U16);
        let _ = variant.get::<[u8; 4]>();
    }

    #[test]
    #[should_panic]
    fn get_mut_mismatch() {
        let mut variant = ImageVariant::default();
        let _ = variant.get_mut::<[u16; 4]>();
    }
}

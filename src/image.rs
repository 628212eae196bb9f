// Distributed under The MIT License (MIT)
//
// Copyright (c) 2023, 2024 The `rasterimage` developers
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use core::{error, fmt};

use rasterimage_texel::{Depth, Format, Pixel, Sample};

use crate::dims::Dimensions;
use crate::span::{ImageSpan, ImageSpanMut};

/// An owned image with a statically known pixel type.
///
/// The pixels are stored row after row without any gaps, so the image is always contiguous. The
/// dimensions are fixed at construction. Use [`Image::span`] and [`Image::span_mut`] to work on
/// rectangular parts of the image, which may in turn have a stride larger than their width.
///
/// ## Usage
///
/// ```
/// use rasterimage::{Dimensions, Image, Rect};
///
/// let mut image = Image::<[u8; 4]>::filled(Dimensions::new(100, 200), [10, 20, 30, 40]);
///
/// image
///     .span_mut()
///     .sub_span_mut(Rect::new(1, 2, 2, 3))
///     .clear([0; 4]);
///
/// assert_eq!(image[(0, 1)], [10, 20, 30, 40]);
/// assert_eq!(image[(1, 2)], [0, 0, 0, 0]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Image<P> {
    pixels: Vec<P>,
    dims: Dimensions,
}

/// Error representation for pixels that do not fit the requested dimensions.
///
/// Emitted by [`Image::try_from_pixels`]. The rejected pixels can be recovered with
/// [`PixelCountError::into_pixels`], for instance to pad or crop them manually.
///
/// ```
/// use rasterimage::{Dimensions, Image};
///
/// let pixels = vec![[0u8; 3]; 5];
/// let error = Image::try_from_pixels(Dimensions::new(2, 3), pixels).unwrap_err();
///
/// assert_eq!(error.expected(), 6);
/// assert_eq!(error.into_pixels().len(), 5);
/// ```
#[derive(Clone, PartialEq)]
pub struct PixelCountError<P> {
    pixels: Vec<P>,
    dims: Dimensions,
}

impl<P: Pixel> Image<P> {
    /// Allocate an image with all pixels zeroed.
    ///
    /// # Panics
    ///
    /// When the allocation fails.
    pub fn new(dims: Dimensions) -> Self {
        Self::filled(dims, P::default())
    }

    /// Allocate an image with all pixels set to `pixel`.
    ///
    /// # Panics
    ///
    /// When the allocation fails.
    pub fn filled(dims: Dimensions, pixel: P) -> Self {
        Image {
            pixels: alloc::vec![pixel; dims.area()],
            dims,
        }
    }

    /// Wrap row-major pixels into an image.
    ///
    /// # Panics
    ///
    /// When the number of pixels is not exactly `width * height`.
    pub fn from_pixels(dims: Dimensions, pixels: Vec<P>) -> Self {
        match Self::try_from_pixels(dims, pixels) {
            Ok(image) => image,
            Err(err) => panic!("{err}"),
        }
    }

    /// Wrap row-major pixels into an image, if their number matches the dimensions.
    pub fn try_from_pixels(dims: Dimensions, pixels: Vec<P>) -> Result<Self, PixelCountError<P>> {
        if pixels.len() != dims.area() {
            return Err(PixelCountError { pixels, dims });
        }

        Ok(Image { pixels, dims })
    }

    /// Copy an image out of a buffer of samples with padded rows.
    ///
    /// Row `y` of the image is read from the `width * P::CHANNELS` samples starting at
    /// `y * stride`. Padding at the end of each row, and trailing samples after the last row, are
    /// ignored.
    ///
    /// ```
    /// use rasterimage::{Dimensions, Image};
    ///
    /// // Two rows of one RGB pixel each, padded to four samples.
    /// let samples = [1u8, 2, 3, 0, 4, 5, 6, 0];
    /// let image = Image::<[u8; 3]>::make(Dimensions::new(1, 2), &samples, 4);
    /// assert_eq!(image.pixels(), &[[1, 2, 3], [4, 5, 6]]);
    /// ```
    ///
    /// # Panics
    ///
    /// When `stride` is smaller than a row, or `samples` ends before the last row.
    pub fn make(dims: Dimensions, samples: &[P::Sample], stride: usize) -> Self {
        let row_len = dims.width as usize * P::CHANNELS;
        assert!(
            stride >= row_len,
            "Stride {stride} is shorter than a row of {row_len} samples"
        );

        let required = match (dims.height as usize).checked_sub(1) {
            None => 0,
            Some(rows) => rows * stride + row_len,
        };
        assert!(
            samples.len() >= required,
            "A {dims} image with stride {stride} requires {required} samples, got {}",
            samples.len()
        );

        let mut pixels = Vec::with_capacity(dims.area());
        for y in 0..dims.height as usize {
            let row = &samples[y * stride..][..row_len];
            pixels.extend_from_slice(bytemuck::cast_slice::<P::Sample, P>(row));
        }

        Image { pixels, dims }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn num_channels(&self) -> usize {
        P::CHANNELS
    }

    pub fn format(&self) -> Format {
        P::FORMAT
    }

    pub fn depth(&self) -> Depth {
        <P::Sample as Sample>::DEPTH
    }

    /// All pixels, row after row.
    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.pixels)
    }

    /// Get row `y`.
    ///
    /// # Panics
    ///
    /// When `y` is not smaller than the height.
    pub fn row(&self, y: u32) -> &[P] {
        self.span().row(y)
    }

    /// Get row `y` for modification.
    ///
    /// # Panics
    ///
    /// When `y` is not smaller than the height.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.row_start(y);
        &mut self.pixels[start..start + self.dims.width as usize]
    }

    fn row_start(&self, y: u32) -> usize {
        assert!(y < self.dims.height, "Row {y} out of bounds for {}", self.dims);
        y as usize * self.dims.width as usize
    }

    /// A view on the whole image.
    pub fn span(&self) -> ImageSpan<'_, P> {
        ImageSpan::new(&self.pixels, self.dims, self.dims.width as usize)
    }

    /// A mutable view on the whole image.
    pub fn span_mut(&mut self) -> ImageSpanMut<'_, P> {
        let stride = self.dims.width as usize;
        ImageSpanMut::new(&mut self.pixels, self.dims, stride)
    }

    /// Overwrite every pixel.
    pub fn clear(&mut self, pixel: P) {
        self.pixels.fill(pixel);
    }

    /// Convert all pixels to another sample representation, keeping the channels.
    ///
    /// ```
    /// use rasterimage::{Dimensions, Image};
    ///
    /// let image = Image::<[u16; 2]>::filled(Dimensions::new(2, 2), [0xffff, 0x1000]);
    /// let bytes = image.convert::<u8>();
    /// assert!(bytes.pixels().iter().all(|&px| px == [0xff, 0x0f]));
    /// ```
    pub fn convert<S: Sample>(&self) -> Image<P::With<S>> {
        Image {
            pixels: self.pixels.iter().map(|&px| px.convert::<S>()).collect(),
            dims: self.dims,
        }
    }

    /// Mirror the image vertically in place.
    pub fn flip_vertical(&mut self) {
        self.span_mut().flip_vertical();
    }
}

impl<P: Pixel> Default for Image<P> {
    fn default() -> Self {
        Image::new(Dimensions::default())
    }
}

impl<P: Pixel> Index<(u32, u32)> for Image<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        &self.row(y)[x as usize]
    }
}

impl<P: Pixel> IndexMut<(u32, u32)> for Image<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        &mut self.row_mut(y)[x as usize]
    }
}

impl<P: Pixel> fmt::Debug for Image<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Image")
            .field("dims", &self.dims)
            .field("format", &P::FORMAT)
            .field("depth", &<P::Sample as Sample>::DEPTH)
            .finish()
    }
}

impl<P> PixelCountError<P> {
    /// The number of pixels the dimensions require.
    pub fn expected(&self) -> usize {
        self.dims.area()
    }

    /// The number of pixels that were provided.
    pub fn actual(&self) -> usize {
        self.pixels.len()
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Unwrap the original pixels.
    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }
}

impl<P> fmt::Debug for PixelCountError<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PixelCountError")
            .field("dims", &self.dims)
            .field("actual", &self.actual())
            .finish()
    }
}

impl<P> fmt::Display for PixelCountError<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "A {} image requires {} pixels, got {}",
            self.dims,
            self.expected(),
            self.actual()
        )
    }
}

impl<P> error::Error for PixelCountError<P> {}

// Distributed under The MIT License (MIT)
//
// Copyright (c) 2023, 2024 The `rasterimage` developers
//! # Raster images
//!
//! Owned pixel buffers, borrowed strided windows into them, and an image whose pixel type is only
//! known at runtime.
//!
//! - [`Image`] owns row-major pixels of one statically known [`Pixel`] type.
//! - [`ImageSpan`] and [`ImageSpanMut`] view a rectangle of pixels with a row stride that may
//!   exceed their width. They offer the in-place operations: clearing, blitting and flipping.
//! - [`ImageVariant`] holds an [`Image`] of any of the twelve pixel types, chosen at runtime from
//!   a [`Format`] and a [`Depth`].
//!
//! The per-pixel conversions are found in [`ops`].
//!
//! ## Usage
//!
//! ```
//! use rasterimage::{Depth, Dimensions, Format, Image, ImageVariant, Rect};
//!
//! let mut canvas = Image::<[u8; 4]>::filled(Dimensions::new(8, 8), [0, 0, 0, 0xff]);
//! let brush = Image::<[u8; 4]>::filled(Dimensions::new(3, 3), [0xff, 0, 0, 0xff]);
//!
//! // Draw the brush partially beyond the top-left corner.
//! canvas.span_mut().blit(brush.span(), (-1, -1));
//! assert_eq!(canvas[(1, 1)], [0xff, 0, 0, 0xff]);
//! assert_eq!(canvas[(2, 2)], [0, 0, 0, 0xff]);
//!
//! // Swap to BGR order within a window.
//! canvas.span_mut().sub_span_mut(Rect::new(0, 0, 1, 1)).swap_red_blue();
//! assert_eq!(canvas[(0, 0)], [0, 0, 0xff, 0xff]);
//!
//! // Move the image into a runtime typed container.
//! let variant = ImageVariant::from(canvas);
//! assert_eq!((variant.format(), variant.depth()), (Format::Rgba, Depth::U8));
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
// All stride arithmetic is done through slice splitting.
#![deny(unsafe_code)]
extern crate alloc;

mod dims;
mod image;
mod log;
mod span;
mod variant;


pub use rasterimage_texel::{ops, ColorPixel, Depth, Format, Pixel, Sample};

pub use self::dims::{Dimensions, Rect};
pub use self::image::{Image, PixelCountError};
pub use self::span::{ImageSpan, ImageSpanMut, Lines, LinesMut};
pub use self::variant::{
    from_variant_index, to_variant_index, ImageVariant, VariantPixel, VARIANT_COUNT,
};

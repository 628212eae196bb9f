// Distributed under The MIT License (MIT)
//
// Copyright (c) 2023, 2024 The `rasterimage` developers
//! # Texel
//!
//! Sample and pixel types of raster images, and the numeric conversions between them.
//!
//! A *sample* is a single normalized channel value. Exactly three representations exist: `u8` and
//! `u16` denote a value in `[0, MAX]` of the integer type, `f32` denotes a value in `[0, 1]`. A
//! *pixel* is a tightly packed array of one to four samples of a single representation:
//!
//! - `[S; 1]` is grey (luminance),
//! - `[S; 2]` is grey with alpha,
//! - `[S; 3]` is RGB,
//! - `[S; 4]` is RGBA.
//!
//! Pixels are plain arrays. There is no padding between samples and none between consecutive
//! pixels, so any slice of pixels can be viewed as a slice of samples or of bytes.
//!
//! ## Usage
//!
//! ```
//! use rasterimage_texel::{ops, Pixel};
//!
//! let px: [u8; 4] = [0x20, 0x40, 0x80, 0xc0];
//!
//! // Change the sample representation, keeping the normalized value.
//! let float: [f32; 4] = px.convert();
//! assert!((float[2] - 0.5).abs() < 0.005);
//!
//! // Treat an RGBA pixel as a native 32-bit integer, red in the lowest byte.
//! assert_eq!(ops::to_32bit_pixel(px), 0xc080_4020);
//! ```
#![no_std]
// Everything here is expressible with `bytemuck` casts.
#![deny(unsafe_code)]

pub mod ops;
mod pixel;
mod sample;

pub use self::pixel::{ColorPixel, Format, Pixel};
pub use self::sample::{Depth, Sample};

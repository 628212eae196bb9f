//! Per-pixel numeric operations.
//!
//! These are free-standing forms of the operations on [`Sample`] and [`Pixel`], named after what
//! they compute. All of them are pure and work on values, so they can be applied to single pixels
//! or mapped over whole images.
use crate::pixel::Pixel;
use crate::sample::Sample;

/// Multiply two normalized samples.
///
/// See [`Sample::multiply`].
pub fn multiply<S: Sample>(a: S, b: S) -> S {
    a.multiply(b)
}

/// Divide two normalized samples, clamping the quotient to the sample maximum.
///
/// See [`Sample::divide`].
pub fn divide<S: Sample>(a: S, b: S) -> S {
    a.divide(b)
}

/// Construct a sample from a normalized float.
///
/// See [`Sample::value_of`].
pub fn value<S: Sample>(f: f32) -> S {
    S::value_of(f)
}

/// Convert all channels of a pixel to another sample representation.
///
/// # Examples
///
/// ```
/// use rasterimage_texel::ops;
///
/// let px: [u16; 4] = [0x1000, 0x2000, 0x3000, 0x4000];
/// assert_eq!(ops::convert::<u8, _>(px), [0x0f, 0x1f, 0x2f, 0x3f]);
/// ```
pub fn convert<S: Sample, P: Pixel>(px: P) -> P::With<S> {
    px.convert()
}

/// Recover independent color channels from premultiplied ones.
///
/// Fully transparent and fully opaque pixels are returned unchanged. Otherwise each color channel
/// is divided by alpha with [`divide`], which clamps at the maximum.
pub fn unpremultiply_alpha<S: Sample>(px: [S; 4]) -> [S; 4] {
    let [r, g, b, a] = px;

    if a == S::MAX || a == S::ZERO {
        return px;
    }

    [r.divide(a), g.divide(a), b.divide(a), a]
}

/// Scale the color channels by alpha.
///
/// The inverse of [`unpremultiply_alpha`], up to rounding. Fully opaque pixels are unchanged.
pub fn premultiply_alpha<S: Sample>(px: [S; 4]) -> [S; 4] {
    let [r, g, b, a] = px;

    if a == S::MAX {
        return px;
    }

    [r.multiply(a), g.multiply(a), b.multiply(a), a]
}

/// Pack an 8-bit RGBA pixel into a `u32`.
///
/// Red occupies the lowest byte and alpha the highest, regardless of the host byte order. That
/// is, the `u32` has the same bytes as the pixel on little endian machines.
///
/// ```
/// use rasterimage_texel::ops::to_32bit_pixel;
///
/// assert_eq!(to_32bit_pixel([0xf1, 0xf2, 0xf3, 0xf4]), 0xf4f3f2f1);
/// ```
pub fn to_32bit_pixel(px: [u8; 4]) -> u32 {
    u32::from_le_bytes(px)
}

/// Unpack a `u32` into an 8-bit RGBA pixel, the inverse of [`to_32bit_pixel`].
pub fn from_32bit_pixel(px: u32) -> [u8; 4] {
    px.to_le_bytes()
}

/// Canonicalize a pixel to RGBA, see [`Pixel::to_rgba`].
pub fn get_rgba<P: Pixel>(px: P) -> [P::Sample; 4] {
    px.to_rgba()
}

/// Get the alpha channel of a pixel, see [`Pixel::alpha`].
///
/// Single channel pixels are interpreted as *alpha* by this function and as *luminance* by
/// [`get_rgba`].
pub fn get_alpha<P: Pixel>(px: P) -> P::Sample {
    px.alpha()
}

// Distributed under The MIT License (MIT)
//
// Copyright (c) 2023, 2024 The `rasterimage` developers
//! Borrowed, strided windows into pixel storage.
//!
//! A span is described by its dimensions, a row stride in pixels and a slice beginning at its
//! first pixel. Row `y` covers the pixels `y * stride .. y * stride + width` of that slice. The
//! slice holds exactly the pixels from the first to the last pixel of the window and no more, so
//! carving out a sub-span is a matter of re-slicing while keeping the stride of the parent.
//!
//! Spans borrow their storage. Any number of [`ImageSpan`] may exist at once, an [`ImageSpanMut`]
//! excludes all other spans over the same pixels for its lifetime.
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut, Range};
use core::{fmt, mem};

use rasterimage_texel::{ops, ColorPixel, Pixel, Sample};

use crate::dims::{Dimensions, Rect};
use crate::log::trace;

/// A shared view on a rectangle of pixels.
pub struct ImageSpan<'a, P> {
    data: &'a [P],
    dims: Dimensions,
    stride: usize,
}

/// A unique view on a rectangle of pixels.
///
/// Besides access, this offers the in-place operations that work on windows of an image, such as
/// [`ImageSpanMut::blit`] or [`ImageSpanMut::flip_vertical`].
pub struct ImageSpanMut<'a, P> {
    data: &'a mut [P],
    dims: Dimensions,
    stride: usize,
}

/// An iterator over the rows of an [`ImageSpan`].
///
/// Stepping from either end, including skipping with `nth` and `nth_back`, takes constant time.
pub struct Lines<'a, P> {
    rest: &'a [P],
    width: usize,
    stride: usize,
    remaining: usize,
}

/// An iterator over the mutable rows of an [`ImageSpanMut`].
pub struct LinesMut<'a, P> {
    rest: &'a mut [P],
    width: usize,
    stride: usize,
    remaining: usize,
}

/// The number of pixels from the first pixel of a window to its last, inclusive.
fn span_len(dims: Dimensions, stride: usize) -> usize {
    match dims.height.checked_sub(1) {
        None => 0,
        Some(rows) => rows as usize * stride + dims.width as usize,
    }
}

/// The pixels of a window that hold a sub-rectangle, relative to the start of the window.
fn sub_range(dims: Dimensions, stride: usize, rect: Rect) -> Option<Range<usize>> {
    if !dims.to_rect().contains_rect(rect) {
        return None;
    }

    let len = span_len(rect.dims(), stride);
    let start = if len == 0 {
        0
    } else {
        rect.y as usize * stride + rect.x as usize
    };

    Some(start..start + len)
}

fn check_layout(len: usize, dims: Dimensions, stride: usize) -> usize {
    assert!(
        stride >= dims.width as usize,
        "Stride {stride} is smaller than the width {}",
        dims.width
    );

    let required = span_len(dims, stride);
    assert!(
        len >= required,
        "A {dims} window with stride {stride} requires {required} pixels, got {len}",
    );

    required
}

impl<'a, P: Pixel> ImageSpan<'a, P> {
    /// Create a span over a slice of pixels.
    ///
    /// The first pixel of `data` is the top-left pixel of the window. Excess pixels at the end of
    /// `data` are not part of the span.
    ///
    /// # Panics
    ///
    /// When `stride` is smaller than the width, or `data` is too short to hold all rows.
    pub fn new(data: &'a [P], dims: Dimensions, stride: usize) -> Self {
        let len = check_layout(data.len(), dims, stride);
        ImageSpan {
            data: &data[..len],
            dims,
            stride,
        }
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

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// The distance between the starts of consecutive rows, in pixels.
    pub fn stride_pixels(&self) -> usize {
        self.stride
    }

    /// The distance between the starts of consecutive rows, in bytes.
    pub fn stride_bytes(&self) -> usize {
        self.stride * mem::size_of::<P>()
    }

    /// Get row `y`, a slice of exactly `width` pixels.
    ///
    /// # Panics
    ///
    /// When `y` is not smaller than the height.
    pub fn row(&self, y: u32) -> &'a [P] {
        assert!(y < self.dims.height, "Row {y} out of bounds for {}", self.dims);
        let start = y as usize * self.stride;
        &self.data[start..start + self.dims.width as usize]
    }

    pub fn lines(&self) -> Lines<'a, P> {
        Lines {
            rest: self.data,
            width: self.dims.width as usize,
            stride: self.stride,
            remaining: self.dims.height as usize,
        }
    }

    /// Get a window on a part of this span, or `None` if `rect` is not contained in it.
    ///
    /// The resulting span keeps the stride of `self`.
    pub fn try_sub_span(&self, rect: Rect) -> Option<Self> {
        let range = sub_range(self.dims, self.stride, rect)?;
        Some(ImageSpan {
            data: &self.data[range],
            dims: rect.dims(),
            stride: self.stride,
        })
    }

    /// Get a window on a part of this span.
    ///
    /// # Panics
    ///
    /// When `rect` is not contained in the dimensions of this span.
    pub fn sub_span(&self, rect: Rect) -> Self {
        match self.try_sub_span(rect) {
            Some(span) => span,
            None => panic!("Sub span {rect:?} is not contained in {}", self.dims),
        }
    }

    /// All pixels as one slice, if the rows are back-to-back in memory.
    pub fn as_contiguous_slice(&self) -> Option<&'a [P]> {
        is_contiguous(self.dims, self.stride).then_some(self.data)
    }
}

fn is_contiguous(dims: Dimensions, stride: usize) -> bool {
    dims.height <= 1 || stride == dims.width as usize
}

impl<'a, P: Pixel> ImageSpanMut<'a, P> {
    /// Create a mutable span over a slice of pixels.
    ///
    /// See [`ImageSpan::new`] for the interpretation of the arguments.
    ///
    /// # Panics
    ///
    /// When `stride` is smaller than the width, or `data` is too short to hold all rows.
    pub fn new(data: &'a mut [P], dims: Dimensions, stride: usize) -> Self {
        let len = check_layout(data.len(), dims, stride);
        ImageSpanMut {
            data: &mut data[..len],
            dims,
            stride,
        }
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

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    pub fn stride_pixels(&self) -> usize {
        self.stride
    }

    pub fn stride_bytes(&self) -> usize {
        self.stride * mem::size_of::<P>()
    }

    /// A shared view on the same pixels.
    pub fn as_span(&self) -> ImageSpan<'_, P> {
        ImageSpan {
            data: &*self.data,
            dims: self.dims,
            stride: self.stride,
        }
    }

    /// A shorter lived mutable view on the same pixels.
    pub fn reborrow(&mut self) -> ImageSpanMut<'_, P> {
        ImageSpanMut {
            data: &mut *self.data,
            dims: self.dims,
            stride: self.stride,
        }
    }

    /// See [`ImageSpan::row`].
    pub fn row(&self, y: u32) -> &[P] {
        self.as_span().row(y)
    }

    /// Get row `y` for modification.
    ///
    /// # Panics
    ///
    /// When `y` is not smaller than the height.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        assert!(y < self.dims.height, "Row {y} out of bounds for {}", self.dims);
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.dims.width as usize]
    }

    pub fn lines(&self) -> Lines<'_, P> {
        self.as_span().lines()
    }

    pub fn lines_mut(&mut self) -> LinesMut<'_, P> {
        self.reborrow().into_lines_mut()
    }

    pub fn into_lines_mut(self) -> LinesMut<'a, P> {
        LinesMut {
            rest: self.data,
            width: self.dims.width as usize,
            stride: self.stride,
            remaining: self.dims.height as usize,
        }
    }

    /// See [`ImageSpan::try_sub_span`].
    pub fn try_sub_span(&self, rect: Rect) -> Option<ImageSpan<'_, P>> {
        self.as_span().try_sub_span(rect)
    }

    /// See [`ImageSpan::sub_span`].
    pub fn sub_span(&self, rect: Rect) -> ImageSpan<'_, P> {
        self.as_span().sub_span(rect)
    }

    pub fn try_sub_span_mut(&mut self, rect: Rect) -> Option<ImageSpanMut<'_, P>> {
        self.reborrow().try_into_sub_span_mut(rect)
    }

    /// Get a mutable window on a part of this span.
    ///
    /// # Panics
    ///
    /// When `rect` is not contained in the dimensions of this span.
    pub fn sub_span_mut(&mut self, rect: Rect) -> ImageSpanMut<'_, P> {
        self.reborrow().into_sub_span_mut(rect)
    }

    /// Narrow this span to a part of it, or `None` if `rect` is not contained in it.
    pub fn try_into_sub_span_mut(self, rect: Rect) -> Option<ImageSpanMut<'a, P>> {
        let range = sub_range(self.dims, self.stride, rect)?;
        let data = self.data;
        Some(ImageSpanMut {
            data: &mut data[range],
            dims: rect.dims(),
            stride: self.stride,
        })
    }

    /// Narrow this span to a part of it.
    ///
    /// # Panics
    ///
    /// When `rect` is not contained in the dimensions of this span.
    pub fn into_sub_span_mut(self, rect: Rect) -> ImageSpanMut<'a, P> {
        let dims = self.dims;
        match self.try_into_sub_span_mut(rect) {
            Some(span) => span,
            None => panic!("Sub span {rect:?} is not contained in {dims}"),
        }
    }

    pub fn as_contiguous_slice(&self) -> Option<&[P]> {
        self.as_span().as_contiguous_slice()
    }

    pub fn as_contiguous_slice_mut(&mut self) -> Option<&mut [P]> {
        if is_contiguous(self.dims, self.stride) {
            Some(&mut *self.data)
        } else {
            None
        }
    }

    /// Overwrite every pixel of the window.
    pub fn clear(&mut self, pixel: P) {
        self.lines_mut().for_each(|line| line.fill(pixel));
    }

    /// Replace every pixel with the result of `f` applied to it.
    pub fn map_in_place(&mut self, mut f: impl FnMut(P) -> P) {
        for line in self.lines_mut() {
            for pixel in line {
                *pixel = f(*pixel);
            }
        }
    }

    /// Copy all pixels of an equally sized span into this one.
    ///
    /// # Panics
    ///
    /// When the dimensions of both spans differ.
    pub fn copy_from(&mut self, src: ImageSpan<'_, P>) {
        assert_eq!(self.dims, src.dims, "Mismatching span dimensions");

        for (into, from) in self.lines_mut().zip(src.lines()) {
            into.copy_from_slice(from);
        }
    }

    /// Draw `src` onto this span with its top-left corner at `position`.
    ///
    /// The position may be negative or lie beyond the edges. Only the pixels where the translated
    /// source overlaps this span are written, all others stay untouched. Without any overlap this
    /// does nothing.
    pub fn blit(&mut self, src: ImageSpan<'_, P>, position: (i32, i32)) {
        let (x, y) = (i64::from(position.0), i64::from(position.1));

        let left = x.max(0);
        let top = y.max(0);
        let right = (x + i64::from(src.width())).min(i64::from(self.dims.width));
        let bottom = (y + i64::from(src.height())).min(i64::from(self.dims.height));

        if left >= right || top >= bottom {
            trace!(
                "Blit of {} at {:?} does not intersect {}",
                src.dims,
                position,
                self.dims
            );
            return;
        }

        // All edges are clipped to our own dimensions, hence they fit into `u32`.
        let (width, height) = ((right - left) as u32, (bottom - top) as u32);
        let into = Rect::new(left as u32, top as u32, width, height);
        let from = Rect::new((left - x) as u32, (top - y) as u32, width, height);

        self.sub_span_mut(into).copy_from(src.sub_span(from));
    }

    /// Mirror the rows, exchanging the top and the bottom.
    pub fn flip_vertical(&mut self) {
        let mut lines = self.lines_mut();
        while let (Some(top), Some(bottom)) = (lines.next(), lines.next_back()) {
            top.swap_with_slice(bottom);
        }
    }

    /// Mirror each row, exchanging the left and the right.
    pub fn flip_horizontal(&mut self) {
        self.lines_mut().for_each(<[P]>::reverse);
    }

    /// Exchange two channels in every pixel.
    ///
    /// # Panics
    ///
    /// When either index is not a channel of `P`.
    pub fn swap_channels(&mut self, i: usize, j: usize) {
        assert!(
            i < P::CHANNELS && j < P::CHANNELS,
            "Channels ({i}, {j}) out of range for {} channels",
            P::CHANNELS
        );

        for line in self.lines_mut() {
            for pixel in line {
                pixel.samples_mut().swap(i, j);
            }
        }
    }

    /// Exchange the red and blue channel of every pixel.
    pub fn swap_red_blue(&mut self)
    where
        P: ColorPixel,
    {
        self.swap_channels(P::RED, P::BLUE);
    }
}

impl<S: Sample> ImageSpanMut<'_, [S; 4]> {
    /// Undo alpha premultiplication of every pixel, see [`ops::unpremultiply_alpha`].
    pub fn unpremultiply_alpha(&mut self) {
        self.map_in_place(ops::unpremultiply_alpha);
    }

    /// Premultiply the color of every pixel with its alpha, see [`ops::premultiply_alpha`].
    pub fn premultiply_alpha(&mut self) {
        self.map_in_place(ops::premultiply_alpha);
    }
}

impl<P: Pixel> Index<(u32, u32)> for ImageSpan<'_, P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        &self.row(y)[x as usize]
    }
}

impl<P: Pixel> Index<(u32, u32)> for ImageSpanMut<'_, P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        &self.row(y)[x as usize]
    }
}

impl<P: Pixel> IndexMut<(u32, u32)> for ImageSpanMut<'_, P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        &mut self.row_mut(y)[x as usize]
    }
}

impl<P> Clone for ImageSpan<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for ImageSpan<'_, P> {}

/// Spans are equal when they have the same dimensions and pixels, regardless of their strides.
impl<P: Pixel> PartialEq for ImageSpan<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims && self.lines().eq(other.lines())
    }
}

impl<P> fmt::Debug for ImageSpan<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImageSpan")
            .field("dims", &self.dims)
            .field("stride", &self.stride)
            .finish()
    }
}

impl<P> fmt::Debug for ImageSpanMut<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImageSpanMut")
            .field("dims", &self.dims)
            .field("stride", &self.stride)
            .finish()
    }
}

// Both iterators keep `rest` at exactly `(remaining - 1) * stride + width` pixels, or empty when
// nothing remains. The rows to yield next are then at the very front and the very back.

impl<'a, P> Lines<'a, P> {
    /// Drop `n` rows at the front.
    fn skip_front(&mut self, n: usize) {
        let rest = self.rest;
        if n >= self.remaining {
            self.rest = &[];
            self.remaining = 0;
        } else {
            self.rest = &rest[n * self.stride..];
            self.remaining -= n;
        }
    }

    /// Drop `n` rows at the back.
    fn skip_back(&mut self, n: usize) {
        let rest = self.rest;
        if n >= self.remaining {
            self.rest = &[];
            self.remaining = 0;
        } else {
            self.remaining -= n;
            let len = (self.remaining - 1) * self.stride + self.width;
            self.rest = &rest[..len];
        }
    }
}

impl<'a, P> Iterator for Lines<'a, P> {
    type Item = &'a [P];

    fn next(&mut self) -> Option<&'a [P]> {
        if self.remaining == 0 {
            return None;
        }

        let rest = self.rest;
        let (line, tail) = rest.split_at(self.width);
        self.remaining -= 1;
        self.rest = if self.remaining == 0 {
            &[]
        } else {
            &tail[self.stride - self.width..]
        };

        Some(line)
    }

    fn nth(&mut self, n: usize) -> Option<&'a [P]> {
        self.skip_front(n);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn count(self) -> usize {
        self.remaining
    }

    fn last(mut self) -> Option<&'a [P]> {
        self.next_back()
    }
}

impl<'a, P> DoubleEndedIterator for Lines<'a, P> {
    fn next_back(&mut self) -> Option<&'a [P]> {
        if self.remaining == 0 {
            return None;
        }

        let rest = self.rest;
        let (head, line) = rest.split_at(rest.len() - self.width);
        self.remaining -= 1;
        self.rest = if self.remaining == 0 {
            &[]
        } else {
            &head[..head.len() - (self.stride - self.width)]
        };

        Some(line)
    }

    fn nth_back(&mut self, n: usize) -> Option<&'a [P]> {
        self.skip_back(n);
        self.next_back()
    }
}

impl<P> ExactSizeIterator for Lines<'_, P> {}

impl<P> FusedIterator for Lines<'_, P> {}

impl<P> Clone for Lines<'_, P> {
    fn clone(&self) -> Self {
        Lines {
            rest: self.rest,
            width: self.width,
            stride: self.stride,
            remaining: self.remaining,
        }
    }
}

impl<'a, P> LinesMut<'a, P> {
    fn skip_front(&mut self, n: usize) {
        let rest = mem::take(&mut self.rest);
        if n >= self.remaining {
            self.remaining = 0;
        } else {
            self.rest = &mut rest[n * self.stride..];
            self.remaining -= n;
        }
    }

    fn skip_back(&mut self, n: usize) {
        let rest = mem::take(&mut self.rest);
        if n >= self.remaining {
            self.remaining = 0;
        } else {
            self.remaining -= n;
            let len = (self.remaining - 1) * self.stride + self.width;
            self.rest = &mut rest[..len];
        }
    }
}

impl<'a, P> Iterator for LinesMut<'a, P> {
    type Item = &'a mut [P];

    fn next(&mut self) -> Option<&'a mut [P]> {
        if self.remaining == 0 {
            return None;
        }

        let rest = mem::take(&mut self.rest);
        let (line, tail) = rest.split_at_mut(self.width);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.rest = &mut tail[self.stride - self.width..];
        }

        Some(line)
    }

    fn nth(&mut self, n: usize) -> Option<&'a mut [P]> {
        self.skip_front(n);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn count(self) -> usize {
        self.remaining
    }

    fn last(mut self) -> Option<&'a mut [P]> {
        self.next_back()
    }
}

impl<'a, P> DoubleEndedIterator for LinesMut<'a, P> {
    fn next_back(&mut self) -> Option<&'a mut [P]> {
        if self.remaining == 0 {
            return None;
        }

        let rest = mem::take(&mut self.rest);
        let split = rest.len() - self.width;
        let (head, line) = rest.split_at_mut(split);
        self.remaining -= 1;
        if self.remaining > 0 {
            let len = head.len() - (self.stride - self.width);
            self.rest = &mut head[..len];
        }

        Some(line)
    }

    fn nth_back(&mut self, n: usize) -> Option<&'a mut [P]> {
        self.skip_back(n);
        self.next_back()
    }
}

impl<P> ExactSizeIterator for LinesMut<'_, P> {}

impl<P> FusedIterator for LinesMut<'_, P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn numbered(len: usize) -> Vec<[u8; 1]> {
        (0..len).map(|i| [i as u8]).collect()
    }

    #[test]
    fn rows_follow_the_stride() {
        let data = numbered(20);
        let span = ImageSpan::new(&data, Dimensions::new(3, 4), 5);

        assert_eq!(span.row(0), &[[0], [1], [2]]);
        assert_eq!(span.row(3), &[[15], [16], [17]]);
        assert_eq!(span.stride_pixels(), 5);
        assert_eq!(span.stride_bytes(), 5);
        assert!(span.as_contiguous_slice().is_none());
    }

    #[test]
    fn lines_step_from_both_ends() {
        let data = numbered(20);
        let span = ImageSpan::new(&data, Dimensions::new(2, 4), 5);
        let mut lines = span.lines();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines.next_back(), Some(&[[15], [16]][..]));
        assert_eq!(lines.next(), Some(&[[0], [1]][..]));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.next_back(), Some(&[[10], [11]][..]));
        assert_eq!(lines.next(), Some(&[[5], [6]][..]));
        assert_eq!(lines.next(), None);
        assert_eq!(lines.next_back(), None);
    }

    #[test]
    fn lines_skip() {
        let data = numbered(20);
        let span = ImageSpan::new(&data, Dimensions::new(1, 4), 5);

        assert_eq!(span.lines().nth(2), Some(&[[10]][..]));
        assert_eq!(span.lines().nth(4), None);
        assert_eq!(span.lines().nth_back(1), Some(&[[10]][..]));
        assert_eq!(span.lines().nth_back(3), Some(&[[0]][..]));
        assert_eq!(span.lines().last(), Some(&[[15]][..]));

        let mut lines = span.lines();
        assert_eq!(lines.nth(1), Some(&[[5]][..]));
        assert_eq!(lines.nth_back(1), Some(&[[10]][..]));
        assert_eq!(lines.len(), 0);
    }

    #[test]
    fn lines_mut_step_from_both_ends() {
        let mut data = numbered(12);
        let mut span = ImageSpanMut::new(&mut data, Dimensions::new(2, 3), 4);

        let mut lines = span.lines_mut();
        lines.next_back().unwrap()[0] = [100];
        lines.next().unwrap()[1] = [101];
        lines.nth(0).unwrap()[0] = [102];
        assert!(lines.next().is_none());

        assert_eq!(span.row(0), &[[0], [101]]);
        assert_eq!(span.row(1), &[[102], [5]]);
        assert_eq!(span.row(2), &[[100], [9]]);
    }

    #[test]
    fn sub_span_keeps_parent_stride() {
        let data = numbered(20);
        let span = ImageSpan::new(&data, Dimensions::new(5, 4), 5);
        let sub = span.sub_span(Rect::new(1, 2, 3, 2));

        assert_eq!(sub.stride_pixels(), 5);
        assert_eq!(sub.row(0), &[[11], [12], [13]]);
        assert_eq!(sub[(2, 1)], [18]);

        let nested = sub.sub_span(Rect::new(1, 1, 1, 1));
        assert_eq!(nested[(0, 0)], [17]);
    }

    #[test]
    fn empty_sub_spans() {
        let data = numbered(20);
        let span = ImageSpan::new(&data, Dimensions::new(5, 4), 5);

        let bottom = span.sub_span(Rect::new(5, 4, 0, 0));
        assert!(bottom.is_empty());
        assert_eq!(bottom.lines().count(), 0);

        let column = span.sub_span(Rect::new(5, 0, 0, 4));
        assert_eq!(column.lines().count(), 4);
        assert!(column.lines().all(<[_]>::is_empty));

        assert!(span.try_sub_span(Rect::new(5, 0, 1, 1)).is_none());
    }

    #[test]
    fn swap_channels() {
        let mut data = [[1u8, 2, 3], [4, 5, 6]];
        let mut span = ImageSpanMut::new(&mut data, Dimensions::new(2, 1), 2);
        span.swap_red_blue();
        assert_eq!(data, [[3, 2, 1], [6, 5, 4]]);
    }

    #[test]
    #[should_panic]
    fn swap_missing_channel() {
        let mut data = [[1u8, 2]];
        let mut span = ImageSpanMut::new(&mut data, Dimensions::new(1, 1), 1);
        span.swap_channels(0, 2);
    }

    #[test]
    #[should_panic]
    fn short_data() {
        let data = numbered(19);
        let _ = ImageSpan::new(&data, Dimensions::new(5, 4), 5);
    }

    #[test]
    #[should_panic]
    fn narrow_stride() {
        let data = numbered(20);
        let _ = ImageSpan::new(&data, Dimensions::new(5, 4), 4);
    }
}

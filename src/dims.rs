use core::fmt;

/// The extent of an image, in pixels.
///
/// Both dimensions may be zero, which describes an empty image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// An axis aligned rectangle of pixels.
///
/// The rectangle covers the columns `x..x + width` and the rows `y..y + height`. Its edges are
/// computed in `u64` so that no combination of coordinates overflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Dimensions { width, height }
    }

    /// Whether there is no pixel at all.
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The number of pixels.
    ///
    /// # Panics
    ///
    /// On targets where the product of width and height does not fit into `usize`.
    pub fn area(self) -> usize {
        let area = u64::from(self.width) * u64::from(self.height);
        usize::try_from(area).expect("Image dimensions exceed the address space")
    }

    /// The rectangle at the origin covering these dimensions.
    pub const fn to_rect(self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Dimensions { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn dims(self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub const fn is_empty(self) -> bool {
        self.dims().is_empty()
    }

    pub fn area(self) -> usize {
        self.dims().area()
    }

    /// One past the last column.
    pub const fn right(self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// One past the last row.
    pub const fn bottom(self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Whether `other` lies completely within this rectangle.
    ///
    /// An empty `other` is contained as long as its origin is within or on the edge of `self`.
    pub const fn contains_rect(self, other: Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// The overlap of both rectangles, if it contains any pixel.
    pub fn intersection(self, other: Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        let width = u32::try_from(right.checked_sub(x.into())?).ok()?;
        let height = u32::try_from(bottom.checked_sub(y.into())?).ok()?;
        let rect = Rect::new(x, y, width, height);

        if rect.is_empty() {
            None
        } else {
            Some(rect)
        }
    }
}

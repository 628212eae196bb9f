use rasterimage::{Dimensions, Image, ImageSpanMut, Rect};
use rstest::rstest;

const BACKGROUND: [u8; 4] = [10, 20, 30, 40];

fn numbered(dims: Dimensions) -> Image<[u16; 1]> {
    let pixels = (0..dims.area()).map(|i| [i as u16]).collect();
    Image::from_pixels(dims, pixels)
}

#[test]
fn clear_sub_span() {
    let mut image = Image::<[u8; 4]>::new(Dimensions::new(100, 200));
    image.clear(BACKGROUND);

    let mut span = image.span_mut();
    let mut sub = span.sub_span_mut(Rect::new(1, 2, 2, 3));
    assert_eq!(sub.dims(), Dimensions::new(2, 3));
    assert_eq!(sub.stride_pixels(), 100);
    sub.clear([0, 0, 0, 0]);

    assert_eq!(image[(0, 1)], BACKGROUND);
    assert_eq!(image[(1, 2)], [0, 0, 0, 0]);
    assert_eq!(image[(2, 4)], [0, 0, 0, 0]);
    assert_eq!(image[(3, 2)], BACKGROUND);
    assert_eq!(image[(1, 5)], BACKGROUND);

    let cleared = image.pixels().iter().filter(|&&px| px == [0; 4]).count();
    assert_eq!(cleared, 6);
}

#[rstest]
#[case::empty(Dimensions::new(0, 0))]
#[case::single(Dimensions::new(1, 1))]
#[case::wide(Dimensions::new(17, 3))]
#[case::tall(Dimensions::new(2, 31))]
fn clear_is_visible_everywhere(#[case] dims: Dimensions) {
    let mut image = Image::<[f32; 3]>::new(dims);
    image.span_mut().clear([0.25, 0.5, 1.0]);

    for y in 0..dims.height {
        for x in 0..dims.width {
            assert_eq!(image[(x, y)], [0.25, 0.5, 1.0]);
        }
    }

    assert!(image.pixels().iter().all(|&px| px == [0.25, 0.5, 1.0]));
    assert!(image.span().lines().flatten().all(|&px| px == [0.25, 0.5, 1.0]));
}

#[rstest]
#[case::full(Rect::new(0, 0, 100, 200))]
#[case::inner(Rect::new(1, 2, 2, 3))]
#[case::corner(Rect::new(99, 199, 1, 1))]
#[case::empty_at_edge(Rect::new(100, 200, 0, 0))]
#[case::column(Rect::new(0, 0, 0, 200))]
fn sub_span_inside(#[case] rect: Rect) {
    let image = Image::<[u8; 2]>::new(Dimensions::new(100, 200));
    let sub = image.span().sub_span(rect);
    assert_eq!(sub.dims(), rect.dims());
    assert_eq!(sub.lines().len(), rect.height as usize);
}

#[rstest]
#[case::too_wide(Rect::new(0, 0, 101, 1))]
#[case::too_tall(Rect::new(0, 0, 1, 201))]
#[case::shifted(Rect::new(99, 0, 2, 2))]
#[case::outside(Rect::new(100, 200, 1, 1))]
#[case::far_outside(Rect::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX))]
#[should_panic]
fn sub_span_outside(#[case] rect: Rect) {
    let image = Image::<[u8; 2]>::new(Dimensions::new(100, 200));
    let _ = image.span().sub_span(rect);
}

#[rstest]
#[case::too_wide(Rect::new(0, 0, 101, 1))]
#[case::outside(Rect::new(100, 200, 1, 1))]
fn try_sub_span_outside(#[case] rect: Rect) {
    let mut image = Image::<[u8; 2]>::new(Dimensions::new(100, 200));
    assert!(image.span().try_sub_span(rect).is_none());
    assert!(image.span_mut().try_sub_span_mut(rect).is_none());
}

#[rstest]
#[case::right((8, 0))]
#[case::below((0, 8))]
#[case::left((-3, 2))]
#[case::above((1, -3))]
#[case::far((i32::MIN, i32::MAX))]
fn blit_outside_is_noop(#[case] position: (i32, i32)) {
    let mut target = numbered(Dimensions::new(8, 8));
    let source = Image::<[u16; 1]>::filled(Dimensions::new(3, 3), [0xffff]);

    let before = target.clone();
    target.span_mut().blit(source.span(), position);
    assert_eq!(target, before);
}

#[test]
fn blit_partial_overlap() {
    let dims = Dimensions::new(8, 8);
    let mut target = numbered(dims);
    let source = Image::<[u16; 1]>::filled(Dimensions::new(3, 3), [0xffff]);

    target.span_mut().blit(source.span(), (6, -1));

    for y in 0..8 {
        for x in 0..8 {
            let expected = if x >= 6 && y < 2 {
                0xffff
            } else {
                (y * 8 + x) as u16
            };
            assert_eq!(target[(x, y)], [expected], "at ({x}, {y})");
        }
    }
}

#[test]
fn blit_from_sub_span() {
    let source = numbered(Dimensions::new(10, 10));
    let mut target = Image::<[u16; 1]>::new(Dimensions::new(4, 4));

    let window = source.span().sub_span(Rect::new(2, 3, 3, 3));
    target.span_mut().blit(window, (-1, 2));

    assert_eq!(target.row(0), &[[0]; 4]);
    assert_eq!(target.row(1), &[[0]; 4]);
    assert_eq!(target.row(2), &[[33], [34], [0], [0]]);
    assert_eq!(target.row(3), &[[43], [44], [0], [0]]);
}

#[rstest]
fn flip_vertical_is_involution(#[values(0, 1, 2, 3, 4, 5, 10, 13)] height: u32) {
    let original = numbered(Dimensions::new(3, height));
    let mut image = original.clone();

    image.flip_vertical();
    for y in 0..height {
        assert_eq!(image.row(y), original.row(height - 1 - y));
    }

    image.flip_vertical();
    assert_eq!(image, original);
}

#[rstest]
fn flip_sub_span_vertical(#[values(0, 1, 2, 5)] height: u32) {
    let original = numbered(Dimensions::new(6, 7));
    let mut image = original.clone();
    let rect = Rect::new(2, 1, 3, height);

    image.span_mut().sub_span_mut(rect).flip_vertical();
    let flipped = image.clone();

    for y in 0..7 {
        for x in 0..6 {
            let source_y = if rect.x <= x && x < 5 && rect.y <= y && y < 1 + height {
                1 + height - 1 - (y - 1)
            } else {
                y
            };
            assert_eq!(flipped[(x, y)], original[(x, source_y)], "at ({x}, {y})");
        }
    }

    image.span_mut().sub_span_mut(rect).flip_vertical();
    assert_eq!(image, original);
}

#[test]
fn flip_horizontal_twice() {
    let original = numbered(Dimensions::new(5, 4));
    let mut image = original.clone();

    image.span_mut().flip_horizontal();
    assert_eq!(image.row(2), &[[14], [13], [12], [11], [10]]);

    image.span_mut().flip_horizontal();
    assert_eq!(image, original);
}

#[test]
fn foreign_strided_slice() {
    // Three rows of two pixels, padded to a stride of four pixels.
    let mut data: [[u8; 3]; 10] = [[0; 3]; 10];
    let mut span = ImageSpanMut::new(&mut data, Dimensions::new(2, 3), 4);

    span.clear([1, 2, 3]);
    span.swap_red_blue();
    assert_eq!(span.stride_bytes(), 12);
    assert!(span.as_contiguous_slice().is_none());

    for (idx, px) in data.iter().enumerate() {
        let expected = if idx % 4 < 2 { [3, 2, 1] } else { [0; 3] };
        assert_eq!(*px, expected, "at {idx}");
    }
}

#[test]
fn lines_are_random_access() {
    let image = numbered(Dimensions::new(4, 6));
    let span = image.span().sub_span(Rect::new(1, 1, 2, 5));

    let mut lines = span.lines();
    assert_eq!(lines.nth(2), Some(&[[13], [14]][..]));
    assert_eq!(lines.nth_back(0), Some(&[[21], [22]][..]));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines.next(), Some(&[[17], [18]][..]));
    assert_eq!(lines.next(), None);

    let reversed: Vec<_> = span.lines().rev().map(|line| line[0][0]).collect();
    assert_eq!(reversed, [21, 17, 13, 9, 5]);
}

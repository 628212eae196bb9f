//! Benchmarks strided window operations.
use brunch::Bench;

use rasterimage::{Dimensions, Image, Rect};

struct Blit {
    target: u32,
    source: u32,
    position: (i32, i32),
}

impl Blit {
    fn name(&self) -> String {
        format!(
            "blit({}, {}, {:?})",
            self.target, self.source, self.position
        )
    }

    fn prepare(self) -> impl FnMut() {
        let mut target = Image::<[u8; 4]>::new(Dimensions::new(self.target, self.target));
        let source = Image::<[u8; 4]>::filled(
            Dimensions::new(self.source, self.source),
            [0xff, 0x80, 0x40, 0xff],
        );

        move || target.span_mut().blit(source.span(), self.position)
    }
}

fn main() {
    let tests = [
        // Fully contained.
        Blit {
            target: 512,
            source: 128,
            position: (64, 64),
        },
        // Clipped on two edges.
        Blit {
            target: 512,
            source: 128,
            position: (448, -64),
        },
        // Covers the whole target.
        Blit {
            target: 256,
            source: 512,
            position: (-128, -128),
        },
        // No overlap at all.
        Blit {
            target: 256,
            source: 128,
            position: (-128, 0),
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|blit| {
        Bench::new(format!("rasterimage::span::{}", blit.name())).run(blit.prepare())
    }));

    let mut image = Image::<[u8; 4]>::new(Dimensions::new(512, 512));
    benches.push(
        Bench::new("rasterimage::span::flip_vertical(512)").run(move || image.flip_vertical()),
    );

    let mut image = Image::<[u16; 3]>::new(Dimensions::new(512, 512));
    benches.push(
        Bench::new("rasterimage::span::swap_red_blue(window 256)").run(move || {
            image
                .span_mut()
                .sub_span_mut(Rect::new(128, 128, 256, 256))
                .swap_red_blue()
        }),
    );

    benches.finish();
}

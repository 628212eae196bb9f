//! Benchmarks sample depth conversions of whole images.
use brunch::Bench;

use rasterimage::{Depth, Dimensions, Format, ImageVariant};

struct Convert {
    format: Format,
    depth_in: Depth,
    depth_out: Depth,
    sz: u32,
}

impl Convert {
    fn name(&self) -> String {
        format!(
            "to_depth({:?}, {}, {}, {})",
            self.format, self.depth_in, self.depth_out, self.sz
        )
    }

    fn prepare(self) -> impl FnMut() -> ImageVariant {
        let from = ImageVariant::new(Dimensions::new(self.sz, self.sz), self.format, self.depth_in);
        move || from.to_depth(self.depth_out)
    }
}

fn main() {
    let tests = [
        // A plain copy.
        Convert {
            format: Format::Rgba,
            depth_in: Depth::U8,
            depth_out: Depth::U8,
            sz: 128,
        },
        Convert {
            format: Format::Rgba,
            depth_in: Depth::U8,
            depth_out: Depth::F32,
            sz: 128,
        },
        Convert {
            format: Format::Rgba,
            depth_in: Depth::F32,
            depth_out: Depth::U8,
            sz: 128,
        },
        Convert {
            format: Format::Rgb,
            depth_in: Depth::U16,
            depth_out: Depth::U8,
            sz: 128,
        },
        Convert {
            format: Format::Grey,
            depth_in: Depth::U8,
            depth_out: Depth::U16,
            sz: 128,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|convert| {
        Bench::new(format!("rasterimage::variant::{}", convert.name())).run(convert.prepare())
    }));
    benches.finish();
}

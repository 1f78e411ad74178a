use timview::core::{
    resize, Image, Kernel, ResampleConfig, ResizeError, ResizeStrategy, Rgba16, Rgba8,
};

fn gradient(w: usize, h: usize) -> Image {
    let mut px = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let r = (x * 255 / (w - 1).max(1)) as u8;
            let g = (y * 255 / (h - 1).max(1)) as u8;
            px.push(Rgba8::new(r, g, 100, 255).into());
        }
    }
    Image::from_vec(w, h, px).unwrap()
}

fn max_channel_diff(a: &Image, b: &Image) -> u8 {
    a.pixels()
        .iter()
        .zip(b.pixels())
        .map(|(p, q)| {
            let (p, q) = (p.to_rgba8(), q.to_rgba8());
            [
                p.r.abs_diff(q.r),
                p.g.abs_diff(q.g),
                p.b.abs_diff(q.b),
                p.a.abs_diff(q.a),
            ]
            .into_iter()
            .max()
            .unwrap()
        })
        .max()
        .unwrap()
}

#[test]
fn zero_by_zero_is_identity() {
    let img = gradient(7, 5);
    let out = resize(&img, 0, 0, &ResampleConfig::default()).unwrap();
    assert_eq!(out, img);
}

#[test]
fn derived_height_preserves_aspect_ratio() {
    let img = gradient(40, 30);
    let out = resize(&img, 10, 0, &ResampleConfig::default()).unwrap();
    assert_eq!(out.dimensions(), (10, 8)); // round(10 * 30 / 40) = round(7.5)

    let out = resize(&img, 0, 15, &ResampleConfig::default()).unwrap();
    assert_eq!(out.dimensions(), (20, 15));
}

#[test]
fn same_size_single_sample_stays_close_to_source() {
    // A slow gradient: half-pixel offsets only move values a little.
    let mut px = Vec::new();
    for y in 0..12usize {
        for x in 0..12usize {
            px.push(Rgba8::opaque(100 + x as u8, 100 + y as u8, 150).into());
        }
    }
    let img = Image::from_vec(12, 12, px).unwrap();
    let out = resize(&img, 12, 12, &ResampleConfig::new(Kernel::MitchellNetravali, 1)).unwrap();

    assert_eq!(out.dimensions(), (12, 12));
    assert!(max_channel_diff(&img, &out) <= 2, "diff {}", max_channel_diff(&img, &out));
}

#[test]
fn uniform_color_survives_every_kernel_and_strategy() {
    let color = Rgba8::new(12, 34, 56, 255);
    let img = Image::new_fill(33, 21, color.into());

    // Mitchell keeps a positive weight sum even for sub-samples left of the
    // image edge. Kernels with deeper negative lobes are checked on the
    // two-stage path only, where every sample lands inside the image.
    let cases = [
        (Kernel::MitchellNetravali, &[1u32, 2, 3, 16, 40][..]),
        (Kernel::BiCubic, &[2, 3, 16][..]),
        (Kernel::Lanczos, &[2, 3, 16][..]),
    ];
    for (kernel, samples) in cases {
        for &samples in samples {
            let out = resize(&img, 9, 0, &ResampleConfig::new(kernel, samples)).unwrap();
            for p in out.pixels() {
                let c = p.to_rgba8();
                assert!(c.r.abs_diff(12) <= 1 && c.g.abs_diff(34) <= 1 && c.b.abs_diff(56) <= 1);
                assert!(c.a >= 254);
            }
        }
    }
}

#[test]
fn negative_lobe_edges_go_transparent_on_the_grid_path() {
    // One sub-sample per pixel sits half a pixel up and left of the target
    // pixel. Along the top and left edges the in-bounds Lanczos taps then sum
    // to a negative weight. The corner multiplies two negative sums and stays
    // opaque.
    let color = Rgba8::opaque(12, 34, 56);
    let img = Image::new_fill(33, 21, color.into());
    let out = resize(&img, 9, 0, &ResampleConfig::new(Kernel::Lanczos, 1)).unwrap();
    assert_eq!(out.dimensions(), (9, 6));

    let mut transparent = 0;
    for y in 0..6 {
        for x in 0..9 {
            let c = out.get(x, y).unwrap().to_rgba8();
            if (x == 0) != (y == 0) {
                assert_eq!(c, Rgba8::TRANSPARENT, "({x}, {y})");
                transparent += 1;
            } else {
                assert_eq!(c, color, "({x}, {y})");
            }
        }
    }
    assert_eq!(transparent, 13);
}

#[test]
fn strategy_switches_on_intermediate_size() {
    assert_eq!(
        ResizeStrategy::select(33, 21, 16),
        ResizeStrategy::TwoStage { width: 2, height: 1 }
    );
    assert_eq!(ResizeStrategy::select(33, 21, 40), ResizeStrategy::MultiSample);
}

#[test]
fn adversarial_input_stays_in_channel_range() {
    // Alternating opaque white and fully transparent black pixels drive
    // negative kernel lobes as hard as they go.
    let mut px = Vec::new();
    for y in 0..17usize {
        for x in 0..23usize {
            px.push(if (x / 2 + y) % 2 == 0 {
                Rgba16::new(0xffff, 0xffff, 0xffff, 0xffff)
            } else {
                Rgba16::new(0, 0, 0, 0)
            });
        }
    }
    let img = Image::from_vec(23, 17, px).unwrap();

    for kernel in Kernel::ALL {
        for (w, samples) in [(5, 2), (40, 1), (11, 30)] {
            let out = resize(&img, w, 0, &ResampleConfig::new(kernel, samples)).unwrap();
            for p in out.pixels() {
                // Stored as widened 8-bit values, so the low byte mirrors the high byte.
                assert_eq!(p.r & 0xff, p.r >> 8);
                assert_eq!(p.a & 0xff, p.a >> 8);
            }
        }
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    let empty = Image::from_vec(0, 0, vec![]).unwrap();
    assert!(matches!(
        resize(&empty, 4, 4, &ResampleConfig::default()),
        Err(ResizeError::InvalidDimensions { .. })
    ));

    let img = gradient(4, 4);
    assert_eq!(
        resize(&img, 4, 4, &ResampleConfig::new(Kernel::Lanczos, 0)),
        Err(ResizeError::InvalidSampleCount(0))
    );
}

#[test]
fn single_pixel_wide_source_does_not_divide_by_zero() {
    let img = Image::new_fill(1, 9, Rgba8::opaque(200, 10, 10).into());
    let out = resize(&img, 3, 0, &ResampleConfig::default()).unwrap();
    assert_eq!(out.dimensions(), (3, 27));
    assert_eq!(out.get(1, 13).unwrap().to_rgba8(), Rgba8::opaque(200, 10, 10));
}

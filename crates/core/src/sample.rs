use crate::image::{Image, Rgba8};
use crate::kernel::Kernel;

/// Interpolate one color at continuous source position `(x, y)`.
///
/// Gathers taps `floor(x) - r ..= floor(x) + r + 1` on each axis and weights
/// each by `kernel(|dx| / r) * kernel(|dy| / r)`. Taps outside the image are
/// skipped. When the accumulated weight is not positive the result is
/// transparent black. A zero radius is treated as 1.
pub fn sample_weighted(img: &Image, x: f64, y: f64, kernel: Kernel, radius: u32) -> Rgba8 {
    let r = radius.max(1) as isize;
    let rf = r as f64;

    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let w = img.width() as isize;
    let h = img.height() as isize;

    let mut acc = [0.0f64; 4];
    let mut total = 0.0f64;

    for i in -r..=r + 1 {
        let sx = x0 + i;
        if sx < 0 || sx >= w {
            continue;
        }
        let wx = kernel.weight((x - sx as f64) / rf);

        for j in -r..=r + 1 {
            let sy = y0 + j;
            if sy < 0 || sy >= h {
                continue;
            }
            let Some(px) = img.get(sx as usize, sy as usize) else {
                continue;
            };

            let weight = wx * kernel.weight((y - sy as f64) / rf);
            for (sum, c) in acc.iter_mut().zip(px.channels8()) {
                *sum += c * weight;
            }
            total += weight;
        }
    }

    if total <= 0.0 {
        return Rgba8::TRANSPARENT;
    }

    Rgba8 {
        r: quantize(acc[0] / total),
        g: quantize(acc[1] / total),
        b: quantize(acc[2] / total),
        a: quantize(acc[3] / total),
    }
}

/// Clamp to `[0, 255]` and round. NaN maps to 0.
#[inline]
pub(crate) fn quantize(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

use image::{GrayImage, Luma, Rgba, RgbaImage, imageops};

// Palette: dark tile, muted red accent (easier on the eyes than pure red)
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const ACCENT: Rgba<u8> = Rgba([204, 77, 77, 255]);
const BAR_DIM: Rgba<u8> = Rgba([255, 255, 255, 100]);
const GLOW: Rgba<u8> = Rgba([204, 77, 77, 80]);

// macOS icon corner radius is roughly 22.37% of the edge length
const CORNER_RATIO: f32 = 0.2237;

/// Geometry of the three reading-guide bars, derived from the edge length.
struct BarLayout {
    height: u32,
    spacing: u32,
    short: u32,
    long: u32,
    shift: u32,
}

impl BarLayout {
    fn for_size(size: u32) -> Self {
        BarLayout {
            height: (size / 12).max(2),
            spacing: (size / 6).max(3),
            short: size / 4,
            long: size / 3,
            shift: size / 16,
        }
    }
}

/// Render the app icon at the given edge length.
///
/// A dark rounded tile with three stacked horizontal bars: the center bar is
/// the accent-colored fixation marker, the outer two are dimmer and offset
/// sideways. Sizes of 128px and up get a soft glow behind the center bar.
/// Deterministic, pure function of `size`.
pub fn render(size: u32) -> RgbaImage {
    let radius = (size as f32 * CORNER_RATIO).round();
    let mut img = RgbaImage::new(size, size);

    fill_rounded_rect(&mut img, 0.0, 0.0, size as f32, size as f32, radius, BACKGROUND);

    let bars = BarLayout::for_size(size);
    let center_y = (size / 2) as i64;

    // The glow goes under the bars, so composite it before drawing them.
    if size >= 128 {
        let glow = glow_layer(size, &bars);
        imageops::overlay(&mut img, &glow, 0, 0);
    }

    let top_x = ((size - bars.short) / 2 + bars.shift) as i64;
    let top_y = center_y - bars.spacing as i64 - bars.height as i64;
    fill_pill(&mut img, top_x, top_y, bars.short, bars.height, BAR_DIM);

    let mid_x = ((size - bars.long) / 2) as i64;
    let mid_y = center_y - (bars.height / 2) as i64;
    fill_pill(&mut img, mid_x, mid_y, bars.long, bars.height, ACCENT);

    let bot_x = ((size - bars.short) / 2 - bars.shift) as i64;
    let bot_y = center_y + bars.spacing as i64;
    fill_pill(&mut img, bot_x, bot_y, bars.short, bars.height, BAR_DIM);

    let mask = rounded_mask(size, radius);
    apply_alpha_mask(&mut img, &mask);

    img
}

// Enlarged, semi-transparent copy of the accent bar, Gaussian-blurred into a
// soft halo. Returned as its own layer for compositing under the bars.
fn glow_layer(size: u32, bars: &BarLayout) -> RgbaImage {
    let mut layer = RgbaImage::new(size, size);
    let w = bars.long + size / 8;
    let h = bars.height + size / 16;
    let x = ((size - w) / 2) as f32;
    let y = (size / 2) as f32 - h as f32 / 2.0;
    fill_rounded_rect(&mut layer, x, y, w as f32, h as f32, h as f32 / 2.0, GLOW);
    imageops::blur(&layer, (size / 20) as f32)
}

fn fill_pill(img: &mut RgbaImage, x: i64, y: i64, w: u32, h: u32, color: Rgba<u8>) {
    fill_rounded_rect(img, x as f32, y as f32, w as f32, h as f32, h as f32 / 2.0, color);
}

/// Src-over fill of a rounded rectangle, edges antialiased over half a pixel.
fn fill_rounded_rect(img: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Rgba<u8>) {
    let radius = radius.min(w / 2.0).min(h / 2.0);
    let (iw, ih) = img.dimensions();
    let x0 = x.floor().max(0.0) as u32;
    let y0 = y.floor().max(0.0) as u32;
    let x1 = ((x + w).ceil() as i64).clamp(0, iw as i64) as u32;
    let y1 = ((y + h).ceil() as i64).clamp(0, ih as i64) as u32;
    for py in y0..y1 {
        for px in x0..x1 {
            let cov = coverage(px as f32 + 0.5, py as f32 + 0.5, x, y, w, h, radius);
            if cov > 0.0 {
                blend(img.get_pixel_mut(px, py), color, cov);
            }
        }
    }
}

// Pixel coverage from the signed distance to the rounded-rect boundary.
fn coverage(px: f32, py: f32, x: f32, y: f32, w: f32, h: f32, radius: f32) -> f32 {
    let qx = (px - (x + w / 2.0)).abs() - (w / 2.0 - radius);
    let qy = (py - (y + h / 2.0)).abs() - (h / 2.0 - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    let dist = outside + inside - radius;
    (0.5 - dist).clamp(0.0, 1.0)
}

// Non-premultiplied src-over. Drawing onto a fully transparent pixel keeps
// the source color untouched so a blurred layer retains its hue.
#[inline]
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, cov: f32) {
    let sa = src[3] as f32 / 255.0 * cov;
    let da = dst[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa <= 0.0 {
        return;
    }
    for i in 0..3 {
        let c = (src[i] as f32 * sa + dst[i] as f32 * da * (1.0 - sa)) / oa;
        dst[i] = c.round() as u8;
    }
    dst[3] = (oa * 255.0).round() as u8;
}

fn rounded_mask(size: u32, radius: f32) -> GrayImage {
    GrayImage::from_fn(size, size, |px, py| {
        let cov = coverage(
            px as f32 + 0.5,
            py as f32 + 0.5,
            0.0,
            0.0,
            size as f32,
            size as f32,
            radius,
        );
        Luma([(cov * 255.0).round() as u8])
    })
}

// putalpha-style: the mask becomes the image's alpha channel, clipping the
// corners outside the rounded boundary to transparency.
fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) {
    for (dst, m) in img.pixels_mut().zip(mask.pixels()) {
        dst[3] = m[0];
    }
}

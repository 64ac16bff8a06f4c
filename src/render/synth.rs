use crate::foundation::error::NoisetexResult;
use crate::noise::field::NoiseField;
use crate::render::buffer::PixelBuffer;
use crate::render::settings::NoiseSettings;

/// Render the base gradient serially, without grain.
///
/// One noise field drives all three channels: green samples are shifted by
/// `size` along x and blue by `size` along y, which lands them in different
/// regions of the permutation lattice and decorrelates the channels without
/// needing three tables. Validates `settings` before allocating.
pub fn render_base(settings: &NoiseSettings, field: &NoiseField) -> NoisetexResult<PixelBuffer> {
    settings.validate()?;
    let size = settings.size;
    let mut out = PixelBuffer::new(size);
    let row_bytes = size as usize * 4;
    for (y, row) in out.data_mut().chunks_exact_mut(row_bytes).enumerate() {
        fill_row(row, y as u32, settings, field);
    }
    Ok(out)
}

/// Fill one output row with mapped gradient samples.
///
/// `row` must be exactly `4 * settings.size` bytes. Rows are independent, so
/// the pipeline may hand disjoint rows to parallel workers.
pub(crate) fn fill_row(row: &mut [u8], y: u32, settings: &NoiseSettings, field: &NoiseField) {
    let scale = settings.scale;
    let size = f64::from(settings.size);
    let fy = f64::from(y);

    for (x, px) in row.chunks_exact_mut(4).enumerate() {
        let fx = x as f64;

        let r = field.evaluate(fx * scale, fy * scale);
        let g = field.evaluate((fx + size) * scale, fy * scale);
        let b = field.evaluate(fx * scale, (fy + size) * scale);

        px[0] = map_channel(r, settings.red_intensity, settings.contrast);
        px[1] = map_channel(g, settings.green_intensity, settings.contrast);
        px[2] = map_channel(b, settings.blue_intensity, settings.contrast);
        px[3] = 255;
    }
}

/// Map a noise value in ~[-1, 1] to a channel byte.
///
/// `floor((v + 1) * 128 * intensity * contrast)`, saturated to `[0, 255]`.
/// Intensity or contrast above 1 can push the product past 255, and negative
/// intensity below 0.
fn map_channel(v: f64, intensity: f64, contrast: f64) -> u8 {
    ((v + 1.0) * 128.0 * intensity * contrast).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/synth.rs"]
mod tests;

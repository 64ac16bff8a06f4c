use rand::Rng;

use crate::render::buffer::GrainBuffer;

/// Generate a grain overlay: per pixel, per RGB channel, a perturbation of
/// magnitude `intensity * 255` with an independently drawn sign.
///
/// Pure in-memory computation; dimensions are explicit and no drawing surface
/// is involved. Draws from `rng` in row-major pixel order, channel by
/// channel, so a seeded source reproduces the same overlay every time.
pub fn generate_grain<R: Rng + ?Sized>(size: u32, intensity: f64, rng: &mut R) -> GrainBuffer {
    let mut out = GrainBuffer::new(size);
    let magnitude = (intensity * 255.0) as f32;
    for v in out.data_mut() {
        let sign = if rng.r#gen::<f64>() > 0.5 { 1.0 } else { -1.0 };
        *v = sign * magnitude;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/grain.rs"]
mod tests;

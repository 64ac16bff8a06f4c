use crate::foundation::error::{NoisetexError, NoisetexResult};
use crate::render::buffer::{GrainBuffer, PixelBuffer};

/// Contrast boost applied to the overlay's contribution during the blend.
/// The base image is never scaled.
pub const GRAIN_CONTRAST_BOOST: f64 = 1.5;

/// Blend a grain overlay into `base` in place.
///
/// Per RGB channel: a negative perturbation darkens, floored at 0; a
/// non-negative one brightens, capped at 255. Alpha is untouched. Errors if
/// the buffers disagree on dimensions.
pub fn blend_grain(base: &mut PixelBuffer, overlay: &GrainBuffer) -> NoisetexResult<()> {
    if base.size() != overlay.size() {
        return Err(NoisetexError::buffer_mismatch(format!(
            "base is {0}x{0}, overlay is {1}x{1}",
            base.size(),
            overlay.size()
        )));
    }

    for (px, grain) in base
        .data_mut()
        .chunks_exact_mut(4)
        .zip(overlay.data().chunks_exact(3))
    {
        for (ch, &g) in px[..3].iter_mut().zip(grain) {
            let boosted = f64::from(g) * GRAIN_CONTRAST_BOOST;
            let v = f64::from(*ch) + boosted;
            *ch = if boosted < 0.0 {
                v.max(0.0) as u8
            } else {
                v.min(255.0) as u8
            };
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

use crate::foundation::error::{NoisetexError, NoisetexResult};

/// Default vibrance applied to the channel mapping (no enhancement).
pub const DEFAULT_CONTRAST: f64 = 1.0;

/// Historical "enhanced" vibrance variant; pass as `contrast` to reproduce it.
pub const CONTRAST_ENHANCED: f64 = 1.2;

/// Texture edge lengths offered by the settings UI, in pixels.
pub const AVAILABLE_SIZES: [u32; 5] = [800, 1200, 2000, 2400, 4000];

/// User-adjustable parameters for one texture render.
///
/// Supplied by the host's settings store and validated once at the synthesis
/// boundary. `grain_intensity == 0` disables the grain overlay entirely (the
/// compositor is skipped, not fed a zero-magnitude overlay).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NoiseSettings {
    /// Spatial frequency; smaller values stretch the gradient.
    pub scale: f64,
    /// Red channel multiplier.
    pub red_intensity: f64,
    /// Green channel multiplier.
    pub green_intensity: f64,
    /// Blue channel multiplier.
    pub blue_intensity: f64,
    /// Grain overlay strength in `[0, 1]`-ish range; 0 disables grain.
    #[serde(default)]
    pub grain_intensity: f64,
    /// Vibrance applied to every channel, see [`DEFAULT_CONTRAST`].
    #[serde(default = "default_contrast")]
    pub contrast: f64,
    /// Texture edge length in pixels (output is `size x size`).
    pub size: u32,
}

fn default_contrast() -> f64 {
    DEFAULT_CONTRAST
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            scale: 0.003,
            red_intensity: 1.0,
            green_intensity: 1.0,
            blue_intensity: 1.0,
            grain_intensity: 0.0,
            contrast: DEFAULT_CONTRAST,
            size: 800,
        }
    }
}

impl NoiseSettings {
    /// Reject settings that would produce a corrupt or unbounded image.
    ///
    /// Fails fast before any buffer is allocated.
    pub fn validate(&self) -> NoisetexResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(NoisetexError::invalid_settings(format!(
                "scale must be finite and > 0, got {}",
                self.scale
            )));
        }
        if self.size == 0 {
            return Err(NoisetexError::invalid_settings("size must be > 0"));
        }
        for (name, v) in [
            ("red_intensity", self.red_intensity),
            ("green_intensity", self.green_intensity),
            ("blue_intensity", self.blue_intensity),
        ] {
            if !v.is_finite() {
                return Err(NoisetexError::invalid_settings(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }
        if !self.grain_intensity.is_finite() || self.grain_intensity < 0.0 {
            return Err(NoisetexError::invalid_settings(format!(
                "grain_intensity must be finite and >= 0, got {}",
                self.grain_intensity
            )));
        }
        if !self.contrast.is_finite() || self.contrast <= 0.0 {
            return Err(NoisetexError::invalid_settings(format!(
                "contrast must be finite and > 0, got {}",
                self.contrast
            )));
        }
        Ok(())
    }

    /// Whether the grain pass runs at all.
    pub fn grain_enabled(&self) -> bool {
        self.grain_intensity > 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;

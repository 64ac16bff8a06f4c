/// Row-major RGBA8 image, alpha always 255.
///
/// Produced whole by the render pipeline and owned by the caller afterwards;
/// the host side is responsible for any encoding or upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub(crate) fn new(size: u32) -> Self {
        let n = size as usize;
        Self {
            size,
            data: vec![0u8; n * n * 4],
        }
    }

    /// Edge length in pixels; the buffer holds `size * size` RGBA quads.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw bytes, `4 * size * size` long.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// RGBA quad at `(x, y)`. Panics on out-of-range coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.size && y < self.size, "pixel out of range");
        let i = (y as usize * self.size as usize + x as usize) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Consume the buffer, keeping only the raw bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// Signed per-pixel RGB perturbations, same dimensions as the base image.
///
/// Each pixel stores three values of magnitude `intensity * 255` with
/// independently drawn signs. No alpha channel is stored; the blend never
/// touches alpha. Consumed once by the compositor.
#[derive(Clone, Debug, PartialEq)]
pub struct GrainBuffer {
    size: u32,
    data: Vec<f32>,
}

impl GrainBuffer {
    pub(crate) fn new(size: u32) -> Self {
        let n = size as usize;
        Self {
            size,
            data: vec![0f32; n * n * 3],
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw perturbations, `3 * size * size` long, RGB per pixel.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// RGB perturbation at `(x, y)`. Panics on out-of-range coordinates.
    pub fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
        assert!(x < self.size && y < self.size, "pixel out of range");
        let i = (y as usize * self.size as usize + x as usize) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffer.rs"]
mod tests;

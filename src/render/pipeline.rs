use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::Rng;
use rayon::prelude::*;

use crate::foundation::error::{NoisetexError, NoisetexResult};
use crate::noise::field::NoiseField;
use crate::render::buffer::PixelBuffer;
use crate::render::composite::blend_grain;
use crate::render::grain::generate_grain;
use crate::render::settings::NoiseSettings;
use crate::render::synth::fill_row;

/// Default pixel budget: covers every preset size up to 4000 per edge.
pub const DEFAULT_MAX_PIXELS: u64 = 4096 * 4096;

/// Cooperative cancellation handle for an in-flight render.
///
/// Cloneable and thread-safe; workers check it between rows. A canceled
/// render returns [`NoisetexError::Canceled`] and no buffer.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Fresh, un-canceled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Threading policy for base synthesis.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Partition rows across a rayon pool instead of rendering serially.
    pub parallel: bool,
    /// Worker count when parallel; `None` lets rayon decide. Must be >= 1
    /// when set.
    pub threads: Option<usize>,
}

/// Knobs for one [`render_texture`] call, separate from the user-facing
/// [`NoiseSettings`].
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Threading policy for base synthesis.
    pub threading: RenderThreading,
    /// Maximum `size * size` accepted before allocating.
    pub max_pixels: u64,
    /// Optional cancellation handle.
    pub cancel: Option<CancelToken>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            threading: RenderThreading::default(),
            max_pixels: DEFAULT_MAX_PIXELS,
            cancel: None,
        }
    }
}

/// What one render call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Edge length of the produced texture.
    pub size: u32,
    /// Whether the grain pass ran.
    pub grain_applied: bool,
    /// Wall-clock time for the whole call.
    pub elapsed: Duration,
}

/// One-shot pipeline: validate, synthesize the base gradient, optionally
/// blend grain, return the finished texture.
///
/// `rng` is only drawn from when `settings.grain_intensity > 0`; with grain
/// disabled the output is a pure function of `field` and `settings`, and the
/// compositor is skipped outright.
pub fn render_texture<R: Rng + ?Sized>(
    settings: &NoiseSettings,
    field: &NoiseField,
    rng: &mut R,
    opts: &RenderOptions,
) -> NoisetexResult<PixelBuffer> {
    render_texture_with_stats(settings, field, rng, opts).map(|(buf, _)| buf)
}

/// [`render_texture`] plus a [`RenderStats`] describing the call.
#[tracing::instrument(skip_all, fields(size = settings.size))]
pub fn render_texture_with_stats<R: Rng + ?Sized>(
    settings: &NoiseSettings,
    field: &NoiseField,
    rng: &mut R,
    opts: &RenderOptions,
) -> NoisetexResult<(PixelBuffer, RenderStats)> {
    let started = Instant::now();
    settings.validate()?;

    let pixels = u64::from(settings.size) * u64::from(settings.size);
    if pixels > opts.max_pixels {
        return Err(NoisetexError::allocation_too_large(format!(
            "{0}x{0} is {pixels} pixels, budget is {1}",
            settings.size, opts.max_pixels
        )));
    }

    let mut base = PixelBuffer::new(settings.size);
    let row_bytes = settings.size as usize * 4;

    if opts.threading.parallel {
        let pool = build_thread_pool(opts.threading.threads)?;
        pool.install(|| {
            base.data_mut()
                .par_chunks_exact_mut(row_bytes)
                .enumerate()
                .try_for_each(|(y, row)| -> NoisetexResult<()> {
                    check_cancel(&opts.cancel)?;
                    fill_row(row, y as u32, settings, field);
                    Ok(())
                })
        })?;
    } else {
        for (y, row) in base.data_mut().chunks_exact_mut(row_bytes).enumerate() {
            check_cancel(&opts.cancel)?;
            fill_row(row, y as u32, settings, field);
        }
    }

    let grain_applied = settings.grain_enabled();
    if grain_applied {
        check_cancel(&opts.cancel)?;
        let overlay = generate_grain(settings.size, settings.grain_intensity, rng);
        blend_grain(&mut base, &overlay)?;
    }

    let stats = RenderStats {
        size: settings.size,
        grain_applied,
        elapsed: started.elapsed(),
    };
    tracing::debug!(?stats, "texture rendered");
    Ok((base, stats))
}

fn check_cancel(cancel: &Option<CancelToken>) -> NoisetexResult<()> {
    match cancel {
        Some(token) if token.is_canceled() => Err(NoisetexError::Canceled),
        _ => Ok(()),
    }
}

fn build_thread_pool(threads: Option<usize>) -> NoisetexResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(NoisetexError::invalid_settings(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| NoisetexError::Other(anyhow::anyhow!("failed to build thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

use noisetex::{
    NoiseField, NoiseSettings, RenderOptions, RenderThreading, render_texture_with_stats,
};
use rand::{SeedableRng, rngs::StdRng};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let settings: NoiseSettings = serde_json::from_str(
        r#"{
            "scale": 0.003,
            "red_intensity": 1.0,
            "green_intensity": 1.0,
            "blue_intensity": 1.0,
            "grain_intensity": 0.075,
            "size": 800
        }"#,
    )?;

    let field = NoiseField::from_seed(42);
    let mut rng = StdRng::seed_from_u64(42);
    let opts = RenderOptions {
        threading: RenderThreading {
            parallel: true,
            threads: None,
        },
        ..RenderOptions::default()
    };

    let (texture, stats) = render_texture_with_stats(&settings, &field, &mut rng, &opts)?;
    println!(
        "rendered {0}x{0} ({1} bytes, grain: {2}) in {3:?}",
        texture.size(),
        texture.data().len(),
        stats.grain_applied,
        stats.elapsed
    );

    Ok(())
}

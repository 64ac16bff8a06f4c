pub mod buffer;
pub mod composite;
pub mod grain;
pub mod pipeline;
pub mod settings;
pub mod synth;

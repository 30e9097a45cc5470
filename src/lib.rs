//! hotswap-probe perturbs asset files on disk so an application's hot-reload path gets exercised.
//!
//! The crate has two halves:
//!
//! - **Encoder**: [`encode_solid_png`] turns an [`Rgb8`] into a complete PNG byte stream for a
//!   2x2 truecolor image. It is pure and deterministic, computes every chunk CRC from the bytes
//!   it writes, and wraps scanlines in a zlib stream via `flate2`.
//! - **Harness**: [`HarnessConfig`] expands into an ordered list of [`Step`]s through
//!   [`build_plan`], and a [`Runner`] executes them against the filesystem. Settings documents
//!   are rewritten, textures are recolored, a temporary texture is created and deleted, and a
//!   rapid burst of settings writes closes the sequence.
//!
//! Pauses only ever go through the [`Clock`] trait, so the full sequence can run instantly under
//! test with a [`RecordingClock`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod harness;
mod png;

pub use foundation::core::Rgb8;
pub use foundation::error::{ProbeError, ProbeResult};
pub use foundation::fs::{ensure_parent_dir, remove_file, write_file};
pub use foundation::rng::Rng64;
pub use harness::config::{HarnessConfig, Phase, RunOverrides};
pub use harness::plan::{Step, build_plan, total_pause};
pub use harness::runner::{Clock, RecordingClock, RunReport, Runner, SystemClock, run_harness};
pub use harness::settings::{SettingsDoc, write_settings};
pub use png::chunk::{PNG_SIGNATURE, chunk_crc};
pub use png::encode::{
    TEXTURE_HEIGHT, TEXTURE_WIDTH, encode_solid_png, encode_solid_png_checked, raw_scanlines,
};
pub use png::inspect::{PngSummary, inspect_png};

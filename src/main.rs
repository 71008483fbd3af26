//! # Voxel Mesher Entry Point
//!
//! Calls into the library's `run()` function and exits non-zero on failure.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match voxel_mesher::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

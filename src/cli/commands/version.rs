//! Version command implementation

use crate::cli::Output;
use crate::{PKG_DESCRIPTION, PKG_NAME, VERSION};
use anyhow::Result;

pub async fn execute(output: &Output) -> Result<()> {
    output.raw(&format!("{} {}", PKG_NAME, VERSION));

    output.key_value("Description:", PKG_DESCRIPTION);
    output.key_value("Worker threads available:", &num_cpus::get().to_string());
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
    );

    Ok(())
}

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read an action script from disk
pub fn read_script(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read script {:?}", path))
}

/// Write rendered output, refusing to replace an existing file unless `overwrite`
pub fn write_output(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!("Output file {:?} already exists (use --force to replace it)", path);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to save to {:?}", path))?;
    Ok(())
}

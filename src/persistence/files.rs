use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the directory holding ticklist state
const STORE_DIR_NAME: &str = ".ticklist";

/// Get the store directory - checks for a local .ticklist first, then falls back to global ~/.ticklist
pub fn get_store_dir() -> Result<PathBuf> {
    // Check for local .ticklist directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let local_store = find_local_store(&current_dir);

    if let Some(local_dir) = local_store {
        return Ok(local_dir);
    }

    // Fall back to global ~/.ticklist
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(STORE_DIR_NAME))
}

/// Find a local .ticklist directory by walking up the directory tree
fn find_local_store(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let store_dir = current.join(STORE_DIR_NAME);
        if store_dir.exists() && store_dir.is_dir() {
            return Some(store_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the store directory exists
pub fn ensure_store_dir() -> Result<PathBuf> {
    let dir = get_store_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .ticklist directory in the current directory
pub fn init_local_store() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let store_dir = current_dir.join(STORE_DIR_NAME);

    if store_dir.exists() {
        anyhow::bail!("Ticklist directory already exists: {}", store_dir.display());
    }

    fs::create_dir_all(&store_dir)
        .with_context(|| format!("Failed to create directory: {}", store_dir.display()))?;

    Ok(store_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    // Write content
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

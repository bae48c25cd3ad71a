//! Writing containers to files

use super::container::RecordContainer;
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Write a container's header and rows to `path`.
///
/// Returns `Ok(false)` without touching the file system when the container
/// has no rows.
pub fn save_container<C: RecordContainer>(path: &Path, container: &C) -> Result<bool> {
    let Some(bytes) = container.to_bytes() else {
        warn!(
            "Container '{}' has no rows, not writing {}",
            container.container_name(),
            path.display()
        );
        return Ok(false);
    };

    std::fs::write(path, &bytes)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    debug!(
        "Wrote {} rows ({} bytes) to {}",
        container.len(),
        bytes.len(),
        path.display()
    );
    Ok(true)
}

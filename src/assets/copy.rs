//! Copy primitives shared by both installers

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::FigbridgeResult;

/// True when the destination already holds the source's exact bytes.
///
/// The runtimes are idempotent static files; an up-to-date destination is
/// left in place, so a read-only copy from an earlier install never
/// triggers the retry path just to rewrite identical content.
pub(crate) fn up_to_date(src: &Path, dest: &Path) -> bool {
    match (hash_file(src), hash_file(dest)) {
        (Ok(src_hash), Ok(dest_hash)) => src_hash == dest_hash,
        _ => false,
    }
}

fn hash_file(path: &Path) -> io::Result<[u8; 32]> {
    let content = fs::read(path)?;
    Ok(Sha256::digest(&content).into())
}

/// Copy `src` to `dest`, deleting the destination and retrying once on
/// failure.
///
/// Destination files left by an earlier install may be read-only; the retry
/// removes the stale file first. A second failure propagates.
pub(crate) fn copy_with_retry(src: &Path, dest: &Path) -> FigbridgeResult<()> {
    if up_to_date(src, dest) {
        log::debug!("{} is up to date, not copied", dest.display());
        return Ok(());
    }

    if let Err(err) = fs::copy(src, dest) {
        log::debug!(
            "copy to {} failed ({err}), deleting and retrying",
            dest.display()
        );
        if dest.exists() {
            fs::remove_file(dest)?;
        }
        fs::copy(src, dest)?;
    }
    Ok(())
}

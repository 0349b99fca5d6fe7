use crate::uniquify::uniquify;
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// 衝突回避込みでリネームを行う。dry-runでは予定を表示するだけで
/// ファイルシステムには触れない。
pub fn rename(
    path: &Path,
    new_path: &Path,
    dry_run: bool,
    separator: &str,
) -> Result<Option<PathBuf>> {
    if new_path == path {
        warn!(
            "リネームしません: {} は既にこの名前です",
            path.display()
        );
        return Ok(Some(path.to_path_buf()));
    }

    let adjusted_new_path = uniquify(new_path, separator);

    if dry_run {
        println!(
            "Would rename {} -> {}",
            path.display(),
            adjusted_new_path.display()
        );
        return Ok(None);
    }

    warn!(
        "リネームします: {} -> {}",
        path.display(),
        adjusted_new_path.display()
    );
    fs::rename(path, &adjusted_new_path).with_context(|| {
        format!(
            "リネームに失敗しました: {} -> {}",
            path.display(),
            adjusted_new_path.display()
        )
    })?;

    Ok(Some(adjusted_new_path))
}

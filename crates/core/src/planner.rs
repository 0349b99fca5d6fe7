use crate::exif_reader::TagSource;
use crate::rename::rename;
use crate::uniquify::split_file_name;
use anyhow::Result;
use chrono::NaiveDateTime;
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// EXIFが記録する日時の固定フォーマット。
pub const EXIF_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";
/// リネーム後のステムの既定フォーマット。
pub const FILE_NAME_FORMAT: &str = "%Y%m%d_%H%M%S";

// 優先順。撮影日時があればそれを、なければ更新日時を使う。
const DATE_TAG_PRIORITY: &[&str] = &["EXIF DateTimeOriginal", "Image DateTime"];

#[derive(Debug, Error)]
#[error("日時の形式が不正です ({expected} を期待): {value}")]
pub struct TimestampFormatError {
    value: String,
    expected: &'static str,
    #[source]
    source: chrono::ParseError,
}

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub dry_run: bool,
    pub file_name_format: String,
    pub separator: String,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            file_name_format: FILE_NAME_FORMAT.to_string(),
            separator: "_".to_string(),
        }
    }
}

/// タグから撮影日時を探し、見つかればリネームを実行役に委ねる。
/// 日時タグが無いファイルはスキップ (Ok(None)) であってエラーではない。
pub fn try_rename(
    path: &Path,
    tags: &impl TagSource,
    options: &RenameOptions,
) -> Result<Option<PathBuf>> {
    let Some(raw) = DATE_TAG_PRIORITY
        .iter()
        .find_map(|name| tags.value_of(name))
    else {
        info!("日付情報が見つかりませんでした: {}", path.display());
        let date_like = tags.keys_containing("Date");
        if !date_like.is_empty() {
            info!("代わりに使えそうなタグ: {:?}", date_like);
        }
        return Ok(None);
    };

    let timestamp =
        NaiveDateTime::parse_from_str(raw, EXIF_TIME_FORMAT).map_err(|source| {
            TimestampFormatError {
                value: raw.to_string(),
                expected: EXIF_TIME_FORMAT,
                source,
            }
        })?;
    let new_stem = timestamp.format(&options.file_name_format).to_string();

    let name = path
        .file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_default();
    let (_, suffixes) = split_file_name(&name);
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let new_path = parent.join(format!("{new_stem}{suffixes}"));

    rename(path, &new_path, options.dry_run, &options.separator)
}

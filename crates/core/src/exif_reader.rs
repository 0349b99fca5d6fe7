use anyhow::{Context, Result};
use exif::{In, Reader};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// タグ名でメタデータを引くための抽象。テストではEXIFデコーダなしで
/// リテラルなタグ集合を差し込める。
pub trait TagSource {
    fn value_of(&self, name: &str) -> Option<&str>;
    fn keys_containing(&self, needle: &str) -> Vec<&str>;
}

#[derive(Debug, Clone, Default)]
pub struct ExifTags {
    entries: BTreeMap<String, String>,
}

impl ExifTags {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TagSource for ExifTags {
    fn value_of(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    fn keys_containing(&self, needle: &str) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| key.contains(needle))
            .map(String::as_str)
            .collect()
    }
}

impl FromIterator<(String, String)> for ExifTags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

pub fn read_tags(path: &Path) -> Result<ExifTags> {
    let file = File::open(path)
        .with_context(|| format!("ファイルを開けませんでした: {}", path.display()))?;
    let mut buf = BufReader::new(file);
    let exif = Reader::new()
        .read_from_container(&mut buf)
        .with_context(|| format!("EXIFを解析できませんでした: {}", path.display()))?;

    let mut entries = BTreeMap::new();
    for field in exif.fields() {
        let value = field
            .display_value()
            .to_string()
            .trim_matches('"')
            .to_string();
        entries.entry(tag_key(field)).or_insert(value);
    }

    Ok(ExifTags { entries })
}

// "EXIF DateTimeOriginal" / "Image DateTime" といった、IFDグループ名を
// 前置する慣例的なキーを組み立てる。
fn tag_key(field: &exif::Field) -> String {
    let group = if field.ifd_num == In::THUMBNAIL {
        "Thumbnail"
    } else {
        match field.tag.context() {
            exif::Context::Tiff => "Image",
            exif::Context::Exif => "EXIF",
            exif::Context::Gps => "GPS",
            exif::Context::Interop => "Interop",
            _ => "Image",
        }
    };
    format!("{} {}", group, field.tag)
}

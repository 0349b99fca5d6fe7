use std::path::{Path, PathBuf};

/// 既存ファイルと衝突しないパスを返す。存在しなければそのまま、
/// 存在すればステムに `{separator}{counter}` を足して最初の空きを探す。
pub fn uniquify(path: &Path, separator: &str) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path
        .file_name()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_default();
    let (stem, suffixes) = split_file_name(&name);

    let mut counter = 1u64;
    loop {
        let candidate = parent.join(format!("{stem}{separator}{counter}{suffixes}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

// 拡張子の連なり全体をサフィックスとして扱う ("foo.tar.gz" -> "foo" + ".tar.gz")。
// 隠しファイルの先頭ドットはステムの一部。
pub(crate) fn split_file_name(name: &str) -> (&str, &str) {
    let trimmed = name.trim_start_matches('.');
    let lead = name.len() - trimmed.len();
    match trimmed.find('.') {
        Some(idx) => name.split_at(lead + idx),
        None => (name, ""),
    }
}

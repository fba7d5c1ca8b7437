use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// 移除編碼名稱中的連字號，用於預設檔名與目錄名（`utf-8` → `utf8`）
pub fn sanitize_encoding_name(encoding: &str) -> String {
    encoding.replace('-', "")
}

/// `<stem>_<encoding><ext>`
pub fn suffixed_file_name(input_path: &Path, sanitized_encoding: &str) -> OsString {
    let mut name = input_path
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push("_");
    name.push(sanitized_encoding);
    if let Some(ext) = input_path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

pub fn default_batch_output_dir(input_dir: &Path, target_encoding: &str) -> PathBuf {
    input_dir.join(format!("converted_{}", sanitize_encoding_name(target_encoding)))
}

/// 計算輸出路徑。
///
/// 單檔模式下 `explicit_output` 原樣使用，否則在輸入檔所在目錄產生
/// `<stem>_<encoding><ext>`。批次模式下檔名規則相同，放在
/// `output_base_dir`（或 `explicit_output`，或 `<輸入目錄>/converted_<encoding>`）之下。
pub fn derive_output_path(
    input_path: &Path,
    target_encoding: &str,
    explicit_output: Option<&Path>,
    is_batch: bool,
    output_base_dir: Option<&Path>,
) -> PathBuf {
    let file_name = suffixed_file_name(input_path, &sanitize_encoding_name(target_encoding));
    if is_batch {
        let base_dir = output_base_dir
            .or(explicit_output)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| {
                default_batch_output_dir(parent_dir(input_path), target_encoding)
            });
        base_dir.join(file_name)
    } else {
        match explicit_output {
            Some(output) => output.to_path_buf(),
            None => input_path.with_file_name(file_name),
        }
    }
}

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// 轉為絕對路徑並以字面方式消去 `.` 與 `..`，不解析符號連結
pub fn absolute_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// 兩個路徑的絕對形式是否相同（輸出會覆寫輸入）
pub fn is_same_path(input_path: &Path, output_path: &Path) -> bool {
    absolute_path(input_path) == absolute_path(output_path)
}

/// 使用者主目錄，依序讀取 `HOME` 與 `USERPROFILE`
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .or_else(|| env::var_os("USERPROFILE").filter(|home| !home.is_empty()))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_hyphens() {
        assert_eq!(sanitize_encoding_name("utf-8"), "utf8");
        assert_eq!(sanitize_encoding_name("utf-16-le"), "utf16le");
        assert_eq!(sanitize_encoding_name("gbk"), "gbk");
    }

    #[test]
    fn single_mode_defaults_next_to_input() {
        let out = derive_output_path(Path::new("lyrics/song.lrc"), "utf-8", None, false, None);
        assert_eq!(out, PathBuf::from("lyrics/song_utf8.lrc"));
    }

    #[test]
    fn single_mode_uses_explicit_output_verbatim() {
        let out = derive_output_path(
            Path::new("song.lrc"),
            "utf-8",
            Some(Path::new("out/fixed.lrc")),
            false,
            None,
        );
        assert_eq!(out, PathBuf::from("out/fixed.lrc"));
    }

    #[test]
    fn batch_mode_defaults_to_converted_subdirectory() {
        let out = derive_output_path(Path::new("subs/a.srt"), "utf-8", None, true, None);
        assert_eq!(out, PathBuf::from("subs/converted_utf8/a_utf8.srt"));
    }

    #[test]
    fn batch_mode_prefers_output_base_dir() {
        let out = derive_output_path(
            Path::new("subs/a.srt"),
            "big5",
            Some(Path::new("ignored")),
            true,
            Some(Path::new("target")),
        );
        assert_eq!(out, PathBuf::from("target/a_big5.srt"));
    }

    #[test]
    fn files_without_extension_keep_no_extension() {
        let out = derive_output_path(Path::new("README"), "utf-8", None, false, None);
        assert_eq!(out, PathBuf::from("README_utf8"));
        let out = derive_output_path(Path::new("dir/.hidden"), "gbk", None, false, None);
        assert_eq!(out, PathBuf::from("dir/.hidden_gbk"));
    }

    #[test]
    fn default_naming_never_targets_the_input() {
        for name in ["a.txt", "notes", ".rc", "x.tar.gz", "b."] {
            for encoding in ["utf-8", "gbk", "-", ""] {
                let input = Path::new("dir").join(name);
                for batch in [false, true] {
                    let out = derive_output_path(&input, encoding, None, batch, None);
                    assert!(!is_same_path(&input, &out), "{} / {}", name, encoding);
                }
            }
        }
    }

    #[test]
    fn same_path_detection_normalizes_components() {
        assert!(is_same_path(Path::new("a/b.txt"), Path::new("a/./c/../b.txt")));
        assert!(!is_same_path(Path::new("a/b.txt"), Path::new("a/b_utf8.txt")));
        let abs = absolute_path(Path::new("x.txt"));
        assert!(abs.is_absolute());
        assert!(is_same_path(Path::new("x.txt"), &abs));
    }
}

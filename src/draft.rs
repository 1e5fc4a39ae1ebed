//! 送信失敗時の入力下書き
//!
//! ストアへの追加が失敗したとき、フォーム入力を `~/.atl/draft.json` に退避する。
//! `atl add --retry` で読み戻し、送信成功時に削除する。

use crate::catalog::FormInput;
use crate::config::atl_home;
use crate::error::{AtlError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// 下書きファイル名
const DRAFT_FILE: &str = "draft.json";

/// 下書きの保存先
#[derive(Debug, Clone)]
pub struct Draft {
    path: PathBuf,
}

impl Draft {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 既定の保存先（`~/.atl/draft.json`）
    pub fn default_location() -> Result<Self> {
        atl_home()
            .map(|dir| Self::new(dir.join(DRAFT_FILE)))
            .ok_or_else(|| AtlError::Config("HOME is not set; cannot locate draft file".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 下書きを読み込む（存在しなければ None）
    pub fn load(&self) -> Result<Option<FormInput>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// 下書きをアトミックに保存
    ///
    /// 同一ディレクトリに一時ファイルを作成し、persist() でリネームする。
    pub fn save(&self, form: &FormInput) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut temp_file = NamedTempFile::new_in(dir)?;
        let json = serde_json::to_string_pretty(form)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;

        match temp_file.persist(&self.path) {
            Ok(_) => Ok(()),
            Err(e) => {
                if e.error.kind() == std::io::ErrorKind::AlreadyExists {
                    fs::remove_file(&self.path)?;
                    e.file.persist(&self.path).map_err(|e| e.error)?;
                    Ok(())
                } else {
                    Err(e.error.into())
                }
            }
        }
    }

    /// 下書きを削除（存在しなければ何もしない）
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "draft_test.rs"]
mod tests;

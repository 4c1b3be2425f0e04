//! iconset 暂存目录的 RAII 守卫
//!
//! 构造时创建目录，`Drop` 时连同内容一起删除。无论打包成功、
//! 失败还是中途 `?` 提前返回，目录都不会残留在磁盘上。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IconError;

/// 暂存目录守卫。
///
/// # 示例
/// ```rust,no_run
/// use tauri_icon_gen::generator::StagingDir;
///
/// # fn demo() -> Result<(), tauri_icon_gen::error::IconError> {
/// let staging = StagingDir::create("src-tauri/icons/icon.iconset")?;
/// // ... 写入 PNG ...
/// # let _ = staging.path();
/// // 离开作用域时目录被删除
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// 创建暂存目录。上次异常退出遗留的同名目录会先被清空。
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, IconError> {
        let path = path.into();

        if path.exists() {
            log::warn!("⚠️ 发现遗留的暂存目录，先行清理: {}", path.display());
            fs::remove_dir_all(&path).map_err(|e| IconError::at_path("清理暂存目录", &path, e))?;
        }

        fs::create_dir_all(&path).map_err(|e| IconError::at_path("创建暂存目录", &path, e))?;
        log::debug!("📁 已创建暂存目录 {}", path.display());

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        match fs::remove_dir_all(&self.path) {
            Ok(()) => log::debug!("🧹 已删除暂存目录 {}", self.path.display()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => log::warn!("删除暂存目录 {} 失败: {}", self.path.display(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_removed_on_drop() {
        let root = tempfile::tempdir().expect("tempdir");
        let path = root.path().join("icon.iconset");

        {
            let staging = StagingDir::create(&path).expect("create staging");
            fs::write(staging.path().join("a.png"), b"x").expect("write");
            assert!(path.is_dir());
        }

        assert!(!path.exists());
    }

    #[test]
    fn directory_is_removed_when_scope_exits_with_error() {
        let root = tempfile::tempdir().expect("tempdir");
        let path = root.path().join("icon.iconset");

        let run = || -> Result<(), IconError> {
            let _staging = StagingDir::create(&path)?;
            Err(IconError::generation("打包", "boom"))
        };

        assert!(run().is_err());
        assert!(!path.exists());
    }

    #[test]
    fn leftover_directory_is_cleared_before_use() {
        let root = tempfile::tempdir().expect("tempdir");
        let path = root.path().join("icon.iconset");
        fs::create_dir_all(&path).expect("mkdir");
        fs::write(path.join("stale.png"), b"old").expect("write");

        let staging = StagingDir::create(&path).expect("create staging");
        assert!(!staging.path().join("stale.png").exists());
    }

    #[test]
    fn drop_tolerates_already_removed_directory() {
        let root = tempfile::tempdir().expect("tempdir");
        let path = root.path().join("icon.iconset");

        let staging = StagingDir::create(&path).expect("create staging");
        fs::remove_dir_all(&path).expect("remove");
        drop(staging);

        assert!(!path.exists());
    }
}

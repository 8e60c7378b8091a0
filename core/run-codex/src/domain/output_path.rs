//! 出力ファイルパスのドメイン型

use crate::domain::settings::DEFAULT_OUTPUT;
use std::path::{Path, PathBuf};

/// パッチの書き込み先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath(PathBuf);

impl OutputPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl Default for OutputPath {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl std::ops::Deref for OutputPath {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for OutputPath {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_is_codex_patch() {
        assert_eq!(OutputPath::default().as_path(), Path::new("codex.patch"));
    }
}

//! system メッセージのドメイン型

use common::error::Error;

const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are an experienced software engineer working on \
this repository. Follow the project's existing conventions (build tool, tests, license) \
and output ONLY a valid unified diff.";

/// system instruction（空でない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInstruction(String);

impl SystemInstruction {
    /// ファイルの内容から作る。trim 後に空なら InvalidArgument。
    pub fn from_file_contents(contents: &str) -> Result<Self, Error> {
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_argument("System instruction file is empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Default for SystemInstruction {
    fn default() -> Self {
        Self(DEFAULT_SYSTEM_INSTRUCTION.to_string())
    }
}

impl std::ops::Deref for SystemInstruction {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

//! ユーザープロンプトのドメイン型（LLM に user メッセージとして送る）

use common::error::Error;

/// 前後の空白を除いた、空でないプロンプト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// STDIN の内容から作る。trim 後に空なら Precondition エラー。
    pub fn from_input(raw: &str) -> Result<Self, Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::precondition("No prompt supplied on STDIN"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::ops::Deref for Prompt {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_trimmed() {
        let p = Prompt::from_input("\n  Implement X\n\tand Y  \n").unwrap();
        assert_eq!(&*p, "Implement X\n\tand Y");
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace_verbatim() {
        let p = Prompt::from_input("a  b\n\nc").unwrap();
        assert_eq!(&*p, "a  b\n\nc");
    }

    #[test]
    fn test_empty_or_whitespace_prompt_is_precondition_error() {
        for raw in ["", "   ", "\n\t\r\n "] {
            let err = Prompt::from_input(raw).unwrap_err();
            assert!(matches!(err, Error::Precondition { .. }));
            assert!(err.to_string().contains("No prompt supplied"));
        }
    }
}

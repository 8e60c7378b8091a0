//! 標準入力からプロンプトを読む PromptSource 実装

use crate::ports::outbound::PromptSource;
use common::error::Error;
use std::io::Read;

/// STDIN を EOF まで読む
#[derive(Debug, Clone, Default)]
pub struct StdinPromptSource;

impl PromptSource for StdinPromptSource {
    fn read_prompt(&self) -> Result<String, Error> {
        let mut buf = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .map_err(|e| Error::io_msg(format!("Failed to read prompt from STDIN: {}", e)))?;
        Ok(buf)
    }
}

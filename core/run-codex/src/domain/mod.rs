//! run-codex 固有のドメイン型（型と不変条件）

pub mod command;
pub mod output_path;
pub mod prompt;
pub mod settings;
pub mod system_instruction;

pub use command::RunCodexCommand;
pub use output_path::OutputPath;
pub use prompt::Prompt;
pub use system_instruction::SystemInstruction;

pub(crate) mod run_prompt;

pub(crate) use run_prompt::{PatchWritten, RunPromptDeps, RunPromptUseCase};

mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::RunCodexCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_run_codex, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started")
                .field("command", command_name),
        );

        let result = match cmd {
            RunCodexCommand::Help => {
                print_help();
                Ok(0)
            }
            RunCodexCommand::Run {
                output,
                system_file,
            } => self
                .app
                .run_prompt
                .run(&output, system_file.as_deref())
                .map(|written| {
                    println!("{}", written);
                    0
                }),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::new(LogLevel::Error, "cli", "error", e.to_string()));
        }
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .field("command", command_name)
                .field("exit_code", code),
        );
        result
    }
}

fn cmd_name_for_log(cmd: &RunCodexCommand) -> &'static str {
    match cmd {
        RunCodexCommand::Help => "help",
        RunCodexCommand::Run { .. } => "run",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("run-codex: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_run_codex(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: echo \"<prompt>\" | run-codex [options]");
}

fn print_help() {
    println!("Usage: echo \"<prompt>\" | run-codex [options]");
    println!("Options:");
    println!("  -h, --help                    Show this help message");
    println!("  -o, --output <path>           Write the patch to <path> (default: codex.patch, overwritten each run)");
    println!("  -S, --system-file <path>      Read the system instruction from <path> instead of the built-in one");
    println!("  -v, --verbose                 Emit structured logs to stderr");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  OPENAI_API_KEY     API key (required)");
    println!("  OPENAI_BASE_URL    Endpoint base URL (default: https://api.openai.com/v1)");
    println!("  OPENAI_ORG_ID      Sent as OpenAI-Organization when set");
    println!("  OPENAI_PROJECT_ID  Sent as OpenAI-Project when set");
    println!("  RUN_CODEX_LOG      Append JSONL logs to this file");
    println!();
    println!("Description:");
    println!("  Reads the whole of STDIN as the prompt, sends it once to gpt-4o-mini");
    println!("  and writes the reply (expected to be a unified diff) to the output file.");
    println!();
    println!("Examples:");
    println!("  echo \"Implement X\" | run-codex");
    println!("  run-codex -o fix.patch < task.md");
}

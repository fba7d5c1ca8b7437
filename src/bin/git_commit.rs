use std::process::ExitCode;

use script_tools::action::git::process_git_cli;

fn main() -> ExitCode {
    match process_git_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("錯誤：{}", e);
            ExitCode::FAILURE
        }
    }
}

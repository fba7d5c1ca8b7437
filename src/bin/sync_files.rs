use std::process::ExitCode;

use script_tools::action::sync::process_sync_cli;

fn main() -> ExitCode {
    match process_sync_cli() {
        Ok(report) if report.summary.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("錯誤：{}", e);
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use script_tools::action::cli::process_args;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(output) => {
            log::info!("程式執行完成，輸出位置：{}", output.output_path.display());
            if output.report.summary.has_failures() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("錯誤：{}", e);
            ExitCode::FAILURE
        }
    }
}

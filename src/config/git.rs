use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "git_commit",
    about = "依序執行 git add、git commit 與 git push",
    arg_required_else_help = true
)]
pub struct GitCli {
    /// 提交訊息
    #[arg(short = 'm', long = "message")]
    pub message: String,
    /// 推送的分支名稱
    #[arg(short = 'b', long = "branch", default_value = "main")]
    pub branch: String,
    /// 儲存庫目錄（預設為目前目錄）
    #[arg(short = 'C', long = "repo")]
    pub repo: Option<String>,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

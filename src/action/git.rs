use std::io;
use std::path::PathBuf;
use clap::Parser;
use crate::config::git::GitCli;
use crate::service::git::{GitService, SystemGitRunner};
use crate::utils::utils::setup_logging;

pub fn process_git_cli() -> io::Result<()> {
    let cli = GitCli::parse();
    setup_logging(&cli.log_level)?;

    println!("\nGit 提交腳本\n");
    let service = GitService::new(SystemGitRunner::new(cli.repo.as_ref().map(PathBuf::from)));
    service
        .commit_and_push(&cli.message, &cli.branch)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("\nGit 提交腳本執行完成\n");
    Ok(())
}

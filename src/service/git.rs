use std::io;
use std::path::PathBuf;
use std::process::Command;
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("無法執行 git（{step}）：{source}")]
    Spawn {
        step: String,
        #[source]
        source: io::Error,
    },
    #[error("{step} 失敗，結束代碼：{code}")]
    Status { step: String, code: i32 },
}

/// 單一 git 步驟：顯示標題與傳給 git 的參數
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitStep {
    pub title: String,
    pub args: Vec<String>,
}

impl GitStep {
    fn command_line(&self) -> String {
        format!("git {}", self.args.join(" "))
    }
}

/// 執行 git 子程序的介面，回傳結束代碼（被訊號終止時為 -1）
pub trait GitRunner {
    fn run(&self, args: &[String]) -> io::Result<i32>;
}

pub struct SystemGitRunner {
    repo: Option<PathBuf>,
}

impl SystemGitRunner {
    pub fn new(repo: Option<PathBuf>) -> Self {
        SystemGitRunner { repo }
    }
}

impl GitRunner for SystemGitRunner {
    fn run(&self, args: &[String]) -> io::Result<i32> {
        let mut command = Command::new("git");
        command.args(args);
        if let Some(repo) = &self.repo {
            command.current_dir(repo);
        }
        let status = command.status()?;
        Ok(status.code().unwrap_or(-1))
    }
}

pub fn plan_steps(message: &str, branch: &str) -> Vec<GitStep> {
    vec![
        GitStep {
            title: "1. 將所有檔案加入暫存區".to_string(),
            args: vec!["add".to_string(), ".".to_string()],
        },
        GitStep {
            title: "2. 提交變更".to_string(),
            args: vec!["commit".to_string(), "-m".to_string(), message.to_string()],
        },
        GitStep {
            title: format!("3. 推送到遠端分支 {}", branch),
            args: vec!["push".to_string(), "origin".to_string(), branch.to_string()],
        },
    ]
}

pub struct GitService<R: GitRunner> {
    runner: R,
}

impl<R: GitRunner> GitService<R> {
    pub fn new(runner: R) -> Self {
        GitService { runner }
    }

    /// 依序執行 add → commit → push；任一步驟失敗即停止
    pub fn commit_and_push(&self, message: &str, branch: &str) -> Result<(), GitError> {
        for step in plan_steps(message, branch) {
            println!("{}", step.title);
            debug!("執行：{}", step.command_line());
            let code = self.runner.run(&step.args).map_err(|source| GitError::Spawn {
                step: step.command_line(),
                source,
            })?;
            if code != 0 {
                return Err(GitError::Status {
                    step: step.command_line(),
                    code,
                });
            }
            info!("{} 完成", step.command_line());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingRunner {
        calls: RefCell<Vec<Vec<String>>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingRunner {
        fn new(fail_on: Option<&'static str>) -> Self {
            RecordingRunner { calls: RefCell::new(Vec::new()), fail_on }
        }
    }

    impl GitRunner for RecordingRunner {
        fn run(&self, args: &[String]) -> io::Result<i32> {
            self.calls.borrow_mut().push(args.to_vec());
            Ok(if self.fail_on == Some(args[0].as_str()) { 1 } else { 0 })
        }
    }

    #[test]
    fn runs_add_commit_push_in_order() {
        let service = GitService::new(RecordingRunner::new(None));
        service.commit_and_push("msg with \"quotes\" && rm -rf", "dev").unwrap();

        let calls = service.runner.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], vec!["add", "."]);
        assert_eq!(calls[1], vec!["commit", "-m", "msg with \"quotes\" && rm -rf"]);
        assert_eq!(calls[2], vec!["push", "origin", "dev"]);
    }

    #[test]
    fn step_titles_name_the_branch() {
        let titles: Vec<String> = plan_steps("msg", "dev").into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["1. 將所有檔案加入暫存區", "2. 提交變更", "3. 推送到遠端分支 dev"]);
    }

    #[test]
    fn stops_after_failed_step() {
        let service = GitService::new(RecordingRunner::new(Some("commit")));
        let err = service.commit_and_push("msg", "main").unwrap_err();

        assert!(matches!(err, GitError::Status { code: 1, .. }));
        assert_eq!(service.runner.calls.borrow().len(), 2);
    }
}

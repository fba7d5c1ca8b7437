use std::io;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use regex::RegexSet;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else if total == 0 {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{msg} {spinner} 已處理: {pos} 檔案")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} ETA: {eta_precise}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb
        };
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn update(&self, count: u64, action: &str) {
        if self.no_progress {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        let speed = if elapsed > 0.0 { count as f64 / elapsed } else { 0.0 };
        self.pb.set_message(format!("{}，速度：{:.0} 檔案/秒", action, speed));
        self.pb.set_position(count);
    }

    /// 輸出一行進度訊息；進度條隱藏時直接寫到標準輸出
    pub fn println(&self, line: impl AsRef<str>) {
        if self.pb.is_hidden() {
            println!("{}", line.as_ref());
        } else {
            self.pb.println(line.as_ref());
        }
    }

    pub fn finish(&self, message: String) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message(message);
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

pub fn format_file_size(size: usize) -> String {
    if size < 1024 * 1024 {
        format!("{:.2} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

/// 將 glob 模式（`*`、`?`、`[...]`）轉為完整比對的正規表示式
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex = String::from("(?s)^");
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '[' => {
                let mut j = i;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    regex.push_str("\\[");
                    continue;
                }
                regex.push('[');
                for (offset, &ch) in chars[i..j].iter().enumerate() {
                    match ch {
                        '!' if offset == 0 => regex.push('^'),
                        '^' if offset == 0 => regex.push_str("\\^"),
                        '\\' | '[' | ']' | '&' | '~' => {
                            regex.push('\\');
                            regex.push(ch);
                        }
                        _ => regex.push(ch),
                    }
                }
                regex.push(']');
                i = j + 1;
            }
            _ => regex.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
    }
    regex.push('$');
    regex
}

pub fn create_regex_set(patterns: &[String]) -> Result<RegexSet, regex::Error> {
    let regex_patterns: Vec<_> = patterns.iter().map(|p| glob_to_regex(p)).collect();
    RegexSet::new(&regex_patterns)
}

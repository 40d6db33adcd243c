//! 行式控制台
//!
//! 筛选与复核循环只通过 Console trait 收发文本：一行提示、一行输入。
//! StdConsole 接标准输入输出；测试用 ScriptedConsole（见 scripted.rs）。

use std::io::{BufRead, Write};

pub trait Console {
    /// 打印提示并读取一行（去掉行尾换行）；输入结束时返回 None
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// 输出一行信息
    fn show(&mut self, line: &str);
}

/// 标准输入输出控制台
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut buf = String::new();
        if std::io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    fn show(&mut self, line: &str) {
        println!("{}", line);
    }
}

//! 脚本控制台（用于测试，无需终端）
//!
//! 按顺序回放预设输入，输入耗尽后返回 None（等同于 EOF）；所有提示与输出记录在 transcript 中。

use std::collections::VecDeque;

use crate::ui::Console;

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// 是否有输出行包含给定片段
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        let input = self.inputs.pop_front();
        self.transcript
            .push(format!("{}{}", prompt, input.as_deref().unwrap_or("<eof>")));
        Ok(input)
    }

    fn show(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}

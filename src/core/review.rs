//! 复核循环：提交前检查本次新增
//!
//! 每轮列出全部新增（已撤回的显示 X），然后读取一条修正：
//! 空行结束；数字按位置撤回；其它文本按词补加。越界数字为致命错误，整个会话不落盘。

use crate::core::error::PickerError;
use crate::core::session::TriageSession;
use crate::ui::Console;

pub const AMENDMENT_PROMPT: &str = "Amendment: ";

const SEPARATOR: &str = "=====================================";

/// 一行修正输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amendment {
    Finish,
    Retract(usize),
    Add(String),
}

impl Amendment {
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::Finish;
        }
        if input.chars().all(|c| c.is_ascii_digit()) {
            // 超出 usize 的数字同样按越界处理
            return Self::Retract(input.parse().unwrap_or(usize::MAX));
        }
        Self::Add(input.to_string())
    }
}

/// 列表的一行：撤回的条目用 X 代替序号
pub fn render_additions(session: &TriageSession) -> Vec<String> {
    session
        .additions()
        .iter()
        .enumerate()
        .map(|(pos, &index)| {
            let word = session.catalog().word(index).unwrap_or_default();
            if session.is_retracted(index) {
                format!("X : {}", word)
            } else {
                format!("{} : {}", pos, word)
            }
        })
        .collect()
}

pub fn review_loop<C: Console + ?Sized>(
    session: &mut TriageSession,
    console: &mut C,
) -> Result<(), PickerError> {
    loop {
        console.show("");
        console.show(SEPARATOR);
        console.show("");
        console.show("Review additions:");
        for line in render_additions(session) {
            console.show(&line);
        }

        let Some(input) = console.read_line(AMENDMENT_PROMPT).map_err(PickerError::Console)? else {
            return Ok(());
        };
        match Amendment::parse(&input) {
            Amendment::Finish => return Ok(()),
            Amendment::Retract(position) => {
                let index = session.retract(position)?;
                tracing::debug!(position, index, "retracted");
            }
            Amendment::Add(word) => match session.amend(&word) {
                Some(index) => tracing::debug!(index, word = %word, "amended"),
                None => {
                    tracing::warn!("Amendment refers to unknown word '{}'", word);
                    console.show("Invalid input");
                }
            },
        }
    }
}

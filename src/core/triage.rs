//! 筛选循环：逐个展示候选词，读取操作者判定
//!
//! 判定：`a` 接受、空行拒绝、`r` 回退、`c <word>` 插入任意词、`q` 退出；其它输入重新提示。

use crate::core::error::PickerError;
use crate::core::session::TriageSession;
use crate::ui::Console;

pub const VERDICT_PROMPT: &str = "Verdict: ";

/// 一行输入解析出的判定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject,
    Back,
    Inject(String),
    Quit,
}

impl Verdict {
    /// 无法识别时返回 None
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "a" => Some(Self::Accept),
            "" => Some(Self::Reject),
            "r" => Some(Self::Back),
            "q" => Some(Self::Quit),
            _ => {
                let word = input.strip_prefix("c ")?.trim();
                (!word.is_empty()).then(|| Self::Inject(word.to_string()))
            }
        }
    }
}

/// 循环结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageEnd {
    Exhausted,
    Quit,
}

pub fn triage_loop<C: Console + ?Sized>(
    session: &mut TriageSession,
    console: &mut C,
) -> Result<TriageEnd, PickerError> {
    while let Some(index) = session.present() {
        let word = session.catalog().word(index).unwrap_or_default().to_string();
        console.show(&word);

        loop {
            let Some(input) = console.read_line(VERDICT_PROMPT).map_err(PickerError::Console)? else {
                tracing::debug!("input closed during triage");
                return Ok(TriageEnd::Quit);
            };
            let Some(verdict) = Verdict::parse(&input) else {
                continue;
            };
            match verdict {
                Verdict::Accept => {
                    tracing::debug!(index, word = %word, "accepted");
                    session.accept();
                }
                Verdict::Reject => {
                    tracing::debug!(index, word = %word, "rejected");
                    session.reject();
                }
                Verdict::Back => session.back(),
                Verdict::Quit => return Ok(TriageEnd::Quit),
                Verdict::Inject(custom) => match session.inject(&custom) {
                    Ok(injected) => {
                        tracing::debug!(index = injected, word = %custom, "injected");
                        console.show(&format!("+ {}", custom));
                    }
                    Err(refusal) => {
                        tracing::warn!("Injection refused: {}", refusal);
                        console.show(&refusal.to_string());
                        continue;
                    }
                },
            }
            break;
        }
    }
    Ok(TriageEnd::Exhausted)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::core::exclusion::ExclusionIndex;
    use crate::ui::ScriptedConsole;

    fn session(words: &[&str]) -> TriageSession {
        TriageSession::new(
            words.iter().copied().collect(),
            ExclusionIndex::default(),
            Vec::new(),
            BTreeSet::new(),
            (0..words.len()).collect(),
        )
    }

    #[test]
    fn test_parse_verdicts() {
        assert_eq!(Verdict::parse("a"), Some(Verdict::Accept));
        assert_eq!(Verdict::parse(""), Some(Verdict::Reject));
        assert_eq!(Verdict::parse("r"), Some(Verdict::Back));
        assert_eq!(Verdict::parse("q"), Some(Verdict::Quit));
        assert_eq!(
            Verdict::parse("c żaba"),
            Some(Verdict::Inject("żaba".to_string()))
        );
        assert_eq!(Verdict::parse("c "), None);
        assert_eq!(Verdict::parse("c"), None);
        assert_eq!(Verdict::parse("A"), None);
        assert_eq!(Verdict::parse(" "), None);
    }

    #[test]
    fn test_accept_reject_then_quit() {
        let mut s = session(&["cat", "dog", "emu"]);
        let mut console = ScriptedConsole::new(["a", "", "q"]);
        let end = triage_loop(&mut s, &mut console).unwrap();
        assert_eq!(end, TriageEnd::Quit);

        let commit = s.commit();
        assert_eq!(commit.pool, vec![0]);
        assert_eq!(commit.rejected, vec![1]);
    }

    #[test]
    fn test_unknown_token_reprompts() {
        let mut s = session(&["cat"]);
        let mut console = ScriptedConsole::new(["x", "yes", "a"]);
        let end = triage_loop(&mut s, &mut console).unwrap();
        assert_eq!(end, TriageEnd::Exhausted);
        assert_eq!(s.additions(), &[0]);
        // one word shown, three prompts
        let prompts = console
            .transcript()
            .iter()
            .filter(|l| l.starts_with(VERDICT_PROMPT))
            .count();
        assert_eq!(prompts, 3);
    }

    #[test]
    fn test_back_redecides() {
        let mut s = session(&["cat", "dog", "emu"]);
        let mut console = ScriptedConsole::new(["a", "r", "", "q"]);
        triage_loop(&mut s, &mut console).unwrap();

        let commit = s.commit();
        assert!(commit.pool.is_empty());
        assert_eq!(commit.rejected, vec![0]);
        assert_eq!(s.current(), Some(1));
    }

    #[test]
    fn test_inject_then_current_shown_again() {
        let mut s = session(&["cat", "dog", "emu"]);
        let mut console = ScriptedConsole::new(["c emu", "c yak", "", "q"]);
        triage_loop(&mut s, &mut console).unwrap();

        assert!(console.saw("+ emu"));
        assert!(console.saw("'yak' is not in the word list"));
        let shown_cat = console.transcript().iter().filter(|l| *l == "cat").count();
        assert_eq!(shown_cat, 2);

        let commit = s.commit();
        assert_eq!(commit.pool, vec![2]);
        assert_eq!(commit.rejected, vec![0]);
    }

    #[test]
    fn test_eof_acts_as_quit() {
        let mut s = session(&["cat", "dog"]);
        let mut console = ScriptedConsole::new(["a"]);
        assert_eq!(triage_loop(&mut s, &mut console).unwrap(), TriageEnd::Quit);
        assert_eq!(s.additions(), &[0]);
    }
}

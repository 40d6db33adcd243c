//! 控制台交互层：筛选/复核循环的输入输出抽象

pub mod console;
pub mod scripted;

pub use console::{Console, StdConsole};
pub use scripted::ScriptedConsole;

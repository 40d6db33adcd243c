//! 题目维护：每日抽题与归档

pub mod draw;
pub mod retire;

pub use draw::{draw_solution, expiration_label, run_draw};
pub use retire::{latest_position, parse_expiration, retire_solutions, run_retire};

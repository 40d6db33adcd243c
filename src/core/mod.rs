//! 核心层：词表、排除索引、会话状态机、筛选与复核循环、主流程

pub mod catalog;
pub mod error;
pub mod exclusion;
pub mod review;
pub mod runner;
pub mod session;
pub mod triage;

pub use catalog::WordCatalog;
pub use error::{InjectRefusal, PickerError};
pub use exclusion::{candidate_sequence, ExclusionIndex};
pub use review::{review_loop, Amendment};
pub use runner::{catalog_status, open_session, run_session, CatalogStatus, SessionOutcome};
pub use session::{Commit, TriageSession};
pub use triage::{triage_loop, TriageEnd, Verdict};

//! Alliance domain repositories: registry rows, category templates, and the
//! membership ledger.

pub mod alliance;
pub mod category;
pub mod member;

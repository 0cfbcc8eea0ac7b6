//! Command implementations
//!
//! Each user-facing command is an `impl Repository` block in `porcelain`.
//! `push`, `pull` and `remote` have no transport behind them and reuse `log`.

pub mod porcelain;

//! # Tudu - Optimistic Todo Synchronization
//!
//! A command-line todo client built around an optimistic synchronization
//! core: local mutations show up instantly and are reconciled with the
//! remote task store in the background.
//!
//! ## Features
//!
//! - **Optimistic Mutations**: Create, rename, toggle and delete apply to the
//!   local mirror before the server confirms them
//! - **Rollback on Failure**: Failed mutations revert to the last-confirmed
//!   state and surface through a single aggregated error banner
//! - **In-Flight Tracking**: Per-task busy indicators and input locking while
//!   requests are outstanding
//! - **Visibility Filtering**: All/active/completed views that never lose a
//!   row mid-mutation
//! - **Inline Editing**: Single-slot edit sessions with retry-friendly
//!   failure handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

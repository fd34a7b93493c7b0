//! Core library modules for the tudu application.
//!
//! Serves as the main entry point for the synchronization core and its
//! supporting infrastructure.
//!
//! ## Features
//!
//! - **Synchronization Core**: Optimistic task store, pending overrides, in-flight tracking
//! - **Visibility Filtering**: Pure derivation of the displayed task subset
//! - **Edit Sessions**: Single-slot inline title editing state machine
//! - **Error Aggregation**: Time-limited, dismissible failure notifications
//! - **Infrastructure**: Configuration, data storage, messaging, rendering

pub mod config;
pub mod data_storage;
pub mod edit;
pub mod filter;
pub mod messages;
pub mod notice;
pub mod store;
pub mod task;
pub mod view;

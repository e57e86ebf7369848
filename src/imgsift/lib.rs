//! # Imgsift Architecture
//!
//! Imgsift is a **UI-agnostic view engine for image catalogs**: given a
//! collection of media records and a few user choices (query, criterion,
//! direction, grouping) it derives the display order and the labeled groups
//! of one gallery view. The CLI is one client of the library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over RecordStore      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - filter → sort → group, orchestrated by ViewCoordinator   │
//! │  - Pure passes over borrowed records, never fail            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (attributes/, criteria/, hash/, model.rs)            │
//! │  - Typed attribute access with documented defaults          │
//! │  - The criterion registry and big-integer hash keys         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No State Between Passes
//!
//! Every view is recomputed from scratch by
//! [`commands::view::ViewCoordinator::apply`]. Settings arrive as a
//! [`model::ViewSettings`] value per call; nothing in the library remembers
//! the current sort or grouping. The criterion registry is built once and is
//! immutable afterwards.
//!
//! ## Failure Model
//!
//! The passes themselves have no error type. Unknown criteria fall back to
//! discovery order, malformed hash symbols decode as zero, absent attributes
//! read as their defaults; each case is logged through `tracing`. Errors
//! ([`error::ImgsiftError`]) only come from the edges: reading catalogs,
//! parsing attribute expressions, loading config.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Filter, sort, group and view passes, plus criteria/info/config
//! - [`criteria`]: The criterion registry, sort keys, labels and captions
//! - [`attributes`]: Attribute registry, typed access, attribute expressions
//! - [`hash`]: Hash alphabets and the arbitrary-precision decoded value
//! - [`model`]: `MediaRecord`, `ViewSettings`, `Bucket`, `RenderPlan`
//! - [`store`]: Record sources (JSON catalog, in-memory)
//! - [`config`]: Default view settings
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod criteria;
pub mod error;
pub mod hash;
pub mod model;
pub mod store;

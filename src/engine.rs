//! Strategy selection and parsing engine.
//!
//! The engine is split into focused submodules under `src/engine/`. The rest
//! of the crate talks to it through [`Strategy`] and the dispatcher.
//!
//! ## How the parts work together
//!
//! ```text
//! path ── normalize_path ── blacklist? ──> None
//!                              │
//!                              v
//!                    Strategy::select (strategy.rs)
//!                      first strategy whose is_applicable holds
//!                              │
//!                              v
//!                    FileContext::new (strategy.rs)
//!                      - file name / stem / extractor text
//!                      - Buckets::scan             (trigger.rs)
//!                      - rules::Analysis::run_with (src/rules)
//!                              │
//!                              v
//!               basic::parse  |  image::parse
//!                 - filename tokens first
//!                 - FolderChain for what the name lacks (fallback.rs)
//!                 - sentinels for what nobody knows
//!                              │
//!                              v
//!                    Option<ParsedFileInfo>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `strategy.rs`: the closed [`Strategy`] set, applicability, and the
//!   per-file context shared by every strategy.
//! - `trigger.rs`: the coarse input scan that gates extractor tables.
//! - `basic.rs`: archives and documents; also assembles results for image
//!   pages in Manga/Comic libraries.
//! - `image.rs`: loose images, including Image-library layouts.
//! - `fallback.rs`: folder-derived series, volume and chapter.
//! - `dispatch.rs`: blacklist, strategy selection and the traced run used by
//!   the verbose API.
//!
//! ## Debugging
//!
//! Every decision is emitted as a `tracing` event at `TRACE` level; enable
//! them with `RUST_LOG=bindery=trace` when running the CLI.

#[path = "engine/basic.rs"]
mod basic;
#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/fallback.rs"]
mod fallback;
#[path = "engine/image.rs"]
mod image;
#[path = "engine/strategy.rs"]
mod strategy;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use dispatch::run;
pub use strategy::Strategy;
pub(crate) use trigger::Buckets;

//! # Buildsmith
//!
//! Client for the Buildsmith armor build optimizer.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                    apps/buildsmith (THE BINARY)               │
//! │                                                               │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────────┐   │
//! │  │  CLI/Shell  │───▶│  Workbench  │───▶│ OptimizerClient  │──────▶ optimizer
//! │  │   (clap)    │    │ (view state)│    │    (reqwest)     │   │    (HTTP)
//! │  └─────────────┘    └──────┬──────┘    └──────────────────┘   │
//! │                            ▼                                  │
//! │                   ┌─────────────────┐                         │
//! │                   │ buildsmith-core │                         │
//! │                   │   (THE LOGIC)   │                         │
//! │                   └─────────────────┘                         │
//! └───────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod workbench;

pub use client::{Optimizer, OptimizerClient};
pub use config::ClientConfig;
pub use workbench::{ClickTarget, SearchView, ViewState, Workbench};

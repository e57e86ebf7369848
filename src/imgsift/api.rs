//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! every imgsift operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the command functions in `commands/`
//! - **Normalizes inputs** (blank expressions are treated as absent)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never formats: that belongs to the CLI.
//!
//! `SiftApi<S: RecordStore>` is generic over where records come from:
//! `SiftApi<CatalogFile>` in production, `SiftApi<InMemoryStore>` in tests.

use crate::commands;
use crate::criteria::CriterionRegistry;
use crate::error::Result;
use crate::model::ViewSettings;
use crate::store::RecordStore;
use std::path::PathBuf;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, CriterionInfo, MessageLevel};

pub struct SiftApi<S: RecordStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: RecordStore> SiftApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn view(&self, settings: ViewSettings, expr: Option<&str>) -> Result<CmdResult> {
        let expr = expr.map(str::trim).filter(|e| !e.is_empty());
        commands::view::run(&self.store, settings, expr)
    }

    pub fn criteria(&self) -> CmdResult {
        commands::criteria::run(CriterionRegistry::global())
    }

    pub fn info(&self, id: &str) -> Result<CmdResult> {
        commands::info::run(&self.store, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

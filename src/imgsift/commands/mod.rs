//! Commands: the engine passes (`filter`, `sort`, `group`, `view`) and the
//! store-backed operations built on them (`criteria`, `info`, `config`).
//!
//! Engine passes are pure and infallible. Store-backed commands return
//! `Result<CmdResult>` and never print.

use crate::config::ViewConfig;
use crate::model::RenderPlan;

pub mod config;
pub mod criteria;
pub mod filter;
pub mod group;
pub mod info;
pub mod sort;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A registered criterion as listed by `criteria`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionInfo {
    pub id: &'static str,
    pub descending: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub plan: Option<RenderPlan>,
    /// Captions of the visible records, aligned with `plan.visible()`.
    pub captions: Vec<String>,
    pub criteria: Vec<CriterionInfo>,
    pub attributes: Vec<(&'static str, String)>,
    pub config: Option<ViewConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_plan(mut self, plan: RenderPlan, captions: Vec<String>) -> Self {
        self.plan = Some(plan);
        self.captions = captions;
        self
    }

    pub fn with_criteria(mut self, criteria: Vec<CriterionInfo>) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<(&'static str, String)>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = Some(config);
        self
    }
}

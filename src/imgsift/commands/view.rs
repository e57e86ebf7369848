//! # View Pass
//!
//! [`ViewCoordinator::apply`] runs the fixed pipeline over a fully
//! materialized record set:
//!
//! ```text
//! records ──filter(query)──▶ visible ──sort(criterion, reverse)──▶ sorted ──group──▶ RenderPlan
//!                      └──▶ hidden ─────────────────────────────────────────────────▶ plan.hidden
//! ```
//!
//! The coordinator keeps nothing between calls: identical settings and
//! records always produce an identical plan. Every input record ends up
//! either in `plan.hidden` or in exactly one bucket.

use super::filter::filter;
use super::group::group_entries;
use super::sort::sort;
use super::{CmdMessage, CmdResult};
use crate::attributes::parse_filter_expr;
use crate::criteria::CriterionRegistry;
use crate::error::Result;
use crate::model::{Bucket, MediaRecord, RenderPlan, ViewSettings};
use crate::store::RecordStore;
use tracing::debug;

pub struct ViewCoordinator<'r> {
    registry: &'r CriterionRegistry,
}

impl Default for ViewCoordinator<'static> {
    fn default() -> Self {
        Self::new(CriterionRegistry::global())
    }
}

impl<'r> ViewCoordinator<'r> {
    pub fn new(registry: &'r CriterionRegistry) -> Self {
        Self { registry }
    }

    pub fn apply(&self, settings: ViewSettings, records: &[MediaRecord]) -> RenderPlan {
        self.render(settings, records).0
    }

    /// Like [`apply`](Self::apply), also returning the caption of every
    /// visible record in plan order.
    pub fn render(&self, settings: ViewSettings, records: &[MediaRecord]) -> (RenderPlan, Vec<String>) {
        let partition = filter(records, &settings.query);
        let criterion = self.registry.resolve_or_identity(&settings.criterion);
        let sorted = sort(partition.visible, criterion, settings.reverse);
        let slots = group_entries(&sorted, criterion, settings.groups);

        let mut captions = Vec::with_capacity(sorted.len());
        let buckets: Vec<Bucket> = slots
            .into_iter()
            .map(|(label, entries)| Bucket {
                label,
                members: entries
                    .into_iter()
                    .map(|entry| {
                        captions.push(criterion.caption_of(entry.record));
                        entry.record.id.clone()
                    })
                    .collect(),
            })
            .collect();

        let plan = RenderPlan {
            criterion: criterion.id.to_string(),
            buckets,
            hidden: partition.hidden.iter().map(|r| r.id.clone()).collect(),
        };

        debug!(
            target: "imgsift::view",
            criterion = criterion.id,
            reverse = settings.reverse,
            groups = settings.groups,
            visible = plan.visible_count(),
            hidden = plan.hidden.len(),
            buckets = plan.buckets.len(),
            "view pass"
        );
        (plan, captions)
    }
}

/// Loads the collection, narrows it with `expr` when given, and runs one pass.
pub fn run<S: RecordStore>(
    store: &S,
    settings: ViewSettings,
    expr: Option<&str>,
) -> Result<CmdResult> {
    let mut records = store.list_records()?;
    if let Some(expr) = expr {
        let filters = parse_filter_expr(expr)?;
        records.retain(|r| filters.iter().all(|f| f.matches(r)));
    }

    let registry = CriterionRegistry::global();
    let unknown = registry.resolve(&settings.criterion).err();

    let (plan, captions) = ViewCoordinator::new(registry).render(settings, &records);
    let mut result = CmdResult::default().with_plan(plan, captions);
    if let Some(unknown) = unknown {
        result.add_message(CmdMessage::warning(format!(
            "{}; showing discovery order",
            unknown
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    fn gallery() -> Vec<MediaRecord> {
        vec![
            MediaRecord {
                format: "PNG".into(),
                bytes: 2_000_000,
                date: "2021-03-02".into(),
                ..MediaRecord::new("C")
            },
            MediaRecord {
                format: "JPEG".into(),
                bytes: 2_000_000,
                date: "2020-11-30".into(),
                ..MediaRecord::new("A")
            },
            MediaRecord {
                format: "JPEG".into(),
                bytes: 500_000,
                date: "2021-03-01".into(),
                description: "not a jpeg".into(),
                ..MediaRecord::new("B")
            },
        ]
    }

    fn visible(plan: &RenderPlan) -> Vec<&str> {
        plan.visible().collect()
    }

    #[test]
    fn default_settings_sort_by_date_descending() {
        let plan = ViewCoordinator::default().apply(ViewSettings::default(), &gallery());
        assert_eq!(plan.criterion, "date");
        assert_eq!(visible(&plan), vec!["C", "B", "A"]);
        assert!(plan.hidden.is_empty());
    }

    #[test]
    fn extreme_values_still_group() {
        let records = vec![
            MediaRecord {
                bytes: u64::MAX,
                illumination: u64::MAX,
                ..MediaRecord::new("huge")
            },
            MediaRecord::new("empty"),
        ];
        for id in ["bytes", "illumination", "contrast", "saturation"] {
            let plan = ViewCoordinator::default()
                .apply(ViewSettings::new(id).grouped(true), &records);
            assert_eq!(plan.visible_count(), 2, "{}", id);
            assert_eq!(visible(&plan), vec!["huge", "empty"], "{}", id);
        }
    }

    #[test]
    fn stable_bytes_order() {
        let plan = ViewCoordinator::default().apply(ViewSettings::new("bytes"), &gallery());
        assert_eq!(visible(&plan), vec!["C", "A", "B"]);
    }

    #[test]
    fn query_hides_and_groups_label() {
        let settings = ViewSettings::new("bytes").with_query("jpeg").grouped(true);
        let plan = ViewCoordinator::default().apply(settings, &gallery());
        assert_eq!(plan.hidden, vec!["C"]);
        assert_eq!(plan.buckets.len(), 3);
        assert!(plan.buckets[0].is_reserved());
        assert_eq!(plan.buckets[1].label.as_deref(), Some("2mb"));
        assert_eq!(plan.buckets[1].members, vec!["A"]);
        assert_eq!(plan.buckets[2].label.as_deref(), Some("0mb"));
    }

    #[test]
    fn unknown_criterion_falls_back_to_identity() {
        let plan = ViewCoordinator::default()
            .apply(ViewSettings::new("camera,model").grouped(true), &gallery());
        assert_eq!(plan.criterion, "identity");
        assert_eq!(visible(&plan), vec!["C", "A", "B"]);
        assert_eq!(plan.buckets[1].label.as_deref(), Some("all"));
    }

    #[test]
    fn apply_is_idempotent() {
        let records = gallery();
        let settings = ViewSettings::new("format-mode").grouped(true).reversed(true);
        let coordinator = ViewCoordinator::default();
        let first = coordinator.apply(settings.clone(), &records);
        let second = coordinator.apply(settings, &records);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn every_record_lands_once() {
        let records = gallery();
        let plan = ViewCoordinator::default()
            .apply(ViewSettings::new("date").with_query("png").grouped(true), &records);
        let mut seen: Vec<&str> = plan.visible().chain(plan.hidden.iter().map(String::as_str)).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["A", "B", "C"]);
    }

    #[test]
    fn captions_follow_plan_order() {
        let (plan, captions) =
            ViewCoordinator::default().render(ViewSettings::new("bytes"), &gallery());
        assert_eq!(captions.len(), plan.visible_count());
        assert_eq!(captions[2], "Size: 488.28 KB");
    }

    #[test]
    fn run_applies_expression_then_query() {
        let store = InMemoryStore::with_records(gallery());
        let result = run(&store, ViewSettings::new("bytes"), Some("bytes > 1000000")).unwrap();
        let plan = result.plan.unwrap();
        assert_eq!(plan.visible().collect::<Vec<_>>(), vec!["C", "A"]);
        assert!(plan.hidden.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn run_reports_bad_expressions() {
        let store = InMemoryStore::with_records(gallery());
        assert!(run(&store, ViewSettings::default(), Some("nope > 1")).is_err());
    }

    #[test]
    fn run_warns_on_unknown_criterion() {
        let store = InMemoryStore::with_records(gallery());
        let result = run(&store, ViewSettings::new("bogus"), None).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(result.messages[0].content.contains("bogus"));
    }
}

use crate::commands::{CmdResult, CriterionInfo};
use crate::criteria::CriterionRegistry;

pub fn run(registry: &CriterionRegistry) -> CmdResult {
    let listed = registry
        .iter()
        .map(|c| CriterionInfo {
            id: c.id,
            descending: c.default_descending,
        })
        .collect();
    CmdResult::default().with_criteria(listed)
}

use crate::attributes::present_attrs;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, id: &str) -> Result<CmdResult> {
    let record = store.get_record(id)?;
    Ok(CmdResult::default().with_attributes(present_attrs(&record)))
}

use crate::error::Result;
use bzsym::core::symmetry::PointGroup;
use bzsym::engine::error::EngineError;
use std::io::{self, Write};
use tracing::info;

pub fn run() -> Result<()> {
    let group = PointGroup::oh().map_err(EngineError::from)?;
    info!("Listing the {} operations of Oh.", group.len());
    write_group(group, io::stdout().lock())
}

pub(crate) fn write_group<W: Write>(group: &PointGroup, mut out: W) -> Result<()> {
    for (index, op) in group.iter().enumerate() {
        let kind = if op.is_proper() { "proper" } else { "improper" };
        let rows = op
            .rows()
            .iter()
            .map(|r| format!("[{:>2} {:>2} {:>2}]", r[0], r[1], r[2]))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            "{:>2}  {:<8}  det={:>2}  {}",
            index,
            kind,
            op.determinant(),
            rows
        )?;
    }
    out.flush()?;
    Ok(())
}

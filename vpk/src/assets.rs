use std::io::Write;

use viewpack::Registry;

use crate::error::Result;

pub fn show_info<W: Write>(registry: &Registry, name: &str, json: bool, out: &mut W) -> Result<()> {
    let info = registry.info(name)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &info)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Asset: {}", info.name)?;
    writeln!(out, "   - size: {} bytes", info.size)?;
    writeln!(out, "   - mode: {:o}", info.mode)?;
    writeln!(out, "   - modified: {}", info.mod_time.to_rfc3339())?;
    Ok(())
}

pub fn cat<W: Write>(registry: &Registry, name: &str, out: &mut W) -> Result<()> {
    let data = registry.bytes(name)?;
    out.write_all(&data)?;
    out.flush()?;
    Ok(())
}

pub fn verify<W: Write>(registry: &Registry, out: &mut W) -> Result<()> {
    registry.verify()?;
    writeln!(out, "{} assets verified", registry.len())?;
    Ok(())
}

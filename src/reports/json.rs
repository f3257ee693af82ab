use crate::Result;
use crate::facts::GameDataResponse;
use core::fmt::Write;

pub fn generate<W: Write>(response: &GameDataResponse, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(response)?)?;
    Ok(())
}

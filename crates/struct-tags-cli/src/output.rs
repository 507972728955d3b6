//! Helpers for rendering parsed tags.

use std::io::Write;

use eyre::{Context, Result};
use serde::Serialize;
use struct_tags::{Tag, TagOption};

/// Write one tag in the indented text form:
///
/// ```text
/// json:"id,omitempty"
///   key: json
///   name: id
///   option: omitempty
/// ```
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_tag(writer: &mut dyn Write, tag: &Tag) -> Result<()> {
    let context = || format!("failed to write tag {}", tag.raw());
    writeln!(writer, "{}", tag.raw()).wrap_err_with(context)?;
    writeln!(writer, "  key: {}", tag.key()).wrap_err_with(context)?;
    writeln!(writer, "  name: {}", tag.name()).wrap_err_with(context)?;
    for option in tag.options() {
        write_option(writer, option)?;
    }
    Ok(())
}

fn write_option(writer: &mut dyn Write, option: &TagOption) -> Result<()> {
    let line = option.value().map_or_else(
        || option.key().to_owned(),
        |value| format!("{} = {value}", option.key()),
    );
    writeln!(writer, "  option: {line}")
        .wrap_err_with(|| format!("failed to write option {}", option.key()))
}

/// Write every tag in text form.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_tags(writer: &mut dyn Write, tags: &[Tag]) -> Result<()> {
    tags.iter().try_for_each(|tag| write_tag(writer, tag))
}

/// Write `value` as a single line of JSON.
///
/// # Errors
///
/// Returns an error if serialisation or the writer fails.
pub fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    serde_json::to_writer(&mut *writer, value).wrap_err("failed to serialize tags to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}

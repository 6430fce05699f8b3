// ABOUTME: Result emitter writing a PresenceMap as 4-space-indented JSON.
// ABOUTME: Provides emit() for stdout plus writer and string variants.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::presence::PresenceMap;

const INDENT: &[u8] = b"    ";

fn serialize_into<W: Write>(writer: &mut W, map: &PresenceMap) -> io::Result<()> {
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    map.serialize(&mut ser)?;
    Ok(())
}

/// Serializes `map` to `writer`, followed by a newline.
pub fn write_to<W: Write>(mut writer: W, map: &PresenceMap) -> io::Result<()> {
    serialize_into(&mut writer, map)?;
    writeln!(writer)?;
    writer.flush()
}

/// Serializes `map` to a string without a trailing newline.
pub fn to_json_string(map: &PresenceMap) -> io::Result<String> {
    let mut buf = Vec::new();
    serialize_into(&mut buf, map)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Writes `map` to standard output.
pub fn emit(map: &PresenceMap) -> io::Result<()> {
    let stdout = io::stdout();
    write_to(stdout.lock(), map)
}

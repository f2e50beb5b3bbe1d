use gbcheck_core::{Finding, HeaderReport, PreviewByte};
use serde::Serialize;
use std::fmt::Formatter;

const PREVIEW_ROW_LEN: u16 = 16;

pub const TIPS: &str = "\
Tip: these ROM files can be run in any Game Boy emulator.
     Recommended emulators: mGBA, VisualBoy Advance, BGB
";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub with_findings: usize,
    pub missing: usize,
    pub unreadable: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.with_findings != 0 || self.missing != 0 || self.unreadable != 0
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Checked {} ROM file(s), {} with findings",
            self.checked, self.with_findings
        )?;
        if self.missing != 0 {
            writeln!(f, "{} ROM file(s) not found", self.missing)?;
        }
        if self.unreadable != 0 {
            writeln!(f, "{} ROM file(s) could not be read", self.unreadable)?;
        }

        Ok(())
    }
}

/// Human-readable rendering of a single report.
pub struct TextReport<'a> {
    pub file_path: &'a str,
    pub report: &'a HeaderReport,
    pub show_preview: bool,
}

impl std::fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ROM: {}", self.file_path)?;
        writeln!(f, "  File size: {} bytes", self.report.file_size())?;

        let Some(header) = self.report.header()
        else {
            return writeln!(f, "  Too small to contain a Game Boy header");
        };

        writeln!(f, "  Title: {}", header.title)?;
        if header.nintendo_logo_match {
            writeln!(f, "  Nintendo logo: OK")?;
        } else {
            writeln!(f, "  Nintendo logo: MISMATCH (possibly a custom ROM)")?;
        }
        writeln!(f, "  Cartridge type: 0x{:02X}", header.cartridge_type)?;
        writeln!(f, "  ROM size: 0x{:02X}", header.rom_size_code)?;
        writeln!(f, "  RAM size: 0x{:02X}", header.ram_size_code)?;
        if header.checksum_ok {
            writeln!(f, "  Header checksum: OK (0x{:02X})", header.stored_header_checksum)?;
        } else {
            writeln!(
                f,
                "  Header checksum: MISMATCH: computed=0x{:02X}, stored=0x{:02X}",
                header.computed_header_checksum, header.stored_header_checksum
            )?;
        }

        if self.show_preview && !header.preview_bytes.is_empty() {
            writeln!(f, "  Code preview:")?;
            fmt_preview(f, &header.preview_bytes)?;
        }

        Ok(())
    }
}

// Rows start at 16-byte aligned offsets, except possibly the first
fn fmt_preview(f: &mut Formatter<'_>, preview_bytes: &[PreviewByte]) -> std::fmt::Result {
    for (i, byte) in preview_bytes.iter().enumerate() {
        if i == 0 || byte.offset % PREVIEW_ROW_LEN == 0 {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "    0x{:04X}:", byte.offset)?;
        }
        write!(f, " {:02X}", byte.value)?;
    }

    if preview_bytes.is_empty() {
        Ok(())
    } else {
        writeln!(f)
    }
}

pub fn render_missing(file_path: &str) -> String {
    format!("ROM: {file_path}\n  File not found\n")
}

pub fn render_unreadable(file_path: &str, err: &dyn std::error::Error) -> String {
    format!("ROM: {file_path}\n  Unable to read file: {err}\n")
}

#[derive(Debug, Serialize)]
pub(crate) struct TomlEntry {
    pub path: String,
    pub findings: Vec<Finding>,
    pub report: HeaderReport,
}

#[derive(Debug, Serialize)]
struct TomlDocument<'a> {
    rom: &'a [TomlEntry],
}

pub(crate) fn render_toml(entries: &[TomlEntry]) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&TomlDocument { rom: entries })
}

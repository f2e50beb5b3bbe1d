use gbcheck_proc_macros::{EnumDisplay, StrSerialize};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDisplay)]
pub enum HeaderStatus {
    Valid,
    // The image is shorter than a full header; no header fields were read
    TooSmall,
}

/// Informational conditions found while validating a header. None of these stop validation; the
/// caller decides how severe each one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumDisplay, StrSerialize)]
pub enum Finding {
    TooSmall,
    LogoMismatch,
    ChecksumMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewByte {
    pub offset: u16,
    pub value: u8,
}

/// Header fields extracted from an image that is large enough to hold a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHeader {
    pub title: String,
    pub nintendo_logo_match: bool,
    pub cartridge_type: u8,
    pub rom_size_code: u8,
    pub ram_size_code: u8,
    pub computed_header_checksum: u8,
    pub stored_header_checksum: u8,
    pub checksum_ok: bool,
    pub preview_bytes: Vec<PreviewByte>,
}

/// The result of validating a ROM image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum HeaderReport {
    TooSmall { file_size: usize },
    Valid { file_size: usize, header: ParsedHeader },
}

impl HeaderReport {
    pub fn status(&self) -> HeaderStatus {
        match self {
            Self::TooSmall { .. } => HeaderStatus::TooSmall,
            Self::Valid { .. } => HeaderStatus::Valid,
        }
    }

    pub fn file_size(&self) -> usize {
        match self {
            &Self::TooSmall { file_size } | &Self::Valid { file_size, .. } => file_size,
        }
    }

    /// Parsed header fields, or `None` if the image was too small to contain a header.
    pub fn header(&self) -> Option<&ParsedHeader> {
        match self {
            Self::TooSmall { .. } => None,
            Self::Valid { header, .. } => Some(header),
        }
    }

    pub fn findings(&self) -> Vec<Finding> {
        let Some(header) = self.header()
        else {
            return vec![Finding::TooSmall];
        };

        let mut findings = Vec::new();
        if !header.nintendo_logo_match {
            findings.push(Finding::LogoMismatch);
        }
        if !header.checksum_ok {
            findings.push(Finding::ChecksumMismatch);
        }
        findings
    }

    /// True if the header passed every check.
    pub fn is_clean(&self) -> bool {
        self.findings().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_header(nintendo_logo_match: bool, checksum_ok: bool) -> ParsedHeader {
        ParsedHeader {
            title: "TEST".into(),
            nintendo_logo_match,
            cartridge_type: 0x00,
            rom_size_code: 0x00,
            ram_size_code: 0x00,
            computed_header_checksum: 0x12,
            stored_header_checksum: if checksum_ok { 0x12 } else { 0x34 },
            checksum_ok,
            preview_bytes: Vec::new(),
        }
    }

    #[test]
    fn too_small_has_only_size() {
        let report = HeaderReport::TooSmall { file_size: 100 };

        assert_eq!(HeaderStatus::TooSmall, report.status());
        assert_eq!(100, report.file_size());
        assert_eq!(None, report.header());
        assert_eq!(vec![Finding::TooSmall], report.findings());
        assert!(!report.is_clean());
    }

    #[test]
    fn findings_are_independent() {
        let report = |logo, checksum| HeaderReport::Valid {
            file_size: 0x8000,
            header: parsed_header(logo, checksum),
        };

        assert!(report(true, true).is_clean());
        assert_eq!(vec![Finding::LogoMismatch], report(false, true).findings());
        assert_eq!(vec![Finding::ChecksumMismatch], report(true, false).findings());
        assert_eq!(
            vec![Finding::LogoMismatch, Finding::ChecksumMismatch],
            report(false, false).findings()
        );
    }

    #[test]
    fn display_names() {
        assert_eq!("valid", HeaderStatus::Valid.to_string());
        assert_eq!("too-small", HeaderStatus::TooSmall.to_string());
        assert_eq!("logo-mismatch", Finding::LogoMismatch.to_string());
        assert_eq!("checksum-mismatch", Finding::ChecksumMismatch.to_string());
    }
}

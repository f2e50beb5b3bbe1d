use crate::addresses;
use crate::report::{HeaderReport, ParsedHeader, PreviewByte};
use std::ops::RangeInclusive;

fn byte_range(start: u16, end: u16) -> RangeInclusive<usize> {
    usize::from(start)..=usize::from(end)
}

/// Validates Game Boy cartridge headers. Never mutates or retains the input image.
pub struct HeaderValidator;

impl HeaderValidator {
    /// The logo bitmap the boot ROM compares against 0x0104-0x0133.
    pub const NINTENDO_LOGO: [u8; 48] = [
        0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00,
        0x0D, 0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD,
        0xD9, 0x99, 0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB,
        0xB9, 0x33, 0x3E,
    ];

    /// Validate the header of the given ROM image.
    ///
    /// Images shorter than 0x150 bytes produce a `TooSmall` report without any further reads.
    /// Every other check is always evaluated, regardless of whether earlier checks passed.
    pub fn validate(rom: &[u8]) -> HeaderReport {
        let file_size = rom.len();
        if file_size < addresses::MIN_ROM_LEN {
            log::debug!("ROM image of {file_size} bytes is too small to contain a header");
            return HeaderReport::TooSmall { file_size };
        }

        let title = parse_title(&rom[byte_range(addresses::TITLE_START, addresses::TITLE_END)]);

        let nintendo_logo_match = rom
            [byte_range(addresses::NINTENDO_LOGO_START, addresses::NINTENDO_LOGO_END)]
            == Self::NINTENDO_LOGO;

        let cartridge_type = rom[usize::from(addresses::CARTRIDGE_TYPE)];
        let rom_size_code = rom[usize::from(addresses::ROM_SIZE)];
        let ram_size_code = rom[usize::from(addresses::RAM_SIZE)];

        let computed_header_checksum = header_checksum(rom);
        let stored_header_checksum = rom[usize::from(addresses::HEADER_CHECKSUM)];

        let preview_end = usize::from(addresses::PREVIEW_END).min(file_size);
        let preview_bytes = (usize::from(addresses::PREVIEW_START)..preview_end)
            .map(|offset| PreviewByte { offset: offset as u16, value: rom[offset] })
            .collect();

        log::debug!(
            "Parsed header: title='{title}', logo_match={nintendo_logo_match}, cartridge_type={cartridge_type:02X}, rom_size={rom_size_code:02X}, ram_size={ram_size_code:02X}, checksum computed={computed_header_checksum:02X} stored={stored_header_checksum:02X}"
        );

        HeaderReport::Valid {
            file_size,
            header: ParsedHeader {
                title,
                nintendo_logo_match,
                cartridge_type,
                rom_size_code,
                ram_size_code,
                computed_header_checksum,
                stored_header_checksum,
                checksum_ok: computed_header_checksum == stored_header_checksum,
                preview_bytes,
            },
        }
    }
}

/// Shorthand for [`HeaderValidator::validate`].
pub fn validate(rom: &[u8]) -> HeaderReport {
    HeaderValidator::validate(rom)
}

/// Compute the header checksum over 0x0134-0x014C. `rom` must be at least 0x014D bytes long.
pub fn header_checksum(rom: &[u8]) -> u8 {
    rom[byte_range(addresses::TITLE_START, addresses::HEADER_CHECKSUM_END)]
        .iter()
        .fold(0_u8, |checksum, &byte| checksum.wrapping_sub(byte).wrapping_sub(1))
}

// Non-ASCII bytes are dropped rather than rejected; titles are commonly NUL-padded
fn parse_title(bytes: &[u8]) -> String {
    let decoded: String = bytes.iter().filter(|b| b.is_ascii()).map(|&b| char::from(b)).collect();
    decoded
        .trim_matches(|c: char| c.is_ascii_control() || c.is_whitespace())
        .into()
}

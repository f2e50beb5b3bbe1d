//
// Cartridge header addresses
//

pub const ENTRY_POINT: u16 = 0x0100;

pub const NINTENDO_LOGO_START: u16 = 0x0104;
pub const NINTENDO_LOGO_END: u16 = 0x0133;

pub const TITLE_START: u16 = 0x0134;
pub const TITLE_END: u16 = 0x0143;

pub const CARTRIDGE_TYPE: u16 = 0x0147;
pub const ROM_SIZE: u16 = 0x0148;
pub const RAM_SIZE: u16 = 0x0149;

// The header checksum covers TITLE_START..=HEADER_CHECKSUM_END
pub const HEADER_CHECKSUM_END: u16 = 0x014C;
pub const HEADER_CHECKSUM: u16 = 0x014D;

pub const HEADER_END: u16 = 0x014F;

//
// Code preview window (exclusive end)
//

pub const PREVIEW_START: u16 = ENTRY_POINT;
pub const PREVIEW_END: u16 = 0x0120;

/// Smallest image that contains a complete header.
pub const MIN_ROM_LEN: usize = HEADER_END as usize + 1;

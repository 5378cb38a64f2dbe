//! The standard 16-color terminal palette, packed as `0x00RRGGBB`.

/// Returned for any index outside `0..16`.
pub const PALETTE_SENTINEL: i32 = -1;

pub const PALETTE_16: [i32; 16] = [
    0x000000, 0x000080, 0x008000, 0x008080, //
    0x800000, 0x800080, 0x808000, 0x808080, //
    0xc0c0c0, 0x0000ff, 0x00ff00, 0x00ffff, //
    0xff0000, 0xff00ff, 0xffff00, 0xffffff,
];

/// Looks up `index` in the 16-color palette, or returns [`PALETTE_SENTINEL`].
pub fn palette_16color(index: i32) -> i32 {
    usize::try_from(index)
        .ok()
        .and_then(|i| PALETTE_16.get(i).copied())
        .unwrap_or(PALETTE_SENTINEL)
}

//! Static coverage-mask tables.
//!
//! Each mask describes an 8-row by 4-column cell, most significant bit at the
//! top-left pixel, row-major. A set bit is a foreground pixel of the glyph.

use super::GlyphPattern;

const fn p(mask: u32, codepoint: u32) -> GlyphPattern {
    GlyphPattern { mask, codepoint }
}

/// Block elements, line drawing and a few technical symbols.
///
/// Full block and the three-quarter quadrants are left out; they are the
/// complements of entries already present.
#[rustfmt::skip]
pub const BLOCK_PATTERNS: &[GlyphPattern] = &[
    p(0x0000_0000, 0x00a0), // no-break space

    // Block graphics
    p(0x0000_000f, 0x2581), // lower 1/8
    p(0x0000_00ff, 0x2582), // lower 1/4
    p(0x0000_0fff, 0x2583),
    p(0x0000_ffff, 0x2584), // lower 1/2
    p(0x000f_ffff, 0x2585),
    p(0x00ff_ffff, 0x2586), // lower 3/4
    p(0x0fff_ffff, 0x2587),
    p(0xeeee_eeee, 0x258a), // left 3/4
    p(0xcccc_cccc, 0x258c), // left 1/2
    p(0x8888_8888, 0x258e), // left 1/4
    p(0x0000_cccc, 0x2596), // quadrant lower left
    p(0x0000_3333, 0x2597), // quadrant lower right
    p(0xcccc_0000, 0x2598), // quadrant upper left
    p(0xcccc_3333, 0x259a), // diagonal 1/2
    p(0x3333_0000, 0x259d), // quadrant upper right

    // Heavy and light line drawing, no double lines
    p(0x000f_f000, 0x2501),
    p(0x6666_6666, 0x2503),
    p(0x0007_7666, 0x250f),
    p(0x000e_e666, 0x2513),
    p(0x6667_7000, 0x2517),
    p(0x666e_e000, 0x251b),
    p(0x6667_7666, 0x2523),
    p(0x666e_e666, 0x252b),
    p(0x000f_f666, 0x2533),
    p(0x666f_f000, 0x253b),
    p(0x666f_f666, 0x254b),
    p(0x000c_c000, 0x2578),
    p(0x0006_6000, 0x2579),
    p(0x0003_3000, 0x257a),
    p(0x0006_6000, 0x257b),
    p(0x0660_0660, 0x254f),
    p(0x000f_0000, 0x2500),
    p(0x0000_f000, 0x2500),
    p(0x4444_4444, 0x2502),
    p(0x2222_2222, 0x2502),
    p(0x000e_0000, 0x2574),
    p(0x0000_e000, 0x2574),
    p(0x4444_0000, 0x2575),
    p(0x2222_0000, 0x2575),
    p(0x0003_0000, 0x2576),
    p(0x0000_3000, 0x2576),
    p(0x0000_4444, 0x2577),
    p(0x0000_2222, 0x2577),

    // Misc technical
    p(0x4444_4444, 0x23a2), // [ extension
    p(0x2222_2222, 0x23a5), // ] extension
    p(0x0f00_0000, 0x23ba), // scanline 1
    p(0x00f0_0000, 0x23bb), // scanline 3
    p(0x0000_0f00, 0x23bc), // scanline 7
    p(0x0000_00f0, 0x23bd), // scanline 9

    p(0x0006_6000, 0x25aa), // black small square
];

/// Teletext 2x3 mosaics from Symbols for Legacy Computing, drawn with a
/// 3-2-3 row split.
#[rustfmt::skip]
pub const TELETEXT_PATTERNS: &[GlyphPattern] = &[
    p(0xccc0_0000, 0x1fb00), p(0x3330_0000, 0x1fb01), p(0xfff0_0000, 0x1fb02),
    p(0x000c_c000, 0x1fb03), p(0xcccc_c000, 0x1fb04), p(0x333c_c000, 0x1fb05),
    p(0xfffc_c000, 0x1fb06), p(0x0003_3000, 0x1fb07), p(0xccc3_3000, 0x1fb08),
    p(0x3333_3000, 0x1fb09), p(0xfff3_3000, 0x1fb0a), p(0x000f_f000, 0x1fb0b),
    p(0xcccf_f000, 0x1fb0c), p(0x333f_f000, 0x1fb0d), p(0xffff_f000, 0x1fb0e),
    p(0x0000_0ccc, 0x1fb0f),

    p(0xccc0_0ccc, 0x1fb10), p(0x3330_0ccc, 0x1fb11), p(0xfff0_0ccc, 0x1fb12),
    p(0x000c_cccc, 0x1fb13), p(0x333c_cccc, 0x1fb14), p(0xfffc_cccc, 0x1fb15),
    p(0x0003_3ccc, 0x1fb16), p(0xccc3_3ccc, 0x1fb17), p(0x3333_3ccc, 0x1fb18),
    p(0xfff3_3ccc, 0x1fb19), p(0x000f_fccc, 0x1fb1a), p(0xcccf_fccc, 0x1fb1b),
    p(0x333f_fccc, 0x1fb1c), p(0xffff_fccc, 0x1fb1d), p(0x0000_0333, 0x1fb1e),
    p(0xccc0_0333, 0x1fb1f),

    p(0x3330_0333, 0x1fb20), p(0xfff0_0333, 0x1fb21), p(0x000c_c333, 0x1fb22),
    p(0xcccc_c333, 0x1fb23), p(0x333c_c333, 0x1fb24), p(0xfffc_c333, 0x1fb25),
    p(0x0003_3333, 0x1fb26), p(0xccc3_3333, 0x1fb27), p(0xfff3_3333, 0x1fb28),
    p(0x000f_f333, 0x1fb29), p(0xcccf_f333, 0x1fb2a), p(0x333f_f333, 0x1fb2b),
    p(0xffff_f333, 0x1fb2c), p(0x0000_0fff, 0x1fb2d), p(0xccc0_0fff, 0x1fb2e),
    p(0x3330_0fff, 0x1fb2f),

    p(0xfff0_0fff, 0x1fb30), p(0x000c_cfff, 0x1fb31), p(0xcccc_cfff, 0x1fb32),
    p(0x333c_cfff, 0x1fb33), p(0xfffc_cfff, 0x1fb34), p(0x0003_3fff, 0x1fb35),
    p(0xccc3_3fff, 0x1fb36), p(0x3333_3fff, 0x1fb37), p(0xfff3_3fff, 0x1fb38),
    p(0x000f_ffff, 0x1fb39), p(0xcccf_ffff, 0x1fb3a), p(0x333f_ffff, 0x1fb3b),
];

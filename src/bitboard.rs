//! Bitboard rendering in the engine's square order.

/// Renders a 64-bit occupancy mask as eight newline-terminated rows of
/// '1'/'0'. Row `i`, column `j` shows bit `i*8 + j`, so the first printed
/// row is rank 1 -- not the usual rank-8-on-top board. Existing tooling
/// depends on this orientation.
pub fn render(bb: u64) -> String {
    let mut out = String::with_capacity(72);
    for i in 0..8 {
        for j in 0..8 {
            out.push(if bb & (1u64 << (i * 8 + j)) != 0 { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

//! Deterministic display-name to avatar-color mapping.

const PALETTE: [&str; 8] = [
    "#f87171", "#fb923c", "#facc15", "#4ade80", "#2dd4bf", "#60a5fa", "#a78bfa", "#f472b6",
];

/// Folds the name's UTF-16 code units into a 32-bit hash
/// (`hash = code + ((hash << 5) - hash)`) and indexes the palette with it.
/// Distinct names may share a color; that is accepted.
pub fn avatar_color(display_name: &str) -> &'static str {
    let mut hash: i32 = 0;
    for code in display_name.encode_utf16() {
        hash = (code as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    PALETTE[hash.unsigned_abs() as usize % PALETTE.len()]
}

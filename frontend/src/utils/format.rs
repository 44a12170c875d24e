const SHORT_ADDRESS_MAX: usize = 12;
const HEAD_CHARS: usize = 6;
const TAIL_CHARS: usize = 4;

/// Shortens long addresses to `0x20a0…104b` for display.
pub fn shorten_address(address: &str) -> String {
    let count = address.chars().count();
    if count <= SHORT_ADDRESS_MAX {
        return address.to_string();
    }
    let head: String = address.chars().take(HEAD_CHARS).collect();
    let tail: String = address.chars().skip(count - TAIL_CHARS).collect();
    format!("{}…{}", head, tail)
}

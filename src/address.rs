use web3::signing::keccak256;

const PREFIX_LEN: usize = 6;
const SUFFIX_LEN: usize = 4;

/// Applies EIP-55 mixed-case checksum encoding to a `0x`-prefixed hex address.
///
/// Anything that is not a 20-byte hex address is returned unchanged.
pub fn checksum_address(address: &str) -> String {
    let hex = match address.strip_prefix("0x") {
        Some(hex) if hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            hex.to_ascii_lowercase()
        }
        _ => return address.to_owned(),
    };

    let hash = keccak256(hex.as_bytes());
    let checksummed: String = hex
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let nibble = (hash[i / 2] >> if i % 2 == 0 { 4 } else { 0 }) & 0x0f;
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect();
    format!("0x{}", checksummed)
}

/// Shortens an account address to `0x1234...abcd`.
///
/// Inputs too short to hold both ends are returned as they are.
pub fn minify_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < PREFIX_LEN + SUFFIX_LEN {
        return address.to_owned();
    }

    let beginning: String = chars[..PREFIX_LEN].iter().collect();
    let end: String = chars[chars.len() - SUFFIX_LEN..].iter().collect();
    format!("{}...{}", beginning, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_full_address() {
        assert_eq!(
            minify_address("0x1234567890123456789012345678901234567890"),
            "0x1234...7890"
        );
    }

    #[test]
    fn test_minify_keeps_casing() {
        assert_eq!(
            minify_address("0xAbCdEf0000000000000000000000000000C0FfEe"),
            "0xAbCd...FfEe"
        );
    }

    #[test]
    fn test_minify_length_is_fixed() {
        let lower = minify_address("0xabcdef0000000000000000000000000000c0ffee");
        let upper = minify_address("0xABCDEF0000000000000000000000000000C0FFEE");
        assert_eq!(lower.len(), 13);
        assert_eq!(lower.len(), upper.len());
    }

    #[test]
    fn test_minify_exactly_ten_chars() {
        assert_eq!(minify_address("0123456789"), "012345...6789");
    }

    #[test]
    fn test_checksum_known_vectors() {
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            assert_eq!(checksum_address(&expected.to_ascii_lowercase()), expected);
            let upper = expected.to_ascii_uppercase().replacen("0X", "0x", 1);
            assert_eq!(checksum_address(&upper), expected);
        }
    }

    #[test]
    fn test_checksum_then_minify() {
        let address = checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
        assert_eq!(minify_address(&address), "0x5aAe...eAed");
    }

    #[test]
    fn test_checksum_ignores_non_addresses() {
        assert_eq!(checksum_address("0x1234"), "0x1234");
        let unprefixed = "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        assert_eq!(checksum_address(unprefixed), unprefixed);
        assert_eq!(checksum_address(""), "");
    }

    #[test]
    fn test_minify_short_input_unchanged() {
        assert_eq!(minify_address("0x1234"), "0x1234");
        assert_eq!(minify_address(""), "");
    }
}

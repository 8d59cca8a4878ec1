// Caesar Cipher
// Fixed shift of ASCII letters, case preserved

/// Shift every ASCII letter forward by `shift` (any integer, reduced mod 26)
pub fn encrypt(text: &str, shift: i64) -> String {
    shift_letters(text, shift.rem_euclid(26) as u8)
}

/// Undo `encrypt` with the same shift
pub fn decrypt(text: &str, shift: i64) -> String {
    shift_letters(text, ((26 - shift.rem_euclid(26)) % 26) as u8)
}

fn shift_letters(text: &str, shift: u8) -> String {
    text.chars()
        .map(|ch| {
            let base = match ch {
                'a'..='z' => b'a',
                'A'..='Z' => b'A',
                _ => return ch,
            };
            char::from(base + (ch as u8 - base + shift) % 26)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_three() {
        assert_eq!(encrypt("Hello, World!", 3), "Khoor, Zruog!");
        assert_eq!(decrypt("Khoor, Zruog!", 3), "Hello, World!");
    }

    #[test]
    fn test_wraps_around_alphabet() {
        assert_eq!(encrypt("xyz XYZ", 3), "abc ABC");
        assert_eq!(encrypt("abc", -1), "zab");
        assert_eq!(encrypt("abc", 27), "bcd");
    }

    #[test]
    fn test_roundtrip_any_shift() {
        for shift in -30..30 {
            assert_eq!(decrypt(&encrypt("Mixed Case 123", shift), shift), "Mixed Case 123");
        }
    }
}

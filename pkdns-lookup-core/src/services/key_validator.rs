//! 公钥格式校验
//!
//! 公钥是 52 个字符的 z-base-32 字符串，去掉了易混淆的 `l`、`o`、`u`、`v`。

use crate::error::KeyValidationError;

/// 公钥长度（字符数）
pub const PUBLIC_KEY_LENGTH: usize = 52;

/// 允许的字符（小写）
pub const Z_BASE_32_ALPHABET: &str = "13456789abcdefghijkmnpqrstwxyz";

/// 是否为 z-base-32 字符（大小写不敏感）
fn is_z_base_32(c: char) -> bool {
    Z_BASE_32_ALPHABET.contains(c.to_ascii_lowercase())
}

/// 校验公钥，成功时返回去除首尾空白并转为小写的公钥
///
/// 检查顺序固定：空值 → 长度 → 字符集。
pub fn validate_public_key(raw: &str) -> Result<String, KeyValidationError> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(KeyValidationError::EmptyInput);
    }

    let actual = key.chars().count();
    if actual != PUBLIC_KEY_LENGTH {
        return Err(KeyValidationError::WrongLength { actual });
    }

    if let Some(found) = key.chars().find(|c| !is_z_base_32(*c)) {
        return Err(KeyValidationError::InvalidCharset { found });
    }

    Ok(key.to_ascii_lowercase())
}

/// 不返回错误的校验形式，用于输入框着色
#[must_use]
pub fn is_valid_public_key(raw: &str) -> bool {
    validate_public_key(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SAMPLE_KEY;

    #[test]
    fn test_accepts_valid_key_and_trims() {
        assert_eq!(
            validate_public_key(&format!("  {SAMPLE_KEY}\n")),
            Ok(SAMPLE_KEY.to_string())
        );
        assert!(is_valid_public_key(SAMPLE_KEY));
    }

    #[test]
    fn test_case_insensitive() {
        let upper = SAMPLE_KEY.to_ascii_uppercase();
        assert_eq!(validate_public_key(&upper), Ok(SAMPLE_KEY.to_string()));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate_public_key(""), Err(KeyValidationError::EmptyInput));
        assert_eq!(
            validate_public_key(" \t "),
            Err(KeyValidationError::EmptyInput)
        );
    }

    #[test]
    fn test_wrong_length_checked_before_charset() {
        assert_eq!(
            validate_public_key("lllo"),
            Err(KeyValidationError::WrongLength { actual: 4 })
        );
        let long = format!("{SAMPLE_KEY}y");
        assert_eq!(
            validate_public_key(&long),
            Err(KeyValidationError::WrongLength { actual: 53 })
        );
    }

    #[test]
    fn test_rejects_excluded_letters() {
        for bad in ['l', 'o', 'u', 'v', 'O', '0', '2', '-'] {
            let mut key: String = SAMPLE_KEY.chars().take(PUBLIC_KEY_LENGTH - 1).collect();
            key.push(bad);
            assert_eq!(
                validate_public_key(&key),
                Err(KeyValidationError::InvalidCharset { found: bad }),
                "char {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_every_alphabet_symbol_accepted() {
        for c in Z_BASE_32_ALPHABET.chars() {
            let key: String = std::iter::repeat(c).take(PUBLIC_KEY_LENGTH).collect();
            assert!(is_valid_public_key(&key), "char {c:?} should be accepted");
        }
    }
}

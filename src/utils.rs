use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilsError {
    #[error("Base58 utils error {0}")]
    Base58(#[from] bs58::decode::Error),
    #[error("Expected 32 bytes for a public key, got {0}")]
    InvalidKeyLength(usize),
}

/// Converts bytes to a base58 string.
pub fn base58_encode<T: AsRef<[u8]>>(bytes: T) -> String {
    bs58::encode(bytes).into_string()
}

/// Converts a base58 string to exactly 32 bytes.
pub fn base58_decode_32<T: AsRef<str>>(string: T) -> Result<[u8; 32], UtilsError> {
    let bytes = bs58::decode(string.as_ref()).into_vec()?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| UtilsError::InvalidKeyLength(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_system_program() {
        let bytes = base58_decode_32("11111111111111111111111111111111").unwrap();
        assert_eq!(bytes, [0u8; 32]);
        assert_eq!(base58_encode(bytes), "11111111111111111111111111111111");
    }

    #[test]
    fn test_decode_wrong_length() {
        let err = base58_decode_32("abc").unwrap_err();
        assert!(matches!(err, UtilsError::InvalidKeyLength(_)));
    }

    #[test]
    fn test_decode_invalid_character() {
        // '0' is not in the base58 alphabet.
        let err = base58_decode_32("0OIl").unwrap_err();
        assert!(matches!(err, UtilsError::Base58(_)));
    }
}

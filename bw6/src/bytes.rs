use crate::{error::Error, String, Vec};

/// Fixed-width big-endian encoding.
pub trait ToBytes {
    fn to_bytes(&self) -> Vec<u8>;

    /// `0x`-prefixed lowercase hex of `to_bytes`.
    fn to_hex(&self) -> String {
        let mut s = String::from("0x");
        s.push_str(&hex::encode(self.to_bytes()));
        s
    }
}

/// Decoding counterpart of [`ToBytes`].
pub trait FromBytes: Sized {
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>;

    /// Accepts upper or lower case digits, with or without the `0x` prefix.
    fn from_hex(s: &str) -> Result<Self, Error> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }
}

impl<T: ToBytes> ToBytes for [T] {
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for item in self {
            out.extend_from_slice(&item.to_bytes());
        }
        out
    }
}

/// Checks an exact-width input before a decoder slices it.
pub(crate) fn check_length(bytes: &[u8], expected: usize) -> Result<(), Error> {
    if bytes.len() != expected {
        return Err(Error::InputLength {
            expected,
            found: bytes.len(),
        });
    }
    Ok(())
}

//! AEAD: AES-GCM (128/192/256) with an explicit 12-byte nonce

use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::aes::{Aes128, Aes192, Aes256};
use aes_gcm::{AesGcm, Nonce, Tag};
use zeroize::Zeroizing;

use crate::error::Error;
use crate::wire::{NONCE_BYTES, TAG_BYTES};

/// GCM is instantiated with the nonce size spelled out rather than taken from
/// a library default; the nonce layout depends on it being exactly 12 bytes.
type Gcm<A> = AesGcm<A, U12>;

/// Largest plaintext (or signed payload) GCM accepts: 2^36 - 32 bytes.
pub const MAX_MESSAGE_BYTES: u64 = (1 << 36) - 32;

/// Supported key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    pub fn from_len(len: usize) -> Result<Self, Error> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            _ => Err(Error::InvalidKey),
        }
    }

    /// Key length in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    pub const fn bits(self) -> usize {
        self.len() * 8
    }
}

/// A keyed GCM instance. Immutable once built.
#[derive(Clone)]
pub(crate) enum Cipher {
    Aes128(Gcm<Aes128>),
    Aes192(Gcm<Aes192>),
    Aes256(Gcm<Aes256>),
}

macro_rules! with_cipher {
    ($cipher:expr, $gcm:ident => $body:expr) => {
        match $cipher {
            Cipher::Aes128($gcm) => $body,
            Cipher::Aes192($gcm) => $body,
            Cipher::Aes256($gcm) => $body,
        }
    };
}

impl Cipher {
    /// Key the primitive from a private copy of `key`. The copy is wiped on return.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        let size = KeySize::from_len(key.len())?;
        let k = Zeroizing::new(key.to_vec());

        let cipher = match size {
            KeySize::Aes128 => Gcm::<Aes128>::new_from_slice(&k).map(Self::Aes128),
            KeySize::Aes192 => Gcm::<Aes192>::new_from_slice(&k).map(Self::Aes192),
            KeySize::Aes256 => Gcm::<Aes256>::new_from_slice(&k).map(Self::Aes256),
        };
        cipher.map_err(|_| Error::InvalidKey)
    }

    pub fn key_size(&self) -> KeySize {
        match self {
            Self::Aes128(_) => KeySize::Aes128,
            Self::Aes192(_) => KeySize::Aes192,
            Self::Aes256(_) => KeySize::Aes256,
        }
    }

    /// Encrypt `buffer` in place (no AAD) and return the detached tag.
    pub fn seal_in_place(
        &self,
        nonce: &[u8; NONCE_BYTES],
        buffer: &mut [u8],
    ) -> Result<[u8; TAG_BYTES], aes_gcm::Error> {
        let n = Nonce::<U12>::from_slice(nonce);
        let tag = with_cipher!(self, gcm => gcm.encrypt_in_place_detached(n, b"", buffer))?;
        Ok(tag_bytes(&tag))
    }

    /// Verify `tag` and decrypt `buffer` in place (no AAD).
    ///
    /// On failure `buffer` still holds ciphertext; the caller discards it.
    pub fn open_in_place(
        &self,
        nonce: &[u8; NONCE_BYTES],
        buffer: &mut [u8],
        tag: &[u8; TAG_BYTES],
    ) -> Result<(), aes_gcm::Error> {
        let n = Nonce::<U12>::from_slice(nonce);
        let t = Tag::<U16>::from_slice(tag);
        with_cipher!(self, gcm => gcm.decrypt_in_place_detached(n, b"", buffer, t))
    }

    /// Authenticate `data` as associated data only; produces no ciphertext.
    pub fn tag_only(
        &self,
        nonce: &[u8; NONCE_BYTES],
        data: &[u8],
    ) -> Result<[u8; TAG_BYTES], aes_gcm::Error> {
        let n = Nonce::<U12>::from_slice(nonce);
        let tag = with_cipher!(self, gcm => gcm.encrypt_in_place_detached(n, data, &mut []))?;
        Ok(tag_bytes(&tag))
    }

    /// Check a tag produced by [`Cipher::tag_only`].
    pub fn verify_tag(
        &self,
        nonce: &[u8; NONCE_BYTES],
        data: &[u8],
        tag: &[u8; TAG_BYTES],
    ) -> Result<(), aes_gcm::Error> {
        let n = Nonce::<U12>::from_slice(nonce);
        let t = Tag::<U16>::from_slice(tag);
        with_cipher!(self, gcm => gcm.decrypt_in_place_detached(n, data, &mut [], t))
    }
}

#[inline]
fn tag_bytes(tag: &Tag<U16>) -> [u8; TAG_BYTES] {
    let mut out = [0u8; TAG_BYTES];
    out.copy_from_slice(tag);
    out
}

/// Fresh random key material from the OS RNG.
pub fn generate_key(size: KeySize) -> Result<Zeroizing<alloc::vec::Vec<u8>>, Error> {
    let mut key = Zeroizing::new(alloc::vec![0u8; size.len()]);
    getrandom::getrandom(&mut key).map_err(|_| Error::Entropy)?;
    tracing::debug!(bits = size.bits(), "generated codec key");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONCE: [u8; NONCE_BYTES] = [7u8; NONCE_BYTES];

    #[test]
    fn key_sizes() {
        for bad in [0usize, 15, 17, 23, 25, 31, 33, 64] {
            assert_eq!(KeySize::from_len(bad), Err(Error::InvalidKey));
        }
        assert_eq!(KeySize::from_len(16), Ok(KeySize::Aes128));
        assert_eq!(KeySize::from_len(24), Ok(KeySize::Aes192));
        assert_eq!(KeySize::from_len(32), Ok(KeySize::Aes256));
        assert_eq!(KeySize::Aes192.bits(), 192);
    }

    #[test]
    fn seal_open_in_place_each_size() {
        for len in [16usize, 24, 32] {
            let cipher = Cipher::new(&alloc::vec![0x11u8; len]).unwrap();
            assert_eq!(cipher.key_size().len(), len);

            let mut buf = *b"in place";
            let tag = cipher.seal_in_place(&NONCE, &mut buf).unwrap();
            assert_ne!(&buf, b"in place");

            cipher.open_in_place(&NONCE, &mut buf, &tag).unwrap();
            assert_eq!(&buf, b"in place");
        }
    }

    #[test]
    fn tag_only_binds_data_and_nonce() {
        let cipher = Cipher::new(&[0x22u8; 16]).unwrap();
        let tag = cipher.tag_only(&NONCE, b"visible").unwrap();

        assert!(cipher.verify_tag(&NONCE, b"visible", &tag).is_ok());
        assert!(cipher.verify_tag(&NONCE, b"visiblE", &tag).is_err());
        assert!(cipher.verify_tag(&[8u8; NONCE_BYTES], b"visible", &tag).is_err());
    }

    #[test]
    fn generated_keys_are_usable_and_distinct() {
        let a = generate_key(KeySize::Aes256).unwrap();
        let b = generate_key(KeySize::Aes256).unwrap();
        assert_eq!(a.len(), 32);
        assert_ne!(*a, *b);
        assert!(Cipher::new(&a).is_ok());
    }
}

//! Error taxonomy for the codec.

use core::fmt;

/// Every failure the codec can report.
///
/// `Expired` and `AuthenticationFailed` should be treated alike by callers in
/// security-sensitive paths: both mean "reject this input".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key length is not 16, 24 or 32 bytes. Raised only at construction.
    InvalidKey,
    /// Blob is too short to hold the fixed framing.
    InvalidData,
    /// Embedded timestamp is older than `max_age` or lies in the future.
    Expired,
    /// Tag verification failed. The wrapped primitive error is opaque.
    AuthenticationFailed(aes_gcm::Error),
    /// The OS random number generator failed during key generation.
    Entropy,
}

impl Error {
    /// True for the two "reject this input" outcomes.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Expired | Self::AuthenticationFailed(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "invalid AES key, must be 16, 24 or 32 bytes"),
            Self::InvalidData => write!(f, "invalid cipher text"),
            Self::Expired => write!(f, "data expired"),
            Self::AuthenticationFailed(_) => {
                write!(f, "error opening cipher text: message authentication failed")
            }
            Self::Entropy => write!(f, "random number generator unavailable"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AuthenticationFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<aes_gcm::Error> for Error {
    fn from(e: aes_gcm::Error) -> Self {
        Self::AuthenticationFailed(e)
    }
}

//! ChaCha20-based random source with an explicit weak fallback.
//!
//! # Selection Model
//!
//! The generator is seeded once from the operating system's entropy
//! source. If that source is unavailable the program refuses to run,
//! unless the user explicitly opted into a weaker generator seeded from
//! process-local state (time and pid). The decision happens once, at
//! startup, never per call.

use blake3::Hasher;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Environment variable whose presence allows the weak fallback.
pub const ALLOW_WEAK_RNG_ENV: &str = "WORDPASS_ALLOW_WEAK_RNG";

/// Domain separator for the weak fallback seed.
const WEAK_SEED_DOMAIN: &[u8] = b"wordpass-weak-seed-v1";

/// Domain separator for per-word deterministic seeds.
const TEXT_SEED_DOMAIN: &[u8] = b"wordpass-text-seed-v1";

/// Errors raised while constructing the random source.
#[derive(Debug, Error)]
pub enum RngError {
    /// OS entropy failed and the weak fallback was not allowed.
    #[error(
        "system does not support a cryptographically secure random number generator ({0}); \
         use --allow-weak-rng or set WORDPASS_ALLOW_WEAK_RNG to continue with a less-secure generator"
    )]
    SecureSourceUnavailable(String),
}

/// Whether a weak generator may replace an unavailable secure one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeakRngPolicy {
    /// Fail when the OS source is unavailable.
    #[default]
    Deny,
    /// Fall back to a time/pid-seeded generator, with a warning.
    Allow,
}

impl WeakRngPolicy {
    /// Combines the command-line flag with the environment toggle.
    pub fn from_flag_and_env(flag: bool) -> Self {
        Self::from_parts(flag, std::env::var_os(ALLOW_WEAK_RNG_ENV).is_some())
    }

    fn from_parts(flag: bool, env_present: bool) -> Self {
        if flag || env_present {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

/// How the active generator was seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngStrength {
    /// Seeded from the operating system entropy source.
    Secure,
    /// Seeded from predictable process state after an explicit opt-in.
    Weak,
    /// Seeded from a caller-supplied value (tests, benchmarks).
    Deterministic,
}

/// Random source handed to the selector, case transformer and assembler.
pub struct PassphraseRng {
    inner: ChaCha20Rng,
    strength: RngStrength,
}

impl PassphraseRng {
    /// Seeds from the OS entropy source, refusing any fallback.
    pub fn from_os_entropy() -> Result<Self, RngError> {
        Self::select(&mut OsRng, WeakRngPolicy::Deny)
    }

    /// Seeds from the OS entropy source under `policy`.
    pub fn with_policy(policy: WeakRngPolicy) -> Result<Self, RngError> {
        Self::select(&mut OsRng, policy)
    }

    /// Seeds from `os`, falling back to a weak seed only when `policy` allows it.
    pub fn select<S: RngCore>(os: &mut S, policy: WeakRngPolicy) -> Result<Self, RngError> {
        let mut seed = [0u8; 32];
        match os.try_fill_bytes(&mut seed) {
            Ok(()) => {
                tracing::debug!("Random source seeded from OS entropy");
                Ok(Self {
                    inner: ChaCha20Rng::from_seed(seed),
                    strength: RngStrength::Secure,
                })
            }
            Err(e) => match policy {
                WeakRngPolicy::Allow => {
                    tracing::warn!(
                        error = %e,
                        "System does not support a cryptographically secure random number \
                         generator. Continuing with less-secure generator."
                    );
                    Ok(Self {
                        inner: ChaCha20Rng::from_seed(weak_seed()),
                        strength: RngStrength::Weak,
                    })
                }
                WeakRngPolicy::Deny => Err(RngError::SecureSourceUnavailable(e.to_string())),
            },
        }
    }

    /// Creates a reproducible source from a fixed seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            strength: RngStrength::Deterministic,
        }
    }

    /// Returns how this source was seeded.
    pub fn strength(&self) -> RngStrength {
        self.strength
    }

    /// Returns true if seeded from the OS entropy source.
    pub fn is_secure(&self) -> bool {
        self.strength == RngStrength::Secure
    }
}

impl RngCore for PassphraseRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Returns a generator seeded from `text` alone.
///
/// Equal text always yields an identical stream. Used for the
/// reproducible random-case mode.
pub fn rng_for_text(text: &str) -> ChaCha20Rng {
    let mut hasher = Hasher::new();
    hasher.update(TEXT_SEED_DOMAIN);
    hasher.update(text.as_bytes());
    ChaCha20Rng::from_seed(*hasher.finalize().as_bytes())
}

// Not secret: anyone who knows roughly when the process ran can search it.
fn weak_seed() -> [u8; 32] {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut hasher = Hasher::new();
    hasher.update(WEAK_SEED_DOMAIN);
    hasher.update(&nanos.to_le_bytes());
    hasher.update(&std::process::id().to_le_bytes());
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    /// An entropy source that always fails, like a platform without one.
    struct BrokenSource;

    impl RngCore for BrokenSource {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            let code = NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
            Err(rand_core::Error::from(code))
        }
    }

    #[test]
    fn test_os_entropy_is_secure() {
        let rng = PassphraseRng::from_os_entropy().unwrap();
        assert!(rng.is_secure());
    }

    #[test]
    fn test_broken_source_denied_by_default() {
        let result = PassphraseRng::select(&mut BrokenSource, WeakRngPolicy::default());
        assert!(matches!(result, Err(RngError::SecureSourceUnavailable(_))));
    }

    #[test]
    fn test_broken_source_falls_back_when_allowed() {
        let rng = PassphraseRng::select(&mut BrokenSource, WeakRngPolicy::Allow).unwrap();
        assert_eq!(rng.strength(), RngStrength::Weak);
        assert!(!rng.is_secure());
    }

    #[test]
    fn test_policy_from_flag_or_env() {
        assert_eq!(WeakRngPolicy::from_parts(false, false), WeakRngPolicy::Deny);
        assert_eq!(WeakRngPolicy::from_parts(true, false), WeakRngPolicy::Allow);
        assert_eq!(WeakRngPolicy::from_parts(false, true), WeakRngPolicy::Allow);
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = PassphraseRng::from_seed([7u8; 32]);
        let mut b = PassphraseRng::from_seed([7u8; 32]);
        assert_eq!(a.next_u64(), b.next_u64());
        assert_eq!(a.strength(), RngStrength::Deterministic);
    }

    #[test]
    fn test_text_seed_is_stable() {
        let mut a = rng_for_text("apple");
        let mut b = rng_for_text("apple");
        let mut c = rng_for_text("banana");

        let first = a.next_u64();
        assert_eq!(first, b.next_u64());
        assert_ne!(first, c.next_u64());
    }
}

//! Randomized identity generator
//!
//! One RNG per generator, seeded once. Generation runs on a single task
//! before any request is spawned, so the RNG is never shared.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::Identity;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const USERNAME_PREFIX: &str = "user_";
const EMAIL_DOMAIN: &str = "@example.com";

const SUFFIX_LEN: usize = 8;
const PASSWORD_LEN: usize = 12;
const PHONE_LEN: usize = 10;
const FIRST_NAME_LEN: usize = 6;
const LAST_NAME_LEN: usize = 8;

/// Generator for synthetic user identities
pub struct IdentityGenerator {
    rng: StdRng,
}

impl IdentityGenerator {
    /// Create a generator seeded from the current wall-clock time
    pub fn from_clock() -> Self {
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        debug!("Seeding identity generator with {}", seed);
        Self::with_seed(seed)
    }

    /// Create a generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` identities
    pub fn generate(&mut self, count: usize) -> Vec<Identity> {
        (0..count).map(|_| self.next_identity()).collect()
    }

    /// Generate a single identity
    pub fn next_identity(&mut self) -> Identity {
        Identity::new(
            format!("{USERNAME_PREFIX}{}", self.random_string(SUFFIX_LEN)),
            self.random_string(PASSWORD_LEN),
            format!("{}{EMAIL_DOMAIN}", self.random_string(SUFFIX_LEN)),
            self.random_string(PHONE_LEN),
            self.random_string(FIRST_NAME_LEN),
            self.random_string(LAST_NAME_LEN),
        )
    }

    fn random_string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| CHARSET[self.rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }
}

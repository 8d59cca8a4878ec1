// Toolkit Configuration
// Tunables for the O(p) checks, prime generation and file input

/// Configuration shared by operations that need a tunable limit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolkitConfig {
    /// Largest prime accepted by the primitive root check
    pub primitive_root_limit: u64,
    /// Miller-Rabin rounds used when generating random primes
    pub prime_test_rounds: u32,
    /// Largest file accepted as operation input
    pub max_input_bytes: u64,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            primitive_root_limit: 10_000_000,
            prime_test_rounds: 20,
            max_input_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ToolkitConfig {
    pub fn with_primitive_root_limit(mut self, limit: u64) -> Self {
        self.primitive_root_limit = limit;
        self
    }

    pub fn with_prime_test_rounds(mut self, rounds: u32) -> Self {
        self.prime_test_rounds = rounds;
        self
    }

    pub fn with_max_input_bytes(mut self, bytes: u64) -> Self {
        self.max_input_bytes = bytes;
        self
    }
}

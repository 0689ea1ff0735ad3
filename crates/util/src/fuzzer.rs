use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Random text generator for exercising the string helpers.
///
/// Uses the xoshiro256** PRNG, so a fixed seed reproduces a run.
///
/// # Examples
///
/// ```
/// use weft_util::fuzzer::Fuzzer;
///
/// let fuzzer = Fuzzer::new(Some([7u8; 32]));
/// let text = fuzzer.word_text(12, 1, 9);
///
/// assert_eq!(text.split(' ').count(), 12);
/// assert!(text.split(' ').all(|word| (1..=9).contains(&word.len())));
/// ```
#[derive(Clone)]
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Arc::new(Mutex::new(Xoshiro256StarStar::from_seed(seed))),
        }
    }

    fn rng(&self) -> MutexGuard<'_, Xoshiro256StarStar> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&self, min: usize, max: usize) -> usize {
        self.rng().gen_range(min..=max)
    }

    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng().gen_bool(probability)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let idx = self.rng().gen_range(0..elements.len());
        &elements[idx]
    }

    /// Random string of `len` characters drawn from `chars`.
    pub fn random_string(&self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        let mut rng = self.rng();
        (0..len)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }

    /// A lowercase word of `min_len..=max_len` letters.
    pub fn word(&self, min_len: usize, max_len: usize) -> String {
        let len = self.random_int(min_len, max_len);
        self.random_string(len, LOWERCASE)
    }

    /// `count` words joined by single spaces.
    pub fn word_text(&self, count: usize, min_len: usize, max_len: usize) -> String {
        (0..count)
            .map(|_| self.word(min_len, max_len))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Printable ASCII with the occasional line terminator, hyphen and space.
    pub fn noisy_text(&self, len: usize) -> String {
        (0..len)
            .map(|_| match self.random_int(0, 19) {
                0 => '\n',
                1 => '\r',
                2 => '-',
                3..=5 => ' ',
                _ => self.random_int(0x21, 0x7e) as u8 as char,
            })
            .collect()
    }
}

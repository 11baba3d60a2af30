//! Seeded ARC4 keystream generator
//!
//! Reproduces seedrandom.js (v3, default ARC4 generator) bit for bit, so a
//! string seed always yields the same sequence of draws. Daily word selection
//! depends on this: any change here changes every day's word.

use rand::RngCore;

const WIDTH: usize = 256;
const MASK: usize = WIDTH - 1;

/// Bytes in the first chunk of a uniform draw (48 bits)
const CHUNKS: usize = 6;
/// 2^52: draws are filled to 52 significant bits
const SIGNIFICANCE: u64 = 1 << 52;
/// 2^53: bound that avoids rounding up when the last byte is added
const OVERFLOW: u64 = 1 << 53;

/// ARC4 generator keyed by a string seed
#[derive(Clone)]
pub struct SeedRandom {
    i: u8,
    j: u8,
    s: [u8; WIDTH],
}

impl SeedRandom {
    /// Key a generator from `seed`
    ///
    /// The seed is folded into a key with seedrandom's `mixkey` over UTF-16
    /// code units, run through the RC4 key schedule, and the first 256
    /// keystream bytes are discarded.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        let mut rng = Self {
            i: 0,
            j: 0,
            s: [0; WIDTH],
        };
        rng.schedule(&mix_key(seed));

        let mut discard = [0u8; WIDTH];
        rng.fill_bytes(&mut discard);
        rng
    }

    fn schedule(&mut self, key: &[u8]) {
        let key: &[u8] = if key.is_empty() { &[0] } else { key };

        for (slot, value) in self.s.iter_mut().zip(0u8..=u8::MAX) {
            *slot = value;
        }

        let mut j: u8 = 0;
        for i in 0..WIDTH {
            let t = self.s[i];
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(t);
            self.s[i] = self.s[usize::from(j)];
            self.s[usize::from(j)] = t;
        }
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.s[usize::from(self.i)];
        self.j = self.j.wrapping_add(t);
        self.s[usize::from(self.i)] = self.s[usize::from(self.j)];
        self.s[usize::from(self.j)] = t;
        self.s[usize::from(self.s[usize::from(self.i)].wrapping_add(t))]
    }
}

impl RngCore for SeedRandom {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_be_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst {
            *byte = self.next_byte();
        }
    }
}

/// Fold a seed string into an ARC4 key (seedrandom's `mixkey`)
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;

    for (j, unit) in seed.encode_utf16().enumerate() {
        let slot = j & MASK;
        let previous = key.get(slot).copied().map_or(0, u32::from);
        smear ^= previous * 19;
        let mixed = (smear.wrapping_add(u32::from(unit)) & 0xff) as u8;
        if slot < key.len() {
            key[slot] = mixed;
        } else {
            key.push(mixed);
        }
    }

    key
}

/// Uniform draw in [0, 1) with 52 significant bits
///
/// Pinned algorithm: a 48-bit big-endian numerator over 2^48, extended one
/// keystream byte at a time until it holds at least 52 bits, then shifted
/// right until it is below 2^53 before the last byte is added.
pub fn unit_interval<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    let mut chunk = [0u8; 8];
    rng.fill_bytes(&mut chunk[8 - CHUNKS..]);
    let mut n = u64::from_be_bytes(chunk);
    // The denominator outgrows u64 when the first chunk is small
    let mut d = (1u64 << (8 * CHUNKS)) as f64;
    let mut x: u64 = 0;

    while n < SIGNIFICANCE {
        n = (n + x) * WIDTH as u64;
        d *= WIDTH as f64;
        let mut byte = [0u8; 1];
        rng.fill_bytes(&mut byte);
        x = u64::from(byte[0]);
    }
    while n >= OVERFLOW {
        n /= 2;
        d /= 2.0;
        x >>= 1;
    }

    (n + x) as f64 / d
}

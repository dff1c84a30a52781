//! SHA-1 compression function (FIPS 180-4)

use crate::hashing::HashAlgorithm;
use crate::hashing::core::{BLOCK_LENGTH, BLOCK_WORDS, ByteOrder, CompressionCore};
use crate::hashing::digest::Sha1Digest;
use crate::hashing::state::Sha1;
use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};

const INITIAL_STATE: [u32; 5] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

/// Expanded message schedule length
const SCHEDULE_LENGTH: usize = 80;

/// Additive constant per 20-round phase
const ROUND_CONSTANTS: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

#[inline(always)]
fn choose(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Expand the sixteen block words into the 80-word schedule
fn expand(message: [u32; BLOCK_WORDS]) -> [u32; SCHEDULE_LENGTH] {
    let mut schedule = [0u32; SCHEDULE_LENGTH];
    schedule[..BLOCK_WORDS].copy_from_slice(&message);
    for t in BLOCK_WORDS..SCHEDULE_LENGTH {
        schedule[t] =
            (schedule[t - 3] ^ schedule[t - 8] ^ schedule[t - 14] ^ schedule[t - 16]).rotate_left(1);
    }
    schedule
}

/// Marker type for the SHA-1 block function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sha1Core;

impl CompressionCore for Sha1Core {
    const ALGORITHM: HashAlgorithm = HashAlgorithm::SHA1;
    const BYTE_ORDER: ByteOrder = ByteOrder::Big;
    const DIGEST_LENGTH: usize = 20;

    type State = [u32; 5];
    type Output = Sha1Digest;

    fn initial_state() -> Self::State {
        INITIAL_STATE
    }

    fn compress(state: &mut Self::State, block: &[u8; BLOCK_LENGTH]) {
        let schedule = expand(Self::BYTE_ORDER.read_block(block));
        let [mut a, mut b, mut c, mut d, mut e] = *state;

        for (t, &word) in schedule.iter().enumerate() {
            let phase = t / 20;
            let mixed = match phase {
                0 => choose(b, c, d),
                2 => majority(b, c, d),
                _ => parity(b, c, d),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(mixed)
                .wrapping_add(e)
                .wrapping_add(ROUND_CONSTANTS[phase])
                .wrapping_add(word);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
    }

    fn output(state: &Self::State) -> Self::Output {
        Sha1Digest::new(Self::BYTE_ORDER.write_words(state))
    }
}

/// Registry entry for SHA-1
pub struct Sha1Algorithm;

impl HashAlgorithmImpl for Sha1Algorithm {
    fn id(&self) -> &'static str {
        "sha1"
    }

    fn display_name(&self) -> &'static str {
        "SHA1"
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::SHA1
    }

    fn digest_length(&self) -> usize {
        Sha1Core::DIGEST_LENGTH
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha1::new())
    }
}

//! MD5 compression function (RFC 1321)

use crate::hashing::HashAlgorithm;
use crate::hashing::core::{BLOCK_LENGTH, ByteOrder, CompressionCore};
use crate::hashing::digest::Md5Digest;
use crate::hashing::state::Md5;
use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};

const INITIAL_STATE: [u32; 4] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

/// `floor(abs(sin(i + 1)) * 2^32)` for `i` in `0..64`
#[rustfmt::skip]
const ROUND_CONSTANTS: [u32; 64] = [
    0xD76AA478, 0xE8C7B756, 0x242070DB, 0xC1BDCEEE, 0xF57C0FAF, 0x4787C62A, 0xA8304613, 0xFD469501,
    0x698098D8, 0x8B44F7AF, 0xFFFF5BB1, 0x895CD7BE, 0x6B901122, 0xFD987193, 0xA679438E, 0x49B40821,
    0xF61E2562, 0xC040B340, 0x265E5A51, 0xE9B6C7AA, 0xD62F105D, 0x02441453, 0xD8A1E681, 0xE7D3FBC8,
    0x21E1CDE6, 0xC33707D6, 0xF4D50D87, 0x455A14ED, 0xA9E3E905, 0xFCEFA3F8, 0x676F02D9, 0x8D2A4C8A,
    0xFFFA3942, 0x8771F681, 0x6D9D6122, 0xFDE5380C, 0xA4BEEA44, 0x4BDECFA9, 0xF6BB4B60, 0xBEBFBC70,
    0x289B7EC6, 0xEAA127FA, 0xD4EF3085, 0x04881D05, 0xD9D4D039, 0xE6DB99E5, 0x1FA27CF8, 0xC4AC5665,
    0xF4292244, 0x432AFF97, 0xAB9423A7, 0xFC93A039, 0x655B59C3, 0x8F0CCC92, 0xFFEFF47D, 0x85845DD1,
    0x6FA87E4F, 0xFE2CE6E0, 0xA3014314, 0x4E0811A1, 0xF7537E82, 0xBD3AF235, 0x2AD7D2BB, 0xEB86D391,
];

/// Left-rotate amounts; each phase cycles through its four values
const SHIFTS: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

#[inline(always)]
fn choose(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn choose_inverted(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn or_not(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Marker type for the MD5 block function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Md5Core;

impl CompressionCore for Md5Core {
    const ALGORITHM: HashAlgorithm = HashAlgorithm::MD5;
    const BYTE_ORDER: ByteOrder = ByteOrder::Little;
    const DIGEST_LENGTH: usize = 16;

    type State = [u32; 4];
    type Output = Md5Digest;

    fn initial_state() -> Self::State {
        INITIAL_STATE
    }

    fn compress(state: &mut Self::State, block: &[u8; BLOCK_LENGTH]) {
        let message = Self::BYTE_ORDER.read_block(block);
        let [mut a, mut b, mut c, mut d] = *state;

        for round in 0..64 {
            let phase = round / 16;
            let (mixed, index) = match phase {
                0 => (choose(b, c, d), round),
                1 => (choose_inverted(b, c, d), (5 * round + 1) % 16),
                2 => (parity(b, c, d), (3 * round + 5) % 16),
                _ => (or_not(b, c, d), (7 * round) % 16),
            };

            let rotated = a
                .wrapping_add(mixed)
                .wrapping_add(ROUND_CONSTANTS[round])
                .wrapping_add(message[index])
                .rotate_left(SHIFTS[phase][round % 4]);

            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(rotated);
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
    }

    fn output(state: &Self::State) -> Self::Output {
        Md5Digest::new(Self::BYTE_ORDER.write_words(state))
    }
}

/// Registry entry for MD5
pub struct Md5Algorithm;

impl HashAlgorithmImpl for Md5Algorithm {
    fn id(&self) -> &'static str {
        "md5"
    }

    fn display_name(&self) -> &'static str {
        "MD5"
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::MD5
    }

    fn digest_length(&self) -> usize {
        Md5Core::DIGEST_LENGTH
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Md5::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single block holding the padded empty message
    fn empty_message_block() -> [u8; BLOCK_LENGTH] {
        let mut block = [0u8; BLOCK_LENGTH];
        block[0] = 0x80;
        block
    }

    #[test]
    fn test_compress_empty_message_block() {
        let mut state = Md5Core::initial_state();
        Md5Core::compress(&mut state, &empty_message_block());
        assert_eq!(state, [0xD98C1DD4, 0x04B2008F, 0x980980E9, 0x7E42F8EC]);
    }

    #[test]
    fn test_output_is_little_endian() {
        let digest = Md5Core::output(&[0xD98C1DD4, 0x04B2008F, 0x980980E9, 0x7E42F8EC]);
        assert_eq!(format!("{digest:x}"), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_boolean_functions() {
        let (x, y, z) = (0xF0F0_F0F0, 0xCCCC_CCCC, 0xAAAA_AAAA);
        assert_eq!(choose(x, y, z), 0xCACA_CACA);
        assert_eq!(choose_inverted(x, y, z), 0xE4E4_E4E4);
        assert_eq!(parity(x, y, z), 0x9696_9696);
        assert_eq!(or_not(x, y, z), 0x3939_3939);
    }

    #[test]
    fn test_round_constants_match_sine_table() {
        for (i, &constant) in ROUND_CONSTANTS.iter().enumerate() {
            let derived = ((i as f64 + 1.0).sin().abs() * 4_294_967_296.0) as u32;
            assert_eq!(constant, derived, "constant {i} differs");
        }
    }

    #[test]
    fn test_registry_entry() {
        let algorithm = Md5Algorithm;
        assert_eq!(algorithm.id(), "md5");
        assert_eq!(algorithm.digest_length(), 16);

        let mut hasher = algorithm.create_hasher();
        hasher.update(b"abc");
        assert_eq!(hasher.hexdigest(), "900150983cd24fb0d6963f7d28e17f72");
    }
}

//! Known-answer vectors for MD5 and SHA-1
//!
//! RFC 1321 appendix A.5 and FIPS 180 examples, plus messages chosen to land
//! on the padding boundaries (55, 56, 63, 64 and 65 bytes of 'a').

use crate::builders::MessageBuilder;
use digestkit_core::{HashAlgorithm, Md5Digest, Sha1Digest};

/// One message with its expected digests in lowercase hex
#[derive(Debug, Clone)]
pub struct KnownAnswer {
    pub label: &'static str,
    pub message: Vec<u8>,
    pub md5: &'static str,
    pub sha1: &'static str,
}

impl KnownAnswer {
    /// Expected MD5 as a parsed digest
    pub fn md5_digest(&self) -> Md5Digest {
        self.md5.parse().expect("vector table holds valid MD5 hex")
    }

    /// Expected SHA-1 as a parsed digest
    pub fn sha1_digest(&self) -> Sha1Digest {
        self.sha1.parse().expect("vector table holds valid SHA-1 hex")
    }

    /// Expected lowercase hex for `algorithm`
    pub fn expected_hex(&self, algorithm: HashAlgorithm) -> &'static str {
        match algorithm {
            HashAlgorithm::MD5 => self.md5,
            HashAlgorithm::SHA1 => self.sha1,
        }
    }

    fn text(text: &'static str, md5: &'static str, sha1: &'static str) -> Self {
        Self {
            label: text,
            message: text.as_bytes().to_vec(),
            md5,
            sha1,
        }
    }

    fn built(
        label: &'static str,
        message: MessageBuilder,
        md5: &'static str,
        sha1: &'static str,
    ) -> Self {
        Self {
            label,
            message: message.build(),
            md5,
            sha1,
        }
    }
}

/// All known-answer vectors
pub fn known_answers() -> Vec<KnownAnswer> {
    let a = |n| MessageBuilder::new().repeat(b'a', n);
    vec![
        KnownAnswer::text(
            "",
            "d41d8cd98f00b204e9800998ecf8427e",
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        ),
        KnownAnswer::text(
            "a",
            "0cc175b9c0f1b6a831c399e269772661",
            "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8",
        ),
        KnownAnswer::text(
            "abc",
            "900150983cd24fb0d6963f7d28e17f72",
            "a9993e364706816aba3e25717850c26c9cd0d89d",
        ),
        KnownAnswer::text(
            "message digest",
            "f96b697d7cb7938d525a2f31aaf161d0",
            "c12252ceda8be8994d5fa0290a47231c1d16aae3",
        ),
        KnownAnswer::text(
            "abcdefghijklmnopqrstuvwxyz",
            "c3fcd3d76192e4007dfb496cca67e13b",
            "32d10c7b8cf96570ca04ce37f2a19d84240d3a89",
        ),
        KnownAnswer::text(
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            "d174ab98d277d9f5a5611c2c9f419d9f",
            "761c457bf73b14d27e9e9265c46f4b4dda11f940",
        ),
        KnownAnswer::text(
            "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            "57edf4a22be3c955ac49da2e2107b67a",
            "50abf5706a150990a08b2c5ea40fa0e585554732",
        ),
        KnownAnswer::text(
            "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            "8215ef0796a20bcaaae116d3876c664a",
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        ),
        KnownAnswer::text(
            "The quick brown fox jumps over the lazy dog",
            "9e107d9d372bb6826bd81d3542a419d6",
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
        ),
        KnownAnswer::built(
            "55 x 'a'",
            a(55),
            "ef1772b6dff9a122358552954ad0df65",
            "c1c8bbdc22796e28c0e15163d20899b65621d65a",
        ),
        KnownAnswer::built(
            "56 x 'a'",
            a(56),
            "3b0c8ac703f828b04c6c197006d17218",
            "c2db330f6083854c99d4b5bfb6e8f29f201be699",
        ),
        KnownAnswer::built(
            "63 x 'a'",
            a(63),
            "b06521f39153d618550606be297466d5",
            "03f09f5b158a7a8cdad920bddc29b81c18a551f5",
        ),
        KnownAnswer::built(
            "64 x 'a'",
            a(64),
            "014842d480b571495a4a0363793f7367",
            "0098ba824b5c16427bd7a1122a5a442a25ec644d",
        ),
        KnownAnswer::built(
            "65 x 'a'",
            a(65),
            "c743a45e0d2e6a95cb859adae0248435",
            "11655326c708d70319be2610e8a57d9a5b959d3b",
        ),
        KnownAnswer::built(
            "bytes 0..=255",
            MessageBuilder::new().counting(256),
            "e2c865db4162bed963bfaa9ef6ac18f0",
            "4916d6bdb7f78e6803698cab32d1586ea457dfc8",
        ),
    ]
}

/// One million 'a' bytes
pub const MILLION_A_MD5: &str = "7707d6ae4e027c70eea2a935c2296f21";
pub const MILLION_A_SHA1: &str = "34aa973cd4c4daa4f61eeb2bdbad27316534016f";

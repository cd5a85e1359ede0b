use crate::{Digest, Output};
use std::io::Write;
use utils::Block;

/// [RFC 1321](https://www.rfc-editor.org/rfc/rfc1321)的MD5消息摘要算法.
///
/// 注意: MD5已不具备抗碰撞性, 仅用于数据一致性校验和教学场景.
#[derive(Clone, Debug, PartialEq)]
pub struct MD5 {
    digest: [u32; Self::DIGEST_WSIZE],
    buf: Vec<u8>,
    len: usize,
    is_finalize: bool,
}

impl MD5 {
    const BLOCK_SIZE: usize = Self::BLOCK_BITS >> 3;
    const WORD_SIZE: usize = Self::WORD_BITS >> 3;
    const DIGEST_WSIZE: usize = Self::DIGEST_BITS / Self::WORD_BITS;
    const IV: [u32; Self::DIGEST_WSIZE] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

    // K[i] = floor(2^32 * abs(sin(i+1)))
    const K: [u32; 64] = [
        0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613,
        0xfd469501, 0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193,
        0xa679438e, 0x49b40821, 0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d,
        0x02441453, 0xd8a1e681, 0xe7d3fbc8, 0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
        0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a, 0xfffa3942, 0x8771f681, 0x6d9d6122,
        0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70, 0x289b7ec6, 0xeaa127fa,
        0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665, 0xf4292244,
        0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
        0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb,
        0xeb86d391,
    ];

    // 每轮循环左移的位数
    const S: [u32; 64] = [
        7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 5, 9, 14, 20, 5, 9, 14, 20, 5,
        9, 14, 20, 5, 9, 14, 20, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 6,
        10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
    ];

    pub fn new() -> MD5 {
        Self {
            digest: Self::IV,
            buf: Vec::with_capacity(Self::BLOCK_SIZE),
            len: 0,
            is_finalize: false,
        }
    }

    fn update<'a>(digest: &'a mut [u32; Self::DIGEST_WSIZE], data_block: &'a [u8]) -> &'a [u8] {
        let mut itr = data_block.chunks_exact(Self::BLOCK_SIZE);

        for chunk in &mut itr {
            let mut words = [0u32; 16];
            for (word, d) in words.iter_mut().zip(chunk.chunks_exact(Self::WORD_SIZE)) {
                *word = u32::from_le_bytes(Block::to_arr_uncheck(d));
            }

            let (mut a, mut b, mut c, mut d) = (digest[0], digest[1], digest[2], digest[3]);
            for (i, (&k, &s)) in Self::K.iter().zip(Self::S.iter()).enumerate() {
                let (f, m) = match i >> 4 {
                    0 => ((b & c) | (!b & d), i),
                    1 => ((b & d) | (c & !d), (5 * i + 1) & 15),
                    2 => (b ^ c ^ d, (3 * i + 5) & 15),
                    _ => (c ^ (b | !d), (7 * i) & 15),
                };

                let t = f
                    .wrapping_add(a)
                    .wrapping_add(k)
                    .wrapping_add(words[m])
                    .rotate_left(s);
                a = d;
                d = c;
                c = b;
                b = b.wrapping_add(t);
            }

            digest[0] = digest[0].wrapping_add(a);
            digest[1] = digest[1].wrapping_add(b);
            digest[2] = digest[2].wrapping_add(c);
            digest[3] = digest[3].wrapping_add(d);
        }

        itr.remainder()
    }
}

impl Default for MD5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MD5 {
    fn write(&mut self, mut data: &[u8]) -> std::io::Result<usize> {
        if self.is_finalize {
            self.reset();
        }

        let data_len = data.len();

        if !self.buf.is_empty() {
            let l = (Self::BLOCK_SIZE - self.buf.len()).min(data.len());
            self.buf.extend(&data[..l]);
            data = &data[l..];
        }

        if self.buf.len() == Self::BLOCK_SIZE {
            let _itr = Self::update(&mut self.digest, self.buf.as_slice());
            self.buf.clear();
        }

        let itr = Self::update(&mut self.digest, data);
        self.buf.extend(itr);

        self.len += data_len;
        Ok(data_len)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Digest for MD5 {
    const BLOCK_BITS: usize = 512;
    const WORD_BITS: usize = 32;
    const DIGEST_BITS: usize = 128;

    fn digest(msg: &[u8]) -> Output<Self> {
        let mut md5 = Self::default();
        md5.write_all(msg).unwrap();
        md5.finalize()
    }

    fn finalize(&mut self) -> Output<Self> {
        if self.is_finalize {
            return Output::from_vec(
                self.digest
                    .iter()
                    .flat_map(|x| x.to_le_bytes())
                    .collect::<Vec<_>>(),
            );
        }

        let mut tmp = [0u8; Self::BLOCK_SIZE];
        tmp[0] = 0x80;
        let len = self.len;

        if len % Self::BLOCK_SIZE < 56 {
            self.write_all(&tmp[0..(56 - (len % Self::BLOCK_SIZE))])
                .unwrap();
        } else {
            self.write_all(&tmp[0..(64 + 56 - (len % Self::BLOCK_SIZE))])
                .unwrap();
        }

        // 原消息位长度, 小端序, mod 2^64
        let len = (len as u64) << 3;
        self.write_all(len.to_le_bytes().as_ref()).unwrap();

        let v = self
            .digest
            .iter()
            .flat_map(|x| x.to_le_bytes())
            .collect::<Vec<_>>();

        self.is_finalize = true;
        Output::from_vec(v)
    }

    fn reset(&mut self) {
        self.is_finalize = false;
        self.len = 0;
        self.buf.clear();
        self.digest = Self::IV;
    }
}

#[cfg(test)]
mod tests {
    use crate::md5::MD5;
    use crate::Digest;
    use std::io::Write;

    // RFC 1321附录A.5的测试套件
    const CASES: [(&str, &str); 8] = [
        ("d41d8cd98f00b204e9800998ecf8427e", ""),
        ("0cc175b9c0f1b6a831c399e269772661", "a"),
        ("900150983cd24fb0d6963f7d28e17f72", "abc"),
        ("f96b697d7cb7938d525a2f31aaf161d0", "message digest"),
        ("c3fcd3d76192e4007dfb496cca67e13b", "abcdefghijklmnopqrstuvwxyz"),
        (
            "d174ab98d277d9f5a5611c2c9f419d9f",
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        ),
        (
            "57edf4a22be3c955ac49da2e2107b67a",
            "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        ),
        ("86fb269d190d2c85f6e0468ceca42a20", "Hello world!"),
    ];

    #[test]
    fn md5() {
        for (tgt, msg) in CASES {
            let digest = MD5::digest(msg.as_bytes());
            assert_eq!(format!("{:x}", digest), tgt, "case => {msg}");
        }
    }

    #[test]
    fn hex_form() {
        for (tgt, msg) in CASES {
            let digest = MD5::digest(msg.as_bytes());
            let hex = digest.to_hex();
            assert_eq!(hex.len(), 32);
            assert_eq!(hex, tgt);
            // 重复计算结果稳定
            assert_eq!(MD5::digest(msg.as_bytes()).to_hex(), hex);
        }
    }

    #[test]
    fn streaming_equivalence() {
        let msg = (0u16..1000).map(|x| (x % 251) as u8).collect::<Vec<_>>();
        let oneshot = MD5::digest(msg.as_slice()).to_vec();

        for chunk_size in [1usize, 3, 7, 63, 64, 65, 997] {
            let mut md5 = MD5::new();
            for chunk in msg.chunks(chunk_size) {
                md5.write_all(chunk).unwrap();
            }
            assert_eq!(
                md5.finalize().to_vec(),
                oneshot,
                "chunk size {} diverged",
                chunk_size
            );
        }
    }

    #[test]
    fn finalize_idempotent() {
        let mut md5 = MD5::new();
        md5.write_all(b"Hello world!").unwrap();
        let first = md5.finalize();
        let second = md5.finalize();
        assert_eq!(first, second);

        // finalize后再写入则从初始状态重新开始
        md5.write_all(b"abc").unwrap();
        assert_eq!(
            md5.finalize().to_hex(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn multi_block_message() {
        // 跨多个64字节块的消息
        let msg = "a".repeat(200);
        assert_eq!(
            MD5::digest(msg.as_bytes()).to_hex(),
            "887f30b43b2867f4a9accceee7d16e6c"
        );
    }
}

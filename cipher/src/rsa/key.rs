use crate::rsa::fill;
use crate::CipherError;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rand;
use std::fmt::{Display, Formatter};
use utils::BigUintExt;

/// RSA密钥的共同能力: 都持有指数和模数, 在同一个模幂运算上工作.
pub trait RsaKey {
    fn exponent(&self) -> &BigUint;
    fn modulus(&self) -> &BigUint;

    /// 模数的字节长度, 即填充后分组的字节长度
    fn byte_size(&self) -> usize {
        ((self.modulus().bits() as usize) + 7) >> 3
    }

    /// 教科书式RSA原语: `m^exp mod n`. `m >= n`时无法表示, 返回Overflow.
    fn crypt_int(&self, m: &BigUint) -> Result<BigUint, CipherError> {
        if m >= self.modulus() {
            return Err(CipherError::Overflow(format!(
                "rsa: integer of `{}` bits out of the range of the `{}`-bit modulus",
                m.bits(),
                self.modulus().bits()
            )));
        }

        Ok(m.modpow(self.exponent(), self.modulus()))
    }

    /// 填充后加密, 输出分组的字节长度等于`byte_size()`
    fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>, CipherError> {
        fill::encrypt(self, msg)
    }

    /// 解密后去除填充. 密钥不匹配, 密文损坏或填充不合法均返回`CipherError::Decrypt`.
    fn decrypt(&self, cipher: &[u8]) -> Result<Vec<u8>, CipherError> {
        fill::decrypt(self, cipher)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    e: BigUint,
    n: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    d: BigUint,
    n: BigUint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl PublicKey {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }
}

impl PrivateKey {
    pub fn new(d: BigUint, n: BigUint) -> Self {
        Self { d, n }
    }
}

impl RsaKey for PublicKey {
    fn exponent(&self) -> &BigUint {
        &self.e
    }

    fn modulus(&self) -> &BigUint {
        &self.n
    }
}

impl RsaKey for PrivateKey {
    fn exponent(&self) -> &BigUint {
        &self.d
    }

    fn modulus(&self) -> &BigUint {
        &self.n
    }
}

impl KeyPair {
    /// 模数小于该位长度时连空消息都无法填充
    pub const MIN_MODULUS_BITS: usize = 16;

    /// 生成模数位长度约为`bits_len`的密钥对.
    ///
    /// `p`和`q`各取`bits_len / 2`位且互不相等, `e`在`[1, phi)`中均匀抽取直到与
    /// `phi`互素, `d`为`e`模`phi`的逆元.
    pub fn generate<R: Rand>(
        bits_len: usize,
        test_rounds: usize,
        rng: &mut R,
    ) -> Result<KeyPair, CipherError> {
        if bits_len < Self::MIN_MODULUS_BITS {
            return Err(CipherError::KeyTooShort {
                bits: bits_len,
                min: Self::MIN_MODULUS_BITS,
            });
        }

        let half = bits_len >> 1;
        let p = BigUintExt::<BigUint>::generate_prime(half, test_rounds, rng)?;
        let q = loop {
            let q = BigUintExt::<BigUint>::generate_prime(half, test_rounds, rng)?;
            if q != p {
                break q;
            }
        };

        let n = &p * &q;
        let phi = (p - 1u32) * (q - 1u32);

        let e = loop {
            let e = BigUintExt(&phi).gen_random(rng);
            if !e.is_zero() && e.gcd(&phi).is_one() {
                break e;
            }
        };

        // e与phi互素, 逆元必定存在
        let d = BigUintExt(&e).modinv(&phi).expect("e is coprime to phi");

        Ok(KeyPair {
            public: PublicKey { e, n: n.clone() },
            private: PrivateKey { d, n },
        })
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn private(&self) -> &PrivateKey {
        &self.private
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{n={:#x}, e={:#x}}}", self.n, self.e))
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{n={:#x}, d={:#x}}}", self.n, self.d))
    }
}

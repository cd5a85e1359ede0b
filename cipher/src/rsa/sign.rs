use crate::rsa::RsaKey;
use crate::CipherError;
use crypto_hash::HashMethod;
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};

/// 签名: 哈希算法标识和私钥加密后的摘要.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    method: HashMethod,
    cipher: Vec<u8>,
}

/// 对`signable`读出的数据摘要后用`key`加密, 生成签名.
///
/// `key`应当是签名者的私钥. 摘要长度超出密钥分组容量时返回Overflow,
/// 此时需要更长的密钥.
pub fn sign<K: RsaKey + ?Sized, R: Read + ?Sized>(
    signable: &mut R,
    method: HashMethod,
    key: &K,
) -> Result<Signature, CipherError> {
    let d = digest(method, signable)?;
    let cipher = key.encrypt(d.as_slice())?;

    Ok(Signature { method, cipher })
}

impl Signature {
    pub fn new(method: HashMethod, cipher: Vec<u8>) -> Self {
        Self { method, cipher }
    }

    pub fn method(&self) -> HashMethod {
        self.method
    }

    pub fn cipher(&self) -> &[u8] {
        self.cipher.as_slice()
    }

    /// 用`key`解密签名并与`signable`重新计算的摘要比较.
    ///
    /// `key`应当是签名者的公钥. 解密失败或摘要不一致返回`Ok(false)`,
    /// 读取数据失败才返回错误.
    pub fn verify<K: RsaKey + ?Sized, R: Read + ?Sized>(
        &self,
        signable: &mut R,
        key: &K,
    ) -> Result<bool, CipherError> {
        let d = digest(self.method, signable)?;

        match key.decrypt(self.cipher.as_slice()) {
            Ok(expected) => Ok(expected == d),
            Err(CipherError::Decrypt) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}:", self.method))?;
        for x in self.cipher.iter() {
            f.write_fmt(format_args!("{:02x}", x))?;
        }
        Ok(())
    }
}

// 按哈希算法的块大小流式读取并更新摘要
fn digest<R: Read + ?Sized>(method: HashMethod, signable: &mut R) -> Result<Vec<u8>, CipherError> {
    let mut hasher = method.hasher();
    let mut buf = vec![0u8; method.block_size()];

    loop {
        let n = signable.read(buf.as_mut_slice())?;
        if n == 0 {
            break;
        }
        hasher.write_all(&buf[..n])?;
    }

    Ok(hasher.finish_x())
}

use crate::md5::MD5;
use crate::{Digest, DigestX, HashError};
use std::fmt::{Display, Formatter};

/// 本工具支持的哈希算法. 签名文档中以`name()`标识算法.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HashMethod {
    Md5,
}

impl HashMethod {
    pub const fn name(&self) -> &'static str {
        match self {
            HashMethod::Md5 => "MD5",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, HashError> {
        match name {
            "MD5" => Ok(HashMethod::Md5),
            _ => Err(HashError::UnknownMethod(name.to_string())),
        }
    }

    pub fn hasher(&self) -> Box<dyn DigestX> {
        match self {
            HashMethod::Md5 => Box::new(MD5::new()),
        }
    }

    /// 流式读取时的自然分块字节大小
    pub const fn block_size(&self) -> usize {
        match self {
            HashMethod::Md5 => MD5::BLOCK_BITS >> 3,
        }
    }

    /// 摘要的字节大小
    pub const fn digest_size(&self) -> usize {
        match self {
            HashMethod::Md5 => MD5::DIGEST_BITS >> 3,
        }
    }
}

impl Display for HashMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::HashMethod;
    use std::io::Write;

    #[test]
    fn method_names() {
        assert_eq!(HashMethod::Md5.name(), "MD5");
        assert_eq!(HashMethod::from_name("MD5").unwrap(), HashMethod::Md5);
        assert!(HashMethod::from_name("SHA-256").is_err());
        assert_eq!(HashMethod::Md5.block_size(), 64);
        assert_eq!(HashMethod::Md5.digest_size(), 16);
    }

    #[test]
    fn build_hasher() {
        let mut h = HashMethod::Md5.hasher();
        h.write_all(b"Hello world!").unwrap();
        assert_eq!(h.digest_bits_x(), 128);
        let d = h.finish_x();
        assert_eq!(d.len(), 16);
        assert_eq!(d[0], 0x86);
    }
}

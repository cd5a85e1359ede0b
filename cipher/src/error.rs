use std::{error::Error, fmt::Display};

#[derive(Clone, Debug)]
pub enum CipherError {
    /// 请求的模数位长度小于最小可用长度
    KeyTooShort { bits: usize, min: usize },

    /// 输入超出填充或模运算可表示的范围
    Overflow(String),

    /// 解密失败: 密钥不匹配或密文损坏. 为避免填充侧信道, 二者不作区分.
    Decrypt,

    /// 不合法的密钥参数
    InvalidKey(String),

    Io(String),
}

impl Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherError::KeyTooShort { bits, min } => f.write_fmt(format_args!(
                "rsa: requested modulus size `{bits}` bits is below the minimum of `{min}` bits"
            )),
            CipherError::Overflow(s) => f.write_str(s.as_str()),
            CipherError::Decrypt => f.write_str("rsa: cannot decrypt the cipher data"),
            CipherError::InvalidKey(s) => f.write_str(s.as_str()),
            CipherError::Io(s) => f.write_str(s.as_str()),
        }
    }
}

impl Error for CipherError {}

impl From<std::io::Error> for CipherError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<String> for CipherError {
    fn from(value: String) -> Self {
        Self::InvalidKey(value)
    }
}

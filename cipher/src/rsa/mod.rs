//! RSA公钥密码及其上的签名协议.
//!
//! 分组填充采用定长填充格式`0x00 || 0xFF...0xFF || 0x00 || M`, 填充后的分组
//! 字节长度等于模数的字节长度. 签名为先摘要后私钥加密.

mod key;
pub use key::{KeyPair, PrivateKey, PublicKey, RsaKey};

mod fill;

mod sign;
pub use sign::{sign, Signature};

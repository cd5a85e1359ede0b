//! 密钥和签名的文本文档格式.
//!
//! 两种文档都是单对象的JSON: 密钥文档以`rsa-key`为根, 签名文档以
//! `signature`为根. 整数字段以十进制字符串表示, 不受整数宽度限制.

pub mod key;
pub mod signature;

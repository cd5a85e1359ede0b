use std::{error::Error, fmt::Display};

#[derive(Clone, Debug)]
pub enum HashError {
    /// 不支持的哈希算法名
    UnknownMethod(String),
}

impl Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::UnknownMethod(name) => {
                f.write_fmt(format_args!("unknown hash method `{name}`"))
            }
        }
    }
}

impl Error for HashError {}

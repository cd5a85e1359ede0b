mod error;
pub use error::CipherError;

pub use rand::{ChaChaRand, DefaultRand, Rand};

pub mod rsa;

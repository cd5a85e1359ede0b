mod block;
pub use block::Block;

mod biguint_ext;
pub use biguint_ext::BigUintExt;

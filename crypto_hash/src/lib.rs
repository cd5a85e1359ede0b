use std::io::Write;

mod output;
pub use output::Output;

mod error;
pub use error::HashError;

mod method;
pub use method::HashMethod;

pub mod md5;

/// 哈希算法实现该trait, 计算消息的摘要. 可直接调用`Digest::digest(msg)`生成消息的摘要, 或者通过`Write` trait将数据更新
/// 到`self`中后使用`self.finalize()`生成消息摘要.
///
/// 流式更新的分块方式不影响摘要结果: 任意切分的`write`序列与一次性写入等价.
pub trait Digest: Write {
    /// 哈希算法每次按块处理消息的块的位长度
    const BLOCK_BITS: usize;
    /// 哈希算法将每个块按该位长度划分为若干个单词
    const WORD_BITS: usize;
    /// 哈希算法生成的摘要的位长度
    const DIGEST_BITS: usize;

    /// 生成消息摘要
    fn digest(msg: &[u8]) -> Output<Self>;

    /// 生成消息摘要
    fn finalize(&mut self) -> Output<Self>;

    /// 重置哈希算法到初始化状态
    fn reset(&mut self);
}

/// [`Digest`]的对象安全版本, 供需要在运行期选择哈希算法的调用者使用.
pub trait DigestX: Write {
    fn block_bits_x(&self) -> usize;
    fn word_bits_x(&self) -> usize;
    fn digest_bits_x(&self) -> usize;
    fn finish_x(&mut self) -> Vec<u8>;
    fn reset_x(&mut self);
}

impl<T> DigestX for T
where
    T: Digest,
{
    fn block_bits_x(&self) -> usize {
        <T as Digest>::BLOCK_BITS
    }

    fn word_bits_x(&self) -> usize {
        <T as Digest>::WORD_BITS
    }

    fn digest_bits_x(&self) -> usize {
        <T as Digest>::DIGEST_BITS
    }

    fn finish_x(&mut self) -> Vec<u8> {
        self.finalize().to_vec()
    }

    fn reset_x(&mut self) {
        self.reset()
    }
}

//! 密码学操作的随机源. 素数生成和公钥指数采样通过`Rand`注入随机数,
//! 生产环境使用[`DefaultRand`], 测试环境使用可重现的[`ChaChaRand`].

pub trait Rand: Default {
    fn rand(&mut self, random: &mut [u8]);
}

mod default_rand;
pub use default_rand::DefaultRand;

mod chacha_rand;
pub use chacha_rand::ChaChaRand;

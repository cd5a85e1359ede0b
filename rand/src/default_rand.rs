use crate::Rand;
use xrand::rngs::OsRng;
use xrand::RngCore;

/// 默认的随机源, 从操作系统的CSPRNG取随机数.
#[derive(Copy, Clone, Default)]
pub struct DefaultRand {
    rng: OsRng,
}

impl Rand for DefaultRand {
    fn rand(&mut self, random: &mut [u8]) {
        self.rng.fill_bytes(random);
    }
}

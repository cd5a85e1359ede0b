use crate::Rand;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 可重现的随机源, 给定相同的种子生成相同的字节序列. 用于测试.
#[derive(Clone)]
pub struct ChaChaRand {
    rng: ChaCha8Rng,
}

impl ChaChaRand {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for ChaChaRand {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

impl Rand for ChaChaRand {
    fn rand(&mut self, random: &mut [u8]) {
        self.rng.fill_bytes(random);
    }
}

#[cfg(test)]
mod tests {
    use super::ChaChaRand;
    use crate::Rand;

    #[test]
    fn same_seed_same_stream() {
        let (mut r1, mut r2) = (ChaChaRand::from_seed(57), ChaChaRand::from_seed(57));
        let (mut b1, mut b2) = ([0u8; 97], [0u8; 97]);
        r1.rand(&mut b1);
        r2.rand(&mut b2);
        assert_eq!(b1, b2);

        let mut r3 = ChaChaRand::from_seed(58);
        let mut b3 = [0u8; 97];
        r3.rand(&mut b3);
        assert_ne!(b1, b3);
    }
}

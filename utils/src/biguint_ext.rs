use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Euclid, One, Zero};
use rand::Rand;
use std::borrow::Borrow;
use std::ops::Deref;

/// 大整数的数论扩展: 素性检测, 素数生成, 模逆.
pub struct BigUintExt<T: Borrow<BigUint>>(pub T);

impl<T: Borrow<BigUint>> Deref for BigUintExt<T> {
    type Target = BigUint;
    fn deref(&self) -> &Self::Target {
        self.0.borrow()
    }
}

impl<T: Borrow<BigUint>> BigUintExt<T> {
    /// <<算法导论>>
    /// 定理31.23: 若有d=gcd(a, n), 假设对于某些整数x'和y', 有d=ax'+ny'. 如果d|b, 则方程
    /// ax=b(mod n)有一个解的值位x0, 则x0=x'(b/d) mod n;
    /// self * inv = 1 \mod modulus
    ///
    /// `gcd(self, modulus) != 1`或`modulus == 0`时无逆元, 返回None.
    pub fn modinv(&self, modulus: &BigUint) -> Option<BigUint> {
        if modulus.is_zero() {
            return None;
        }

        let (a, n) = (
            BigInt::from(self.deref() % modulus),
            BigInt::from(modulus.clone()),
        );
        let g = a.extended_gcd(&n);
        g.gcd.is_one().then_some(
            g.x.rem_euclid(&n)
                .to_biguint()
                .expect("this will always big uint"),
        )
    }

    // 生成[0..self)之间的随机数
    pub fn gen_random<R: Rand>(&self, rng: &mut R) -> BigUint {
        let bits = self.bits() as usize;
        let mut n = vec![0u8; (bits + 7) >> 3];

        loop {
            rng.rand(n.as_mut_slice());
            let r = BigUint::from_bytes_le(n.as_mut_slice());
            if self.deref() > &r {
                return r;
            }
        }
    }

    /// probability prime test by the Miller-Rabin Pseudoprimes Algorithm.
    ///
    /// `test_rounds`(t) means the number of test rounds, for any odd number that great than 2
    /// and positive integer t, the probability of error is at most $4^{-t}$.
    pub fn probably_prime<Rng: Rand>(&self, test_rounds: usize, rng: &mut Rng) -> bool {
        let n = self.deref();
        let (two, three) = (BigUint::from(2u8), BigUint::from(3u8));

        if n < &two {
            return false;
        } else if n == &two || n == &three {
            return true;
        } else if n.is_even() {
            return false;
        }

        // n - 1 = 2^r * s, s odd
        let n_m1 = n - 1u32;
        let r = n_m1.trailing_zeros().unwrap_or(0);
        let s = &n_m1 >> r;

        let bound = BigUintExt(n - 3u32);
        for _ in 0..test_rounds {
            // witness in [2, n-2]
            let a = bound.gen_random(rng) + 2u32;
            let mut x = a.modpow(&s, n);
            if x.is_one() || x == n_m1 {
                continue;
            }

            let mut pass = false;
            for _ in 1..r {
                x = (&x * &x) % n;
                if x == n_m1 {
                    pass = true;
                    break;
                }
            }

            if !pass {
                return false;
            }
        }

        true
    }

    /// generate a number p with the bits length of `bits_len`, such that p is prime
    /// with high probability that is related to the number of `test_rounds`.
    ///
    /// 候选数强制设置最高位和最低位, 保证精确的位长度和奇数, 反复采样直到通过素性检测.
    pub fn generate_prime<Rng: Rand>(
        bits_len: usize,
        test_rounds: usize,
        rng: &mut Rng,
    ) -> Result<BigUint, String> {
        if bits_len < 2 {
            return Err("prime size must at least 2-bits".to_string());
        }

        let (mut p, b) = (
            vec![0u8; (bits_len + 7) >> 3],
            if (bits_len & 7) == 0 { 8 } else { bits_len & 7 },
        );

        loop {
            rng.rand(p.as_mut_slice());

            // 清除大于bits_len的位, 设置最高位保证位长度精确
            if let Some(x) = p.last_mut() {
                if b != 8 {
                    *x &= (1u8 << b) - 1;
                }
                *x |= 1 << (b - 1);
            }

            // 奇数
            if let Some(x) = p.first_mut() {
                *x |= 1;
            }

            let n = BigUintExt(BigUint::from_bytes_le(p.as_slice()));
            if n.probably_prime(test_rounds, rng) {
                return Ok(n.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BigUintExt;
    use num_bigint::BigUint;
    use num_traits::Num;
    use rand::ChaChaRand;

    #[test]
    fn prime_validate() {
        let cases = [
            "2",
            "3",
            "5",
            "7",
            "11",
            "13756265695458089029",
            "13496181268022124907",
            "10953742525620032441",
            "17908251027575790097",
            // https://golang.org/issue/638
            "18699199384836356663",
            "98920366548084643601728869055592650835572950932266967461790948584315647051443",
            "94560208308847015747498523884063394671606671904944666360068158221458669711639",
            // https://primes.utm.edu/lists/small/small3.html
            "449417999055441493994709297093108513015373787049558499205492347871729927573118262811508386655998299074566974373711472560655026288668094291699357843464363003144674940345912431129144354948751003607115263071543163",
        ];

        let mut rng = ChaChaRand::from_seed(1);
        for s in cases {
            let prime = BigUint::from_str_radix(s, 10).expect("convert string to big uint failed");
            for rounds in [1usize, 7, 40] {
                assert!(
                    BigUintExt(&prime).probably_prime(rounds, &mut rng),
                    "prime `{}` test failed with {} rounds",
                    s,
                    rounds
                );
            }
        }
    }

    #[test]
    fn composite_validate() {
        let cases = [
            "0",
            "1",
            "4",
            "9",
            "561",  // Carmichael
            "1105", // Carmichael
            "1729", // Carmichael
            "21284175091214687912771199898307297748211672914763848041968395774954376176754",
            "6084766654921918907427900243509372380954290099172559290432744450051395395951",
            "84594350493221918389213352992032324280367711247940675652888030554255915464401",
            "82793403787388584738507275144194252681",
            // Arnault, "Rabin-Miller Primality Test: Composite Numbers Which Pass It",
            // strong pseudoprime to prime bases 2 through 29
            "1195068768795265792518361315725116351898245581",
        ];

        let mut rng = ChaChaRand::from_seed(2);
        for s in cases {
            let composite =
                BigUint::from_str_radix(s, 10).expect("convert string to big uint failed");
            assert!(
                !BigUintExt(&composite).probably_prime(40, &mut rng),
                "composite `{}` test failed",
                s
            );
        }
    }

    #[test]
    fn small_primes_below_1000() {
        fn is_prime(n: u32) -> bool {
            if n < 2 {
                return false;
            }
            let mut d = 2;
            while d * d <= n {
                if n % d == 0 {
                    return false;
                }
                d += 1;
            }
            true
        }

        let mut rng = ChaChaRand::from_seed(3);
        for n in 0u32..1000 {
            let big = BigUint::from(n);
            assert_eq!(
                BigUintExt(&big).probably_prime(10, &mut rng),
                is_prime(n),
                "mismatch for {}",
                n
            );
        }
    }

    #[test]
    fn gen_prime_exact_bits() {
        let mut rng = ChaChaRand::from_seed(4);
        for bits_len in (2usize..18).chain([32, 64]) {
            let p = BigUintExt::<BigUint>::generate_prime(bits_len, 19, &mut rng).unwrap();
            assert_eq!(p.bits() as usize, bits_len);
            assert!(BigUintExt(p).probably_prime(31, &mut rng));
        }

        assert!(BigUintExt::<BigUint>::generate_prime(1, 19, &mut rng).is_err());
    }

    #[test]
    fn modinv_contract() {
        let cases = [(3u32, 7u32), (5, 17), (65537, 1000003), (2, 9), (10, 21)];
        for (a, n) in cases {
            let (a, n) = (BigUint::from(a), BigUint::from(n));
            let t = BigUintExt(&a).modinv(&n).unwrap();
            assert!(t < n);
            assert_eq!((a * t) % n, BigUint::from(1u8));
        }

        // no inverse when gcd(a, n) != 1
        let (a, n) = (BigUint::from(6u32), BigUint::from(9u32));
        assert!(BigUintExt(&a).modinv(&n).is_none());

        // modulus zero
        let zero = BigUint::from(0u32);
        assert!(BigUintExt(&a).modinv(&zero).is_none());
    }
}

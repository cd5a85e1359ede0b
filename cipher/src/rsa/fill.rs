use crate::rsa::RsaKey;
use crate::CipherError;
use num_bigint::BigUint;

/// 填充格式`0x00 || 0xFF...0xFF || 0x00 || M`至少占用的字节数, 其中0xFF至少1个
pub(super) const MIN_PAD_LEN: usize = 3;

pub(super) fn encrypt<K: RsaKey + ?Sized>(key: &K, msg: &[u8]) -> Result<Vec<u8>, CipherError> {
    let klen = key.byte_size();
    if msg.len() + MIN_PAD_LEN > klen {
        return Err(CipherError::Overflow(format!(
            "rsa: message of `{}` bytes does not fit in a `{}`-byte block with `{}` bytes of padding",
            msg.len(),
            klen,
            MIN_PAD_LEN,
        )));
    }

    let mut em = vec![0xffu8; klen];
    let idx = klen - msg.len();
    em[0] = 0;
    em[idx - 1] = 0;
    em[idx..].copy_from_slice(msg);

    let c = key.crypt_int(&BigUint::from_bytes_be(em.as_slice()))?;
    Ok(to_be_block(&c, klen))
}

pub(super) fn decrypt<K: RsaKey + ?Sized>(key: &K, cipher: &[u8]) -> Result<Vec<u8>, CipherError> {
    let m = key
        .crypt_int(&BigUint::from_bytes_be(cipher))
        .map_err(|_| CipherError::Decrypt)?;

    let em = to_be_block(&m, key.byte_size());
    unpad(em.as_slice())
        .map(|msg| msg.to_vec())
        .ok_or(CipherError::Decrypt)
}

// 定长大端序编码, 高位补零
fn to_be_block(x: &BigUint, len: usize) -> Vec<u8> {
    let b = x.to_bytes_be();
    let mut v = vec![0u8; len];
    v[(len - b.len())..].copy_from_slice(b.as_slice());
    v
}

// 填充区必须全部为0xFF, 首个0x00之后是消息; 混入其它字节的分组视为非法
fn unpad(em: &[u8]) -> Option<&[u8]> {
    if em.len() < MIN_PAD_LEN || em[0] != 0 || em[1] != 0xff {
        return None;
    }

    for (i, &x) in em.iter().enumerate().skip(2) {
        match x {
            0x00 => return Some(&em[(i + 1)..]),
            0xff => continue,
            _ => return None,
        }
    }

    None
}

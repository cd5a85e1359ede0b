use crate::error::SealError;
use cipher::rsa::{PrivateKey, PublicKey, RsaKey};
use num_bigint::BigUint;
use num_traits::{Num, Zero};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct KeyDoc {
    #[serde(rename = "rsa-key")]
    rsa_key: KeyBody,
}

#[derive(Serialize, Deserialize)]
struct KeyBody {
    #[serde(rename = "type")]
    ty: String,
    exp: String,
    #[serde(rename = "mod")]
    modulus: String,
}

/// 从密钥文档中加载出的密钥, 公钥或私钥由文档的`type`字段决定.
///
/// 加载只做结构检查: `exp`和`mod`必须是正的十进制整数. 数学上的
/// 有效性(模数为两素数之积等)不做验证.
pub enum KeyDocument {
    Public(PublicKey),
    Private(PrivateKey),
}

impl KeyDocument {
    pub fn from_json(s: &str) -> Result<Self, SealError> {
        let doc: KeyDoc = serde_json::from_str(s)
            .map_err(|e| SealError::KeyFormat(format!("malformed key document, {e}")))?;

        let exp = parse_int("exp", doc.rsa_key.exp.as_str())?;
        let modulus = parse_int("mod", doc.rsa_key.modulus.as_str())?;

        match doc.rsa_key.ty.as_str() {
            "public" => Ok(Self::Public(PublicKey::new(exp, modulus))),
            "private" => Ok(Self::Private(PrivateKey::new(exp, modulus))),
            t => Err(SealError::KeyFormat(format!("unknown key type `{t}`"))),
        }
    }

    pub fn as_key(&self) -> &dyn RsaKey {
        match self {
            Self::Public(k) => k,
            Self::Private(k) => k,
        }
    }
}

pub fn public_to_json(key: &PublicKey) -> Result<String, SealError> {
    to_json("public", key)
}

pub fn private_to_json(key: &PrivateKey) -> Result<String, SealError> {
    to_json("private", key)
}

fn to_json<K: RsaKey>(ty: &str, key: &K) -> Result<String, SealError> {
    let doc = KeyDoc {
        rsa_key: KeyBody {
            ty: ty.to_string(),
            exp: key.exponent().to_str_radix(10),
            modulus: key.modulus().to_str_radix(10),
        },
    };

    serde_json::to_string_pretty(&doc).map_err(|e| SealError::KeyFormat(e.to_string()))
}

fn parse_int(field: &str, s: &str) -> Result<BigUint, SealError> {
    let x = BigUint::from_str_radix(s, 10).map_err(|_| {
        SealError::KeyFormat(format!("`{field}` is not a decimal integer: `{s}`"))
    })?;

    if x.is_zero() {
        return Err(SealError::KeyFormat(format!("`{field}` must be positive")));
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::{private_to_json, public_to_json, KeyDocument};
    use cipher::rsa::{KeyPair, RsaKey};
    use cipher::ChaChaRand;

    fn key_pair() -> KeyPair {
        let mut rng = ChaChaRand::from_seed(41);
        KeyPair::generate(128, 19, &mut rng).unwrap()
    }

    #[test]
    fn document_roundtrip() {
        let pair = key_pair();

        let doc = public_to_json(pair.public()).unwrap();
        match KeyDocument::from_json(doc.as_str()).unwrap() {
            KeyDocument::Public(k) => assert_eq!(&k, pair.public()),
            KeyDocument::Private(_) => panic!("expected a public key"),
        }

        let doc = private_to_json(pair.private()).unwrap();
        match KeyDocument::from_json(doc.as_str()).unwrap() {
            KeyDocument::Private(k) => assert_eq!(&k, pair.private()),
            KeyDocument::Public(_) => panic!("expected a private key"),
        }
    }

    #[test]
    fn rejects_malformed_documents() {
        let cases = [
            // 非JSON
            "exp = 3",
            // 根对象名错误
            r#"{"key": {"type": "public", "exp": "3", "mod": "15"}}"#,
            // 未知的type
            r#"{"rsa-key": {"type": "secret", "exp": "3", "mod": "15"}}"#,
            // exp非整数
            r#"{"rsa-key": {"type": "public", "exp": "0x11", "mod": "15"}}"#,
            r#"{"rsa-key": {"type": "public", "exp": "-3", "mod": "15"}}"#,
            // 零值
            r#"{"rsa-key": {"type": "public", "exp": "3", "mod": "0"}}"#,
            // 缺少字段
            r#"{"rsa-key": {"type": "public", "exp": "3"}}"#,
        ];

        for s in cases {
            assert!(KeyDocument::from_json(s).is_err(), "case => {s}");
        }
    }

    #[test]
    fn loaded_key_usable() {
        let pair = key_pair();
        let pk = KeyDocument::from_json(public_to_json(pair.public()).unwrap().as_str()).unwrap();
        let sk = KeyDocument::from_json(private_to_json(pair.private()).unwrap().as_str()).unwrap();

        let cipher = pk.as_key().encrypt(b"msg").unwrap();
        assert_eq!(sk.as_key().decrypt(cipher.as_slice()).unwrap(), b"msg");
    }
}

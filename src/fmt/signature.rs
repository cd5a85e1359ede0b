use crate::error::SealError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cipher::rsa::Signature;
use crypto_hash::HashMethod;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct SigDoc {
    signature: SigBody,
}

#[derive(Serialize, Deserialize)]
struct SigBody {
    #[serde(rename = "hash-method")]
    hash_method: String,
    #[serde(rename = "hash-cipher")]
    hash_cipher: String,
}

pub fn to_json(sig: &Signature) -> Result<String, SealError> {
    let doc = SigDoc {
        signature: SigBody {
            hash_method: sig.method().name().to_string(),
            hash_cipher: STANDARD.encode(sig.cipher()),
        },
    };

    serde_json::to_string_pretty(&doc).map_err(|e| SealError::SignatureFormat(e.to_string()))
}

pub fn from_json(s: &str) -> Result<Signature, SealError> {
    let doc: SigDoc = serde_json::from_str(s)
        .map_err(|e| SealError::SignatureFormat(format!("malformed signature document, {e}")))?;

    let method = HashMethod::from_name(doc.signature.hash_method.as_str())
        .map_err(|e| SealError::SignatureFormat(e.to_string()))?;
    let cipher = STANDARD
        .decode(doc.signature.hash_cipher.as_bytes())
        .map_err(|e| SealError::SignatureFormat(format!("`hash-cipher` is not valid base64, {e}")))?;

    Ok(Signature::new(method, cipher))
}

// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{Error, Result};

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::der::pem;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

/// RSA key material held by a codec.
///
/// A `KeyPair` can both encrypt and decrypt. A `PublicOnly` key can only
/// encrypt; there is no private exponent to decrypt with. The private half is
/// zeroized on drop by [`RsaPrivateKey`].
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub enum KeyMaterial {
    PublicOnly(RsaPublicKey),
    KeyPair(RsaPrivateKey),
}

impl KeyMaterial {
    /// Parse a PEM-wrapped RSA private key.
    ///
    /// The body may be PKCS#1 (`RSA PRIVATE KEY`) or PKCS#8 (`PRIVATE KEY`).
    /// The label on the armor lines is not interpreted, only the DER body.
    pub fn from_private_pem<P: AsRef<[u8]>>(text: P) -> Result<Self> {
        let der = decode_armor(text.as_ref())?;

        let key = match RsaPrivateKey::from_pkcs1_der(&der) {
            Ok(key) => key,
            Err(pkcs1_err) => RsaPrivateKey::from_pkcs8_der(&der).map_err(|pkcs8_err| {
                Error::KeyParse(format!(
                    "not a PKCS#1 ({pkcs1_err}) or PKCS#8 ({pkcs8_err}) private key"
                ))
            })?,
        };

        Ok(Self::KeyPair(key))
    }

    /// Parse a PEM-wrapped RSA public key.
    ///
    /// The body may be a SubjectPublicKeyInfo (`PUBLIC KEY`) or a bare PKCS#1
    /// structure (`RSA PUBLIC KEY`).
    pub fn from_public_pem<P: AsRef<[u8]>>(text: P) -> Result<Self> {
        let der = decode_armor(text.as_ref())?;

        let key = match RsaPublicKey::from_public_key_der(&der) {
            Ok(key) => key,
            Err(spki_err) => RsaPublicKey::from_pkcs1_der(&der).map_err(|pkcs1_err| {
                Error::KeyParse(format!(
                    "not a SubjectPublicKeyInfo ({spki_err}) or PKCS#1 ({pkcs1_err}) public key"
                ))
            })?,
        };

        Ok(Self::PublicOnly(key))
    }

    /// Byte length of the modulus.
    #[inline]
    pub fn key_size(&self) -> usize {
        self.public_key().size()
    }

    /// Bit length of the modulus.
    #[inline]
    pub fn bits(&self) -> usize {
        self.public_key().n().bits()
    }

    /// Return the public half, available for both variants.
    pub fn public_key(&self) -> &RsaPublicKey {
        match self {
            Self::PublicOnly(key) => key,
            Self::KeyPair(key) => key.as_ref(),
        }
    }

    /// Return the private half, if this is a key pair.
    pub fn private_key(&self) -> Option<&RsaPrivateKey> {
        match self {
            Self::PublicOnly(_) => None,
            Self::KeyPair(key) => Some(key),
        }
    }

    #[inline]
    pub fn is_key_pair(&self) -> bool {
        matches!(self, Self::KeyPair(_))
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::PublicOnly(_) => "public-only",
            Self::KeyPair(_) => "key-pair",
        }
    }
}

/// Strip the PEM armor and return the DER body, whatever the label says.
fn decode_armor(text: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let (_label, der) =
        pem::decode_vec(text).map_err(|err| Error::KeyParse(format!("invalid PEM: {err}")))?;
    Ok(Zeroizing::new(der))
}

#[cfg(not(feature = "expose-secret"))]
impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("kind", &self.kind())
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}

impl From<RsaPrivateKey> for KeyMaterial {
    fn from(key: RsaPrivateKey) -> Self {
        Self::KeyPair(key)
    }
}

impl From<RsaPublicKey> for KeyMaterial {
    fn from(key: RsaPublicKey) -> Self {
        Self::PublicOnly(key)
    }
}

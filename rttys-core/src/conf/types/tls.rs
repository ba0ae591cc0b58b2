use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsIdentity {
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl TlsIdentity {
    /// Both halves must be set for an identity to be usable.
    pub fn from_paths(cert: &str, key: &str) -> Option<Self> {
        if cert.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self {
            cert: PathBuf::from(cert),
            key: PathBuf::from(key),
        })
    }
}

/// The path-bearing fields checked before startup, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TlsField {
    SslCacert,
    SslCert,
    SslKey,
    WebuiSslCert,
    WebuiSslKey,
}

impl TlsField {
    pub const ALL: [TlsField; 5] = [
        TlsField::SslCacert,
        TlsField::SslCert,
        TlsField::SslKey,
        TlsField::WebuiSslCert,
        TlsField::WebuiSslKey,
    ];

    /// Flag / YAML key naming this field.
    pub fn key(self) -> &'static str {
        match self {
            TlsField::SslCacert => "ssl-cacert",
            TlsField::SslCert => "ssl-cert",
            TlsField::SslKey => "ssl-key",
            TlsField::WebuiSslCert => "webui-ssl-cert",
            TlsField::WebuiSslKey => "webui-ssl-key",
        }
    }
}

impl fmt::Display for TlsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

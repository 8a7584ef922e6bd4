use sha2::Digest;

/// Lowercase hex SHA-256 of the raw input, recorded on every report.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

use xxhash_rust::xxh3::Xxh3;

/// Streams every chunk into one xxh3-128 digest, rendered as lowercase hex.
pub fn xxhash_hex<I, B>(chunks: I) -> String
where
  I: IntoIterator<Item = B>,
  B: AsRef<[u8]>,
{
  let mut hasher = Xxh3::new();
  for chunk in chunks {
    hasher.update(chunk.as_ref());
  }
  format!("{:032x}", hasher.digest128())
}

#[cfg(test)]
mod tests {
  use super::xxhash_hex;

  #[test]
  fn digest_is_stable_and_chunking_independent() {
    let whole = xxhash_hex([b"package".as_slice(), b".json"]);
    let split = xxhash_hex([b"packag".as_slice(), b"e.json"]);
    assert_eq!(whole, split);
    assert_eq!(whole.len(), 32);
  }

  #[test]
  fn different_content_changes_the_digest() {
    assert_ne!(xxhash_hex([b"a"]), xxhash_hex([b"b"]));
  }
}

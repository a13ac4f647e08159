use std::fmt;
use std::ops::{Deref, DerefMut};

/// Aggregate error for a whole pipeline run. Validation collects every
/// problem it finds before failing, so a single run can report all missing
/// fields instead of the first one.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn msg<M: fmt::Display>(message: M) -> Self {
    Self(vec![anyhow::anyhow!(message.to_string())])
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns `Ok(value)` when no errors were collected.
  pub fn into_result<T>(self, value: T) -> BuildResult<T> {
    if self.is_empty() {
      Ok(value)
    } else {
      Err(self)
    }
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl FromIterator<anyhow::Error> for BuildError {
  fn from_iter<I: IntoIterator<Item = anyhow::Error>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn collects_every_error() {
    let error: BuildError =
      ["OUT_DIR is required", "VERSION is required"].iter().map(|m| anyhow::anyhow!(*m)).collect();
    assert_eq!(error.len(), 2);
    assert_eq!(error.to_string(), "OUT_DIR is required\nVERSION is required");
  }

  #[test]
  fn empty_error_set_resolves_to_ok() {
    let errors = BuildError(vec![]);
    assert_eq!(errors.into_result(7).unwrap(), 7);
  }
}

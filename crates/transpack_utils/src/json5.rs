//! JSON5 parsing on top of the plain JSON parser: the input is normalized
//! to strict JSON in one pass plus two regex passes, then handed to
//! `serde_json`. Handles line comments, block comments, single-quoted
//! strings, unquoted object keys and trailing commas.

use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;

// An unquoted key after `{` or `,`, e.g. `{version: "1.0"}`.
static KEY_AFTER_BRACE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"([\{,]\s*)([A-Za-z_$][A-Za-z0-9_$]*)\s*:"#).unwrap()
});

// An unquoted key at the start of a line.
static KEY_AT_LINE_START: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?m)^(\s*)([A-Za-z_$][A-Za-z0-9_$]*)\s*:"#).unwrap()
});

static TRAILING_COMMA: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#",(\s*[}\]])"#).unwrap());

pub fn parse_json5(content: &str) -> anyhow::Result<serde_json::Value> {
  let mut normalized = normalize(content);
  normalized = KEY_AFTER_BRACE.replace_all(&normalized, "${1}\"${2}\":").into_owned();
  normalized = KEY_AT_LINE_START.replace_all(&normalized, "${1}\"${2}\":").into_owned();
  normalized = TRAILING_COMMA.replace_all(&normalized, "${1}").into_owned();

  serde_json::from_str(&normalized).context("invalid JSON5 content")
}

/// Strips comments and rewrites single-quoted strings to double-quoted
/// ones, leaving everything inside double-quoted strings untouched.
fn normalize(content: &str) -> String {
  let chars: Vec<char> = content.chars().collect();
  let mut result = String::with_capacity(content.len());
  let mut i = 0;

  while i < chars.len() {
    let char = chars[i];

    // Double-quoted string: copy verbatim, including escapes.
    if char == '"' {
      result.push(char);
      i += 1;
      while i < chars.len() {
        let char = chars[i];
        result.push(char);
        if char == '\\' && i + 1 < chars.len() {
          i += 1;
          result.push(chars[i]);
          i += 1;
        } else if char == '"' {
          i += 1;
          break;
        } else {
          i += 1;
        }
      }
      continue;
    }

    // Single-quoted string: convert the delimiters, re-escape as needed.
    if char == '\'' {
      result.push('"');
      i += 1;
      while i < chars.len() {
        let char = chars[i];
        if char == '\\' && i + 1 < chars.len() {
          if chars[i + 1] == '\'' {
            // No escape needed once the string is double-quoted.
            result.push('\'');
            i += 2;
          } else {
            result.push(char);
            i += 1;
            result.push(chars[i]);
            i += 1;
          }
        } else if char == '\'' {
          result.push('"');
          i += 1;
          break;
        } else if char == '"' {
          result.push_str("\\\"");
          i += 1;
        } else {
          result.push(char);
          i += 1;
        }
      }
      continue;
    }

    // Block comment: drop it, keeping newlines so error positions in the
    // stripped text still line up with the input.
    if char == '/' && chars.get(i + 1) == Some(&'*') {
      match chars[i + 2..].windows(2).position(|pair| pair == ['*', '/']) {
        Some(offset) => {
          let newlines = chars[i..i + 2 + offset + 2].iter().filter(|&&c| c == '\n').count();
          result.extend(std::iter::repeat('\n').take(newlines));
          i += 2 + offset + 2;
        }
        None => i = chars.len(),
      }
      continue;
    }

    // Line comment, unless the slashes belong to a URL like `https://`.
    if char == '/' && chars.get(i + 1) == Some(&'/') {
      if i > 0 && chars[i - 1] == ':' {
        result.push(char);
        i += 1;
      } else {
        while i < chars.len() && chars[i] != '\n' {
          i += 1;
        }
        if i < chars.len() {
          result.push('\n');
          i += 1;
        }
      }
      continue;
    }

    result.push(char);
    i += 1;
  }

  result
}

/// Joins a static base URL with a relative path, the way browsers resolve
/// references: an absolute URL replaces the base, an absolute path keeps
/// only the base's origin, a relative path replaces the last segment.
pub fn join_url(base: &str, path: &str) -> String {
  if has_scheme(path) {
    return path.to_string();
  }

  if let Some(rest) = path.strip_prefix('/') {
    return format!("{}/{rest}", origin(base));
  }

  match base.rfind('/') {
    Some(index) => format!("{}{path}", &base[..=index]),
    None => path.to_string(),
  }
}

fn has_scheme(url: &str) -> bool {
  let Some(colon) = url.find(':') else {
    return false;
  };
  let scheme = &url[..colon];
  !scheme.is_empty()
    && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
    && scheme.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// `https://host` for full URLs, the empty string for path-only bases.
fn origin(base: &str) -> &str {
  if !has_scheme(base) {
    return "";
  }
  let Some(authority) = base.find("://").map(|index| index + 3) else {
    return "";
  };
  match base[authority..].find('/') {
    Some(path_start) => &base[..authority + path_start],
    None => base,
  }
}

#[cfg(test)]
mod tests {
  use super::join_url;

  #[test]
  fn relative_paths_extend_the_base() {
    assert_eq!(join_url("/static/", "js/"), "/static/js/");
    assert_eq!(join_url("/static/", "js/transpile/editor.js"), "/static/js/transpile/editor.js");
    assert_eq!(join_url("https://cdn.example.com/static/", "js/"), "https://cdn.example.com/static/js/");
  }

  #[test]
  fn relative_paths_replace_the_last_segment() {
    assert_eq!(join_url("/static/base.css", "other.css"), "/static/other.css");
  }

  #[test]
  fn absolute_paths_keep_only_the_origin() {
    assert_eq!(join_url("/static/", "/media/file.js"), "/media/file.js");
    assert_eq!(join_url("https://cdn.example.com/static/", "/media/x.js"), "https://cdn.example.com/media/x.js");
  }

  #[test]
  fn absolute_urls_win() {
    assert_eq!(join_url("/static/", "https://other.example.com/a.js"), "https://other.example.com/a.js");
  }
}

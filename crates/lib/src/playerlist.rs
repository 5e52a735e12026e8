//! Newline-delimited player id lists (`adminlist.txt`, `whitelist.txt`, `blocklist.txt`).

/// Split a list into ids. Blank lines and surrounding whitespace are dropped.
pub fn parse(content: &str) -> Vec<String> {
  content
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(String::from)
    .collect()
}

/// Join ids back into list form, one per line.
pub fn render<S: AsRef<str>>(ids: &[S]) -> String {
  let mut out = String::new();
  for id in ids {
    out.push_str(id.as_ref());
    out.push('\n');
  }
  out
}

use std::fmt::Write;

/// Minimal indented-source builder for the generated configuration file.
/// The bundler config is a JavaScript module, not JSON: it carries regex
/// literals and `new` expressions, so it is written out line by line.
pub struct JsWriter {
  out: String,
  indent: usize,
}

impl JsWriter {
  const INDENT: &'static str = "    ";

  pub fn new() -> Self {
    Self { out: String::new(), indent: 0 }
  }

  pub fn blank(&mut self) {
    self.out.push('\n');
  }

  pub fn line(&mut self, text: &str) {
    for _ in 0..self.indent {
      self.out.push_str(Self::INDENT);
    }
    let _ = writeln!(self.out, "{text}");
  }

  pub fn open(&mut self, text: &str) {
    self.line(text);
    self.indent += 1;
  }

  pub fn close(&mut self, text: &str) {
    self.indent = self.indent.saturating_sub(1);
    self.line(text);
  }

  pub fn finish(self) -> String {
    self.out
  }
}

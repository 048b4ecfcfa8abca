//! Line-pairing scanner over raw VCS text
//!
//! ChangeLog entries wrap long records onto a second physical line, so a
//! contributor name can land on the line after the bug or language
//! reference. The scanner therefore yields overlapping candidates: each item
//! spans from the start of one physical line through the end of the *next*
//! one (when there is a next one), while the cursor advances a single line
//! at a time. Classifiers see every line together with its lookahead without
//! the lookahead being consumed for its own turn.

/// Iterator over overlapping two-line candidates of a text blob
pub struct LinePairs<'a> {
  text: &'a str,
  pos: usize,
  done: bool,
}

impl<'a> LinePairs<'a> {
  pub fn new(text: &'a str) -> Self {
    Self {
      text,
      pos: 0,
      done: false,
    }
  }
}

impl<'a> Iterator for LinePairs<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    if self.done || self.pos >= self.text.len() {
      return None;
    }

    let start = self.pos;

    // An unterminated trailing fragment ends the scan.
    let Some(first) = self.text[start..].find('\n') else {
      self.done = true;
      return None;
    };
    let first_end = start + first;
    let next_start = first_end + 1;

    // Re-slice through the following terminator when one exists, so the
    // candidate carries its lookahead line.
    let line = match self.text[next_start..].find('\n') {
      Some(second) => &self.text[start..next_start + second],
      None => &self.text[start..first_end],
    };

    self.pos = next_start;

    if line.is_empty() {
      self.done = true;
      return None;
    }

    Some(line)
  }
}

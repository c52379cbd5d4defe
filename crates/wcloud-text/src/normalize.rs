#![forbid(unsafe_code)]

//! Text normalization: lowercase, punctuation stripping, whitespace folding.
//!
//! The pipeline is:
//!
//! 1. Lowercase (Unicode).
//! 2. Replace each character of [`PUNCTUATION`] with a space.
//! 3. Collapse runs of two or more whitespace characters into a single
//!    space and trim both ends.
//! 4. Split on `' '`, dropping empty tokens.
//!
//! A lone whitespace character other than `' '` (a single `\n` or `\t`)
//! is not a separator and stays inside its token. Apostrophes and hyphens
//! are not punctuation here, so `isn't` and `well-known` stay whole.

/// Characters replaced by a space before tokenizing.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '~', '(',
    ')', '"',
];

/// Whether `c` is one of the stripped punctuation characters.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Apply steps 1–3 and return the normalized string.
///
/// The result has no leading or trailing whitespace and no two adjacent
/// whitespace characters.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut run: Option<char> = None;
    let mut run_len = 0usize;
    for c in lowered.chars() {
        let c = if is_punctuation(c) { ' ' } else { c };
        if c.is_whitespace() {
            if run.is_none() {
                run = Some(c);
            }
            run_len += 1;
            continue;
        }
        flush_run(&mut out, run.take(), run_len);
        run_len = 0;
        out.push(c);
    }
    flush_run(&mut out, run, run_len);
    out.trim().to_owned()
}

/// Push a pending whitespace run: itself when it is one character, one
/// space otherwise.
fn flush_run(out: &mut String, first: Option<char>, len: usize) {
    match (first, len) {
        (Some(c), 1) => out.push(c),
        (Some(_), _) => out.push(' '),
        (None, _) => {}
    }
}

/// Apply the full pipeline (steps 1–4) and return owned tokens.
pub fn normalize_tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

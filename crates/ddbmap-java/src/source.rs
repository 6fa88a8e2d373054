mod scan;

use anyhow::{bail, Context, Result};
use ddbmap_core::Field;
use std::ops::Range;

/// Modifiers that may precede a member declaration.
const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "transient",
    "volatile",
    "synchronized",
    "abstract",
    "native",
    "strictfp",
];

/// A rendered method ready for splicing, tagged with the name used for
/// replace-or-append matching.
#[derive(Debug, Clone)]
pub struct RenderedMethod {
    pub name: String,
    pub text: String,
}

/// A Java source file, with enough structure recovered to collect
/// candidate fields and splice generated methods into the class body.
///
/// This is deliberately not a full parser: it tracks braces, comments,
/// and literals well enough to find the top-level class, its member
/// declarations, and method spans.
#[derive(Debug, Clone)]
pub struct JavaSource {
    /// Full source text
    text: String,

    /// Masked copy used for structural scanning (comment bodies and
    /// literal contents blanked, byte offsets preserved)
    masked: String,

    /// Name of the top-level class
    class_name: String,

    /// Byte range between the class's braces, exclusive of both
    body: Range<usize>,
}

impl JavaSource {
    /// Parses a source file far enough to locate the top-level class.
    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let masked = scan::mask(&text);
        let (class_name, body) = find_class(&masked)?;

        Ok(Self {
            text,
            masked,
            class_name,
            body,
        })
    }

    /// Reads and parses a source file from disk.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(text).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The current source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Candidate fields for generation, in source order.
    ///
    /// Instance fields only: static members, constants (no lowercase
    /// character in the name), and logger fields are skipped.
    pub fn fields(&self) -> Vec<Field> {
        self.members()
            .into_iter()
            .filter_map(|member| parse_field(&self.masked[member]))
            .collect()
    }

    /// Applies rendered methods to the class body as one update.
    ///
    /// Each method replaces the first same-named method in place, or is
    /// appended at the end of the class body. The whole batch either
    /// applies or leaves the source untouched.
    pub fn apply(&mut self, methods: &[RenderedMethod]) -> Result<()> {
        let mut updated = self.clone();

        for method in methods {
            updated.insert_or_replace(&method.name, &method.text)?;
        }

        *self = updated;
        Ok(())
    }

    /// Replaces the first method with the given name, or appends the
    /// rendered text before the class's closing brace.
    pub fn insert_or_replace(&mut self, name: &str, rendered: &str) -> Result<()> {
        let text = match self.find_method(name) {
            Some(span) => {
                let mut text =
                    String::with_capacity(self.text.len() + rendered.len() - span.len());
                text.push_str(&self.text[..span.start]);
                text.push_str(rendered);
                text.push_str(&self.text[span.end..]);
                text
            }
            None => {
                // insert above the line holding the class's closing brace
                let close = self.body.end;
                let line_start = self.text[..close].rfind('\n').map(|i| i + 1).unwrap_or(0);
                let at = if self.text[line_start..close].trim().is_empty() {
                    line_start
                } else {
                    close
                };

                let mut text = String::with_capacity(self.text.len() + rendered.len() + 2);
                text.push_str(&self.text[..at]);
                text.push('\n');
                text.push_str(rendered);
                text.push('\n');
                text.push_str(&self.text[at..]);
                text
            }
        };

        *self = JavaSource::parse(text)?;
        Ok(())
    }

    /// Splits the class body into top-level member declarations: segments
    /// separated by `;` or by a balanced `{...}` block at member level.
    fn members(&self) -> Vec<Range<usize>> {
        let mut members = vec![];
        let mut start = self.body.start;
        let mut depth = 0usize;

        for (off, c) in self.masked[self.body.clone()].char_indices() {
            let i = self.body.start + off;

            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        members.push(start..i + 1);
                        start = i + 1;
                    }
                }
                ';' if depth == 0 => {
                    members.push(start..i + 1);
                    start = i + 1;
                }
                _ => {}
            }
        }

        members
    }

    /// Finds the span of the first method with the given name.
    ///
    /// Matching is by name only (arity-insensitive). The span starts at
    /// the beginning of the declaration's first line and ends after the
    /// closing brace of the method body.
    fn find_method(&self, name: &str) -> Option<Range<usize>> {
        let mut depth = 0usize;
        let mut member_start = self.body.start;
        let mut prev: Option<char> = None;

        for (off, c) in self.masked[self.body.clone()].char_indices() {
            let i = self.body.start + off;

            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        member_start = i + 1;
                    }
                }
                ';' if depth == 0 => member_start = i + 1,
                _ if depth == 0
                    && !prev.is_some_and(|p| scan::is_ident_char(p) || p == '.')
                    && ident_at(&self.masked, i, name) =>
                {
                    if let Some(end) = self.method_end(i + name.len()) {
                        return Some(self.declaration_start(member_start)..end);
                    }
                }
                _ => {}
            }

            prev = Some(c);
        }

        None
    }

    /// From the end of a candidate method name, expects a parameter list
    /// followed by a brace-delimited body; returns the offset just past
    /// the body's closing brace.
    fn method_end(&self, after_name: usize) -> Option<usize> {
        let rest = &self.masked[after_name..];
        let open_paren = after_name + rest.len() - rest.trim_start().len();

        if !self.masked[open_paren..].starts_with('(') {
            return None;
        }

        let close_paren = matching_paren(&self.masked, open_paren)?;

        // a `throws` clause may sit between the parameter list and the body
        let open_brace = self.masked[close_paren + 1..]
            .find('{')
            .map(|i| close_paren + 1 + i)?;
        if self.masked[close_paren + 1..open_brace].contains(';') {
            return None;
        }

        let close_brace = scan::matching_brace(&self.masked, open_brace)?;
        Some(close_brace + 1)
    }

    /// Start of the line holding the declaration's first token.
    fn declaration_start(&self, member_start: usize) -> usize {
        let rest = &self.masked[member_start..self.body.end];
        let first_token = member_start + rest.len() - rest.trim_start().len();

        self.masked[..first_token]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0)
            .max(member_start)
    }
}

/// Locates the first top-level `class` declaration in masked text.
fn find_class(masked: &str) -> Result<(String, Range<usize>)> {
    let mut depth = 0usize;
    let mut prev: Option<char> = None;

    for (i, c) in masked.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            'c' if depth == 0
                && !prev.is_some_and(|p| scan::is_ident_char(p) || p == '.')
                && ident_at(masked, i, "class") =>
            {
                let name = ident_after(masked, i + "class".len())
                    .context("malformed class declaration")?;
                let open = masked[i..]
                    .find('{')
                    .map(|o| i + o)
                    .context("class declaration has no body")?;
                let close = scan::matching_brace(masked, open)
                    .context("unbalanced braces in class body")?;

                return Ok((name, open + 1..close));
            }
            _ => {}
        }

        prev = Some(c);
    }

    bail!("no top-level class declaration found")
}

/// True when `word` occurs at `at` as a complete identifier.
fn ident_at(masked: &str, at: usize, word: &str) -> bool {
    masked[at..].starts_with(word)
        && !masked[at + word.len()..]
            .chars()
            .next()
            .is_some_and(scan::is_ident_char)
}

/// The identifier following `at`, skipping leading whitespace.
fn ident_after(masked: &str, at: usize) -> Option<String> {
    let rest = masked[at..].trim_start();
    let len = rest
        .find(|c: char| !scan::is_ident_char(c))
        .unwrap_or(rest.len());

    if len == 0 {
        return None;
    }

    Some(rest[..len].to_string())
}

/// Finds the byte offset of the `)` matching the `(` at `open`.
fn matching_paren(masked: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;

    for (i, c) in masked[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parses one member declaration as a candidate field, applying the
/// selection filters.
fn parse_field(decl: &str) -> Option<Field> {
    let decl = strip_annotations(decl);

    let head = match decl.split_once('=') {
        Some((head, _)) => head,
        None => decl.as_str(),
    };

    // methods, constructors, and initializer blocks never qualify
    if head.contains('(') || head.contains('{') {
        return None;
    }

    let head = head.trim().trim_end_matches(';').trim_end();

    let mut is_static = false;
    let mut tokens: Vec<&str> = head.split_whitespace().collect();
    tokens.retain(|token| {
        if MODIFIERS.contains(token) {
            if *token == "static" {
                is_static = true;
            }
            false
        } else {
            true
        }
    });

    if is_static || tokens.len() < 2 {
        return None;
    }

    let name = tokens.pop()?;
    let ty = tokens.join(" ");

    // constants and loggers are never mapped
    if !name.chars().any(|c| c.is_lowercase()) {
        return None;
    }
    if ty.contains("Logger") {
        return None;
    }

    Some(Field::new(name, ty))
}

/// Removes `@Annotation` and `@Annotation(...)` prefixes from a member
/// declaration.
fn strip_annotations(decl: &str) -> String {
    let mut out = String::with_capacity(decl.len());
    let mut rest = decl;

    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);

        let tail = rest[at + 1..].trim_start();
        let name_len = tail
            .find(|c: char| !scan::is_ident_char(c))
            .unwrap_or(tail.len());
        let tail = tail[name_len..].trim_start();

        rest = if tail.starts_with('(') {
            match matching_paren(tail, 0) {
                Some(close) => &tail[close + 1..],
                None => "",
            }
        } else {
            tail
        };
    }

    out.push_str(rest);
    out
}

#[macro_use]
mod fmt;
use fmt::ToJava;

mod method;

use ddbmap_core::MethodDef;

/// Number of spaces per indentation level.
const INDENT: usize = 4;

/// Renders generated methods to Java source text.
#[derive(Debug, Default)]
pub struct Serializer {
    /// Base indentation applied to every emitted line, in spaces
    base: usize,
}

struct Formatter<'a> {
    /// Where to write the rendered Java
    dst: &'a mut String,

    /// Base indentation, in spaces
    base: usize,
}

impl Serializer {
    /// Serializer rendering at column zero.
    pub fn new() -> Self {
        Self { base: 0 }
    }

    /// Serializer rendering for a class body indented by `base` spaces.
    pub fn with_base_indent(base: usize) -> Self {
        Self { base }
    }

    /// Renders one method to text. The output carries no trailing newline.
    pub fn serialize(&self, method: &MethodDef) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            base: self.base,
        };

        method.to_java(&mut fmt);

        ret
    }
}

impl Formatter<'_> {
    /// Starts a fresh line at the given indentation level.
    fn newline(&mut self, level: usize) {
        if !self.dst.is_empty() {
            self.dst.push('\n');
        }
        for _ in 0..self.base + level * INDENT {
            self.dst.push(' ');
        }
    }
}

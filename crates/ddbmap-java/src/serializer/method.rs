use super::{Formatter, ToJava};

use ddbmap_core::MethodDef;

/// A line at a fixed indentation level.
struct Line<'a>(usize, &'a str);

/// One body statement. Continuation lines of a multi-line statement
/// (fluent builder chains) sit one level deeper than the first line.
struct Stmt<'a>(&'a str);

/// The ordered body statements of a method.
struct Body<'a>(&'a [String]);

impl ToJava for &MethodDef {
    fn to_java(self, f: &mut Formatter<'_>) {
        let signature = format!(
            "public static {} {}({} {}) {{",
            self.ret, self.name, self.param.ty, self.param.name
        );

        let open = Line(0, &signature);
        let body = Body(&self.body);
        let close = Line(0, "}");

        fmt!(f, open body close);
    }
}

impl ToJava for Body<'_> {
    fn to_java(self, f: &mut Formatter<'_>) {
        for stmt in self.0 {
            fmt!(f, Stmt(stmt));
        }
    }
}

impl ToJava for Stmt<'_> {
    fn to_java(self, f: &mut Formatter<'_>) {
        let mut lines = self.0.lines();

        if let Some(first) = lines.next() {
            fmt!(f, Line(1, first));
        }

        for continuation in lines {
            fmt!(f, Line(2, continuation));
        }
    }
}

impl ToJava for Line<'_> {
    fn to_java(self, f: &mut Formatter<'_>) {
        f.newline(self.0);
        fmt!(f, self.1);
    }
}

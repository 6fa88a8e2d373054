use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_java($f);
        )*
    }};
}

pub(super) trait ToJava {
    fn to_java(self, f: &mut Formatter<'_>);
}

impl ToJava for &str {
    fn to_java(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

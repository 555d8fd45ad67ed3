use core::fmt;

use crate::seq::Sequence;

/// Pretty-prints the sequence as `[a, b, c]` into a formatter sink.
///
/// Element sequences have no `Display` of their own; print nested
/// pipelines by mapping the inners through [`write_to`] themselves.
///
/// ```
/// let mut out = String::new();
///
/// lazy_seq::write_to(&mut &[1, 2, 3][..], &mut out).unwrap();
/// assert!(out == "[1, 2, 3]");
/// ```
pub fn write_to<S, W>(seq: &mut S, out: &mut W) -> fmt::Result
where
    S: Sequence,
    S::Value: fmt::Display,
    W: fmt::Write,
{
    out.write_char('[')?;

    let mut cur = seq.first();
    let mut following = false;

    while !seq.is_last(&cur) {
        if following {
            out.write_str(", ")?;
        }

        write!(out, "{}", seq.read_at(&cur))?;

        following = true;
        seq.inc(&mut cur);
    }

    out.write_char(']')
}

#[test]
#[cfg(feature = "alloc")]
fn test_write_to_style() {
    use alloc::string::String;

    let mut out = String::new();
    write_to(&mut &["a", "b"][..], &mut out).unwrap();
    assert!(out == r#"[a, b]"#);

    let mut nothing: &[i32] = &[];
    let mut empty = String::new();
    write_to(&mut nothing, &mut empty).unwrap();
    assert!(empty == "[]");
}

use std::io::BufRead;
use std::str::FromStr;
use std::string::String;
use std::vec::Vec;

use crate::fault::runtime_check;
use crate::seq::{cached, Sequence};

/// Whitespace-separated values parsed from a reader. See [`tokens`].
#[derive(Debug)]
pub struct Tokens<R, T> {
    reader: R,
    current: Option<T>,
    started: bool,
}

/// Raw bytes pulled from a reader. See [`byte_stream`].
#[derive(Debug)]
pub struct ByteStream<R> {
    reader: R,
    current: Option<u8>,
    started: bool,
}

/// Reads whitespace-separated `T` values from `reader` until
/// extraction fails.
///
/// Extraction fails at end of input, on an I/O error, on invalid UTF-8
/// or when `T::from_str` rejects a token; the sequence simply ends
/// there, matching the "read until the stream refuses" contract of
/// stream-value sources.
///
/// ```
/// use lazy_seq::{tokens, Pipe};
///
/// let input = std::io::Cursor::new("10 11 twelve 13");
///
/// let read: Vec<u32> = tokens(input).to();
/// assert!(read == vec![10, 11]);
/// ```
pub fn tokens<R, T>(reader: R) -> Tokens<R, T>
where
    R: BufRead,
    T: FromStr,
{
    Tokens {
        reader,
        current: None,
        started: false,
    }
}

/// Reads `reader` byte by byte until it is exhausted.
///
/// ```
/// use lazy_seq::{byte_stream, Pipe};
///
/// let input = std::io::Cursor::new(&b"ab"[..]);
///
/// let read: Vec<u8> = byte_stream(input).to();
/// assert!(read == vec![b'a', b'b']);
/// ```
pub fn byte_stream<R: BufRead>(reader: R) -> ByteStream<R> {
    ByteStream {
        reader,
        current: None,
        started: false,
    }
}

fn next_token<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut token: Vec<u8> = Vec::new();

    loop {
        let (done, used) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(_) => return None,
            };

            if buf.is_empty() {
                (true, 0)
            } else {
                let mut used = 0;
                let mut done = false;

                for &byte in buf {
                    used += 1;

                    if byte.is_ascii_whitespace() {
                        if token.is_empty() {
                            continue;
                        }

                        done = true;
                        break;
                    }

                    token.push(byte);
                }

                (done, used)
            }
        };

        reader.consume(used);

        if done {
            break;
        }
    }

    if token.is_empty() {
        return None;
    }

    String::from_utf8(token).ok()
}

impl<R, T> Tokens<R, T>
where
    R: BufRead,
    T: FromStr,
{
    fn pull(&mut self) -> Option<T> {
        next_token(&mut self.reader).and_then(|token| token.parse().ok())
    }
}

impl<R, T> Sequence for Tokens<R, T>
where
    R: BufRead,
    T: FromStr,
{
    type Value = T;
    type Cursor = ();

    fn first(&mut self) -> () {
        self.current = self.pull();
        self.started = true;
    }

    fn is_last(&mut self, _cur: &()) -> bool {
        if !self.started {
            self.first();
        }

        self.current.is_none()
    }

    fn inc(&mut self, _cur: &mut ()) {
        runtime_check!(self.current.is_some(), "inc past the end of tokens");

        self.current = self.pull();
    }

    fn read_at<'a>(&'a self, _cur: &'a ()) -> &'a T {
        cached(&self.current)
    }
}

impl<R: BufRead> ByteStream<R> {
    fn pull(&mut self) -> Option<u8> {
        let byte = match self.reader.fill_buf() {
            Ok([]) | Err(_) => return None,
            Ok(buf) => buf[0],
        };

        self.reader.consume(1);

        Some(byte)
    }
}

impl<R: BufRead> Sequence for ByteStream<R> {
    type Value = u8;
    type Cursor = ();

    fn first(&mut self) -> () {
        self.current = self.pull();
        self.started = true;
    }

    fn is_last(&mut self, _cur: &()) -> bool {
        if !self.started {
            self.first();
        }

        self.current.is_none()
    }

    fn inc(&mut self, _cur: &mut ()) {
        runtime_check!(self.current.is_some(), "inc past the end of byte_stream");

        self.current = self.pull();
    }

    fn read_at<'a>(&'a self, _cur: &'a ()) -> &'a u8 {
        cached(&self.current)
    }
}

#[test]
fn test_tokens_stop_at_first_parse_failure() {
    let input = std::io::Cursor::new("  1 2\n3x 4");
    let mut seq = tokens::<_, u8>(input);

    let mut cur = seq.first();
    assert!(*seq.read_at(&cur) == 1);

    seq.inc(&mut cur);
    assert!(*seq.read_at(&cur) == 2);

    seq.inc(&mut cur);
    assert!(seq.is_last(&cur));
}

#[cfg(feature = "std")]
#[test]
fn test_byte_stream_reads_everything() {
    use crate::Pipe;

    let input = std::io::Cursor::new(&b"\x00\xff"[..]);

    let read: Vec<u8> = byte_stream(input).to();
    assert!(read == vec![0, 255]);
}

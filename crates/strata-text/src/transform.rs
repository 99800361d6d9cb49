//! Structural transforms: copies, cuts, splits, and deletion.
//!
//! Functions that produce owned strings take the output arena as `out`.
//! Only [`Str::replace`] needs transient space, and it takes a `scratch`
//! arena that it borrows mutably so it can open a [`Frame`] over it.
//!
//! [`Frame`]: strata_arena::Frame

use smallvec::SmallVec;
use strata_arena::Arena;

use crate::error::TextError;
use crate::list::StrList;
use crate::pair::StrPair;
use crate::string::Str;

/// Allocate `parts` back to back in `out`, followed by a NUL terminator.
///
/// An empty result is [`Str::EMPTY`] and allocates nothing.
pub(crate) fn assemble<'o, 'p, I>(out: &'o Arena, parts: I) -> Result<Str<'o>, TextError>
where
    I: IntoIterator<Item = &'p [u8]> + Clone,
{
    let len: usize = parts.clone().into_iter().map(<[u8]>::len).sum();
    if len == 0 {
        return Ok(Str::EMPTY);
    }
    let buf = out.alloc(len.saturating_add(1))?;
    let mut rest = &mut buf[..len];
    for part in parts {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(part.len());
        head.copy_from_slice(part);
        rest = tail;
    }
    Ok(Str::terminated(buf))
}

impl<'a> Str<'a> {
    /// Owned copy in `out`. The empty string is returned as is.
    pub fn clone_in<'o>(&self, out: &'o Arena) -> Result<Str<'o>, TextError> {
        assemble(out, [self.as_bytes()])
    }

    /// Owned copy of this string followed by `suffix`.
    pub fn append<'b, 'o>(
        &self,
        suffix: impl Into<Str<'b>>,
        out: &'o Arena,
    ) -> Result<Str<'o>, TextError> {
        assemble(out, [self.as_bytes(), suffix.into().as_bytes()])
    }

    /// Owned copy of the bytes `[pos, pos + len)`.
    pub fn substr<'o>(&self, pos: usize, len: usize, out: &'o Arena) -> Result<Str<'o>, TextError> {
        self.view(pos, len)?.clone_in(out)
    }

    /// Split around the `count`-th occurrence of `delim` without copying.
    ///
    /// `count` follows [`find`](Self::find). The delimiter belongs to
    /// neither half. When it does not occur, `first` is the whole string
    /// and `second` is empty.
    pub fn cut_view<'b>(&self, delim: impl Into<Str<'b>>, count: isize) -> StrPair<'a> {
        let delim = delim.into();
        match self.find(delim, count) {
            Some(pos) => StrPair::new(self.head(pos), self.tail(pos + delim.len())),
            None => StrPair::new(*self, Str::EMPTY),
        }
    }

    /// Like [`cut_view`](Self::cut_view), with both halves copied into `out`.
    pub fn cut<'b, 'o>(
        &self,
        delim: impl Into<Str<'b>>,
        count: isize,
        out: &'o Arena,
    ) -> Result<StrPair<'o>, TextError> {
        let pair = self.cut_view(delim, count);
        Ok(StrPair::new(pair.first.clone_in(out)?, pair.second.clone_in(out)?))
    }

    /// Split on every occurrence of `delim` without copying.
    ///
    /// Pieces are cut off the front one at a time. With `max_splits > 0`,
    /// once that many pieces exist the rest of the string becomes the final
    /// piece. An empty remainder ends the split, so a trailing delimiter
    /// does not produce an empty last piece.
    pub fn split_views<'b>(&self, delim: impl Into<Str<'b>>, max_splits: usize) -> StrList<'a> {
        let delim = delim.into();
        let mut pair = self.cut_view(delim, 1);
        let mut pieces = StrList::from_first(pair.first);
        while !pair.second.is_empty() {
            if max_splits != 0 && pieces.len() >= max_splits {
                pieces.push(pair.second);
                break;
            }
            pair = pair.second.cut_view(delim, 1);
            pieces.push(pair.first);
        }
        pieces
    }

    /// Like [`split_views`](Self::split_views), with every piece copied
    /// into `out`.
    pub fn split<'b, 'o>(
        &self,
        delim: impl Into<Str<'b>>,
        max_splits: usize,
        out: &'o Arena,
    ) -> Result<StrList<'o>, TextError> {
        self.split_views(delim, max_splits)
            .iter()
            .map(|piece| piece.clone_in(out))
            .collect()
    }

    /// Owned copy with occurrences of `token` deleted.
    ///
    /// Positive `count` removes the first `count` occurrences, negative
    /// removes the last `|count|`, and 0 removes all of them. The kept
    /// segments stay in their original order. The segments are gathered in
    /// a frame over `scratch` before the result is copied into `out`.
    pub fn replace<'b, 'o>(
        &self,
        token: impl Into<Str<'b>>,
        count: isize,
        out: &'o Arena,
        scratch: &mut Arena,
    ) -> Result<Str<'o>, TextError> {
        if self.is_empty() {
            return Ok(Str::EMPTY);
        }
        let token = token.into();
        let frame = scratch.frame();
        let buf = frame.alloc(self.len())?;
        let limit = count.unsigned_abs();
        let kept = if count < 0 {
            self.delete_from_back(token, limit, buf)
        } else {
            self.delete_from_front(token, limit, buf)
        };
        Str::new(kept).clone_in(out)
    }

    fn delete_from_front<'s>(&self, token: Str<'_>, limit: usize, buf: &'s mut [u8]) -> &'s [u8] {
        let mut rest = *self;
        let mut used = 0;
        let mut removed = 0;
        while limit == 0 || removed < limit {
            let Some(pos) = rest.find(token, 1) else {
                break;
            };
            buf[used..used + pos].copy_from_slice(rest.head(pos).as_bytes());
            used += pos;
            removed += 1;
            rest = rest.tail(pos + token.len());
        }
        buf[used..used + rest.len()].copy_from_slice(rest.as_bytes());
        used += rest.len();
        &buf[..used]
    }

    fn delete_from_back<'s>(&self, token: Str<'_>, limit: usize, buf: &'s mut [u8]) -> &'s [u8] {
        let mut rest = *self;
        let mut start = buf.len();
        let mut removed = 0;
        while limit == 0 || removed < limit {
            let Some(pos) = rest.find(token, -1) else {
                break;
            };
            let after = rest.tail(pos + token.len()).as_bytes();
            buf[start - after.len()..start].copy_from_slice(after);
            start -= after.len();
            removed += 1;
            rest = rest.head(pos);
        }
        buf[start - rest.len()..start].copy_from_slice(rest.as_bytes());
        start -= rest.len();
        &buf[start..]
    }
}

/// Split a NUL-terminated buffer on `delim` in place.
///
/// Each delimiter byte is overwritten with NUL, so every piece is itself
/// terminated. Piece boundaries match [`Str::split_views`] with no limit.
pub(crate) fn split_in_place(buf: &mut [u8], delim: u8) -> StrList<'_> {
    debug_assert_eq!(buf.last(), Some(&0));
    let mut pieces = SmallVec::new();
    let mut rest = buf;
    loop {
        let content = rest.len().saturating_sub(1);
        match rest[..content].iter().position(|&byte| byte == delim) {
            Some(pos) => {
                let (piece, tail) = std::mem::take(&mut rest).split_at_mut(pos + 1);
                piece[pos] = 0;
                pieces.push(Str::terminated(piece));
                rest = tail;
                if rest.len() <= 1 {
                    break;
                }
            }
            None => {
                if !rest.is_empty() {
                    pieces.push(Str::terminated(rest));
                }
                break;
            }
        }
    }
    StrList::from_items(pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arenas() -> (Arena, Arena) {
        (Arena::new(4 * 1024), Arena::new(4 * 1024))
    }

    fn texts(list: &StrList<'_>) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn clone_is_terminated_and_distinct() {
        let out = Arena::new(64);
        assert!(Str::EMPTY.clone_in(&out).unwrap().equals(Str::EMPTY));
        assert_eq!(out.offset(), 0);

        let s = Str::from("abc123");
        let copy = s.clone_in(&out).unwrap();
        assert!(copy.compare(s));
        assert!(!copy.equals(s));
        assert_eq!(copy.as_bytes_with_nul(), Some(&b"abc123\0"[..]));
        assert_eq!(out.offset(), 7);
    }

    #[test]
    fn append_cases() {
        let out = Arena::new(256);
        assert!(Str::EMPTY.append(Str::EMPTY, &out).unwrap().equals(Str::EMPTY));
        assert!(Str::EMPTY.append("", &out).unwrap().equals(Str::EMPTY));
        assert!(Str::from("").append(Str::EMPTY, &out).unwrap().equals(Str::EMPTY));

        let concat = Str::from("abc").append("123", &out).unwrap();
        assert_eq!(concat, "abc123");
        assert!(concat.is_terminated());
        assert_eq!(concat.append("", &out).unwrap(), "abc123");
        assert_eq!(Str::from("").append(concat, &out).unwrap(), "abc123");
    }

    #[test]
    fn substr_cases() {
        let out = Arena::new(256);
        let s = Str::from("123456789");
        assert!(s.substr(0, 0, &out).unwrap().compare(Str::EMPTY));
        assert_eq!(s.substr(0, 5, &out).unwrap(), "12345");
        assert_eq!(s.substr(2, 5, &out).unwrap(), "34567");
        assert_eq!(s.substr(8, 1, &out).unwrap(), "9");
        assert!(matches!(
            s.substr(5, 5, &out),
            Err(TextError::OutOfRange { available: 9, .. })
        ));
    }

    #[test]
    fn cut_cases() {
        let out = Arena::new(256);
        let cut = Str::EMPTY.cut(Str::EMPTY, 1, &out).unwrap();
        assert!(cut.first.equals(Str::EMPTY));
        assert!(cut.second.equals(Str::EMPTY));

        let cut = Str::from("TEST").cut(Str::EMPTY, 1, &out).unwrap();
        assert_eq!(cut.first, "TEST");
        assert!(cut.second.is_empty());

        let s = Str::from("LEFT RIGHT");
        let cut = s.cut(" ", 1, &out).unwrap();
        assert_eq!((cut.first, cut.second), (Str::from("LEFT"), Str::from("RIGHT")));

        let cut = s.cut("LEFT ", 1, &out).unwrap();
        assert_eq!((cut.first, cut.second), (Str::from(""), Str::from("RIGHT")));

        let cut = s.cut("T", 1, &out).unwrap();
        assert_eq!((cut.first, cut.second), (Str::from("LEF"), Str::from(" RIGHT")));

        let cut = s.cut("T", -1, &out).unwrap();
        assert_eq!((cut.first, cut.second), (Str::from("LEFT RIGH"), Str::from("")));

        let cut = s.cut("LEFT RIGHT", 1, &out).unwrap();
        assert!(cut.first.is_empty() && cut.second.is_empty());

        let cut = s.cut("LEFT RIGHT 1", 1, &out).unwrap();
        assert_eq!(cut.first, "LEFT RIGHT");
        assert!(cut.second.is_empty());
    }

    #[test]
    fn cut_view_does_not_allocate() {
        let s = Str::from("key=value");
        let pair = s.cut_view("=", 1);
        assert!(pair.first.equals(s.head(3)));
        assert_eq!(pair.second, "value");
        assert_eq!(pair.second.as_ptr(), s.as_bytes()[4..].as_ptr());
    }

    #[test]
    fn split_cases() {
        let out = Arena::new(4 * 1024);
        let splits = Str::EMPTY.split(Str::EMPTY, 0, &out).unwrap();
        assert_eq!(splits.len(), 1);
        assert!(splits[0].equals(Str::EMPTY));

        assert_eq!(texts(&Str::from("TEST").split(Str::EMPTY, 0, &out).unwrap()), ["TEST"]);
        assert_eq!(
            texts(&Str::from("LEFT RIGHT").split(" ", 1, &out).unwrap()),
            ["LEFT", "RIGHT"]
        );
        assert_eq!(texts(&Str::from("LEFT").split(" ", 1, &out).unwrap()), ["LEFT"]);
        assert_eq!(texts(&Str::from("123123").split("2", 1, &out).unwrap()), ["1", "3123"]);
        assert_eq!(
            texts(&Str::from("123123").split("2", 2, &out).unwrap()),
            ["1", "31", "3"]
        );
        assert_eq!(
            texts(&Str::from("abbabbabba").split("bb", 0, &out).unwrap()),
            ["a", "a", "a", "a"]
        );
    }

    #[test]
    fn split_edges() {
        let s = Str::from("a,,b,");
        assert_eq!(texts(&s.split_views(",", 0)), ["a", "", "b"]);
        assert_eq!(texts(&Str::from(",a").split_views(",", 0)), ["", "a"]);
    }

    #[test]
    fn split_copies_into_output() {
        let out = Arena::new(64);
        let s = Str::from("x y");
        let pieces = s.split(" ", 0, &out).unwrap();
        assert!(pieces.iter().all(|piece| piece.is_terminated()));
        assert_eq!(out.offset(), 4);
    }

    #[test]
    fn join_round_trips_split() {
        let out = Arena::new(4 * 1024);
        assert!(StrList::default().join(" ", &out).unwrap().equals(Str::EMPTY));

        for text in ["LEFT RIGHT", "LEFT RIGHT UP DOWN"] {
            let splits = Str::from(text).split(" ", 1, &out).unwrap();
            assert_eq!(splits.join(" ", &out).unwrap(), text);
        }
    }

    #[test]
    fn join_cut_cases() {
        let out = Arena::new(256);
        assert!(StrPair::default().join(Str::EMPTY, &out).unwrap().equals(Str::EMPTY));

        let pair = StrPair::new("LEFT".into(), "RIGHT".into());
        assert_eq!(pair.join(" ", &out).unwrap(), "LEFT RIGHT");

        let pair = StrPair::new("".into(), "SECOND FLOOR".into());
        assert_eq!(pair.join("FIRST AND ", &out).unwrap(), "FIRST AND SECOND FLOOR");
    }

    #[test]
    fn replace_cases() {
        let (out, mut scratch) = arenas();
        for (text, token) in [("", ""), ("", "x"), ("x", "")] {
            let res = Str::from(text).replace(token, 0, &out, &mut scratch).unwrap();
            if text.is_empty() {
                assert!(res.equals(Str::EMPTY));
            } else {
                assert_eq!(res, text);
            }
        }

        let cases: [(&str, &str, isize, &str); 8] = [
            ("Test 123", " ", 1, "Test123"),
            ("Test 123", "Test ", 1, "123"),
            ("aabbaa", "aa", 0, "bb"),
            ("aabbaaaa", "aa", 2, "bbaa"),
            ("11111211111", "1", 0, "2"),
            ("123123", "3", -1, "12312"),
            ("123123", "3", -2, "1212"),
            ("a-b-c-d", "-", -2, "a-bcd"),
        ];
        for (text, token, count, expected) in cases {
            let res = Str::from(text).replace(token, count, &out, &mut scratch).unwrap();
            assert_eq!(res, expected, "replace({text:?}, {token:?}, {count})");
        }
        assert_eq!(scratch.offset(), 0);
    }

    #[test]
    fn replace_reports_small_scratch() {
        let out = Arena::new(64);
        let mut scratch = Arena::new(4);
        let err = Str::from("too long").replace(" ", 0, &out, &mut scratch).unwrap_err();
        assert!(matches!(err, TextError::Arena(_)));
    }

    #[test]
    fn split_in_place_terminates_each_piece() {
        let mut buf = *b"one\ntwo\n\nthree\n\0";
        let lines = split_in_place(&mut buf, b'\n');
        assert_eq!(texts(&lines), ["one", "two", "", "three"]);
        assert!(lines.iter().all(|line| line.is_terminated()));

        let mut buf = *b"\0";
        let lines = split_in_place(&mut buf, b'\n');
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());

        let mut buf = *b"tail\0";
        assert_eq!(texts(&split_in_place(&mut buf, b'\n')), ["tail"]);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn join_inverts_split(text in "[a-c,]{0,40}[a-c]") {
                let out = Arena::new(1024);
                let s = Str::from(text.as_str());
                let pieces = s.split(",", 0, &out).unwrap();
                prop_assert_eq!(pieces.join(",", &out).unwrap(), text.as_str());
            }

            #[test]
            fn split_in_place_matches_split_views(text in "[ab\n]{0,40}") {
                let s = Str::from(text.as_str());
                let expected: Vec<String> = s.split_views("\n", 0).iter().map(|p| p.to_string()).collect();
                let mut buf = text.clone().into_bytes();
                buf.push(0);
                let lines = split_in_place(&mut buf, b'\n');
                let actual: Vec<String> = lines.iter().map(|p| p.to_string()).collect();
                prop_assert_eq!(actual, expected);
            }

            #[test]
            fn replace_all_removes_every_match(text in "[ab]{0,32}", token in "[ab]{1,2}") {
                let (out, mut scratch) = arenas();
                let s = Str::from(text.as_str());
                let res = s.replace(token.as_str(), 0, &out, &mut scratch).unwrap();
                prop_assert_eq!(res.to_string(), text.replace(token.as_str(), ""));
            }

            #[test]
            fn replace_first_matches_std(text in "[ab]{0,32}", token in "[ab]{1,2}", n in 1usize..4) {
                let (out, mut scratch) = arenas();
                let s = Str::from(text.as_str());
                let res = s.replace(token.as_str(), n as isize, &out, &mut scratch).unwrap();
                prop_assert_eq!(res.to_string(), text.replacen(token.as_str(), "", n));
            }

            #[test]
            fn replace_last_matches_rightmost_scan(text in "[ab]{0,32}", token in "[ab]{1,2}", n in 1usize..4) {
                let (out, mut scratch) = arenas();
                let s = Str::from(text.as_str());
                let res = s.replace(token.as_str(), -(n as isize), &out, &mut scratch).unwrap();
                let mut expected = text.clone();
                let removed: Vec<usize> = text.rmatch_indices(token.as_str()).take(n).map(|(i, _)| i).collect();
                for start in removed {
                    expected.replace_range(start..start + token.len(), "");
                }
                prop_assert_eq!(res.to_string(), expected);
            }
        }
    }
}

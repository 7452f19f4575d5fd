//! Split text into multi-line blocks, and sort the blocks by a key found inside each one.
//!
//! A [BlockSorter] holds two patterns. The block pattern finds the blocks : every
//! non-overlapping match is one block, and anything between matches is thrown away.
//! The sort pattern finds the key : the first capture group of its first match
//! within the block, or the empty string if it doesn't match.
//! Both patterns are compiled with `.` matching newline, and `^` and `$`
//! matching at every line boundary.
//!
//! Blocks are stable sorted by key, comparing bytes, and joined back together
//! with nothing in between.
//!
//!```
//! use msort::BlockSorter;
//! let vcards = "BEGIN:VCARD\nN:Smith\nEND:VCARD\nBEGIN:VCARD\nN:Jones\nEND:VCARD\n";
//! let sorter = BlockSorter::new("BEGIN:VCARD.*?END:VCARD\n", "^N:(.*?)$")?;
//! assert_eq!(
//!     sorter.sort(vcards),
//!     "BEGIN:VCARD\nN:Jones\nEND:VCARD\nBEGIN:VCARD\nN:Smith\nEND:VCARD\n"
//! );
//! # Ok::<(), msort::Error>(())
//!```

use crate::{Error, Result};
use std::fmt;
use std::io::Write;

/// Compile a pattern for use on `&str`, with dot-matches-newline and multi-line anchors
pub fn make_pattern(pattern: &str) -> Result<regex::Regex> {
    Ok(regex::RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .multi_line(true)
        .build()?)
}

/// Compile a pattern for use on `&[u8]`, with dot-matches-newline and multi-line anchors.
/// Unicode is off, so `.` matches any byte, and input need not be UTF-8.
/// Non-ASCII literals in the pattern still match their UTF-8 bytes.
pub fn make_upattern(pattern: &str) -> Result<regex::bytes::Regex> {
    Ok(regex::bytes::RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .multi_line(true)
        .unicode(false)
        .build()?)
}

/// All the blocks in `text`, in order. Always the whole match, never a capture group.
pub fn extract_blocks<'a>(
    text: &'a str,
    block_pattern: &'a regex::Regex,
) -> impl Iterator<Item = &'a str> + 'a {
    block_pattern.find_iter(text).map(|m| m.as_str())
}

/// All the blocks in `text`, in order. Always the whole match, never a capture group.
pub fn extract_ublocks<'a>(
    text: &'a [u8],
    block_pattern: &'a regex::bytes::Regex,
) -> impl Iterator<Item = &'a [u8]> + 'a {
    block_pattern.find_iter(text).map(|m| m.as_bytes())
}

/// The sort key of a block : the first capture group of the first match,
/// or empty if there's no match, or the group didn't take part in the match.
pub fn extract_key<'a>(block: &'a str, sort_pattern: &regex::Regex) -> &'a str {
    sort_pattern
        .captures(block)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

/// The sort key of a block : the first capture group of the first match,
/// or empty if there's no match, or the group didn't take part in the match.
pub fn extract_ukey<'a>(block: &'a [u8], sort_pattern: &regex::bytes::Regex) -> &'a [u8] {
    sort_pattern
        .captures(block)
        .and_then(|c| c.get(1))
        .map_or(&block[..0], |m| m.as_bytes())
}

/// Sort the blocks of `text`, compiling the patterns on the way
///```
/// let text = "BEGIN A END\nBEGIN C END\nBEGIN B END\n";
/// let out = msort::sort_blocks(text, "BEGIN . END\n", "BEGIN (.)")?;
/// assert_eq!(out, "BEGIN A END\nBEGIN B END\nBEGIN C END\n");
/// assert!(msort::sort_blocks(text, "BEGIN (", "BEGIN (.)").is_err());
/// # Ok::<(), msort::Error>(())
///```
pub fn sort_blocks(text: &str, block_pattern: &str, sort_pattern: &str) -> Result<String> {
    Ok(BlockSorter::new(block_pattern, sort_pattern)?.sort(text))
}

/// One block, borrowed from the input
#[derive(Debug, PartialEq, Eq)]
pub struct Block<'a, T: ?Sized> {
    /// zero based position among the blocks of the input
    pub index: usize,
    /// sort key
    pub key: &'a T,
    /// whole text of the block
    pub text: &'a T,
}

impl<T: ?Sized> Clone for Block<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: ?Sized> Copy for Block<'_, T> {}

impl fmt::Display for Block<'_, str> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {} key '{}'", self.index + 1, self.key)
    }
}

impl fmt::Display for Block<'_, [u8]> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {} key '{}'", self.index + 1, String::from_utf8_lossy(self.key))
    }
}

/// Compiled block and sort patterns, for `&str` and `&[u8]` input
#[derive(Debug, Clone)]
pub struct BlockSorter {
    s_block: regex::Regex,
    u_block: regex::bytes::Regex,
    s_sort: regex::Regex,
    u_sort: regex::bytes::Regex,
}

impl BlockSorter {
    /// new from block pattern and sort pattern.
    /// Fails if either won't compile, or if the sort pattern has no capture group.
    pub fn new(block_pattern: &str, sort_pattern: &str) -> Result<Self> {
        let s_sort = make_pattern(sort_pattern)?;
        if s_sort.captures_len() < 2 {
            return Err(Error::NoCaptureGroup(sort_pattern.to_string()));
        }
        Ok(Self {
            s_block: make_pattern(block_pattern)?,
            u_block: make_upattern(block_pattern)?,
            s_sort,
            u_sort: make_upattern(sort_pattern)?,
        })
    }
    /// the block pattern, as given
    pub fn block_pattern(&self) -> &str {
        self.s_block.as_str()
    }
    /// the sort pattern, as given
    pub fn sort_pattern(&self) -> &str {
        self.s_sort.as_str()
    }
    /// blocks of `text`, in input order
    pub fn blocks<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        extract_blocks(text, &self.s_block)
    }
    /// blocks of `text`, in input order
    pub fn ublocks<'a>(&'a self, text: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        extract_ublocks(text, &self.u_block)
    }
    /// sort key of one block
    pub fn key<'a>(&self, block: &'a str) -> &'a str {
        extract_key(block, &self.s_sort)
    }
    /// sort key of one block
    pub fn ukey<'a>(&self, block: &'a [u8]) -> &'a [u8] {
        extract_ukey(block, &self.u_sort)
    }
    /// the blocks of `text` with their keys, in sorted order
    pub fn sorted<'a>(&self, text: &'a str) -> Vec<Block<'a, str>> {
        let mut v: Vec<Block<'a, str>> = self
            .s_block
            .find_iter(text)
            .enumerate()
            .map(|(index, m)| Block { index, key: self.key(m.as_str()), text: m.as_str() })
            .collect();
        v.sort_by(|a, b| a.key.cmp(b.key));
        v
    }
    /// the blocks of `text` with their keys, in sorted order
    pub fn usorted<'a>(&self, text: &'a [u8]) -> Vec<Block<'a, [u8]>> {
        let mut v: Vec<Block<'a, [u8]>> = self
            .u_block
            .find_iter(text)
            .enumerate()
            .map(|(index, m)| Block { index, key: self.ukey(m.as_bytes()), text: m.as_bytes() })
            .collect();
        v.sort_by(|a, b| a.key.cmp(b.key));
        v
    }
    /// sort the blocks of `text` and join them together
    pub fn sort(&self, text: &str) -> String {
        let v = self.sorted(text);
        let mut ret = String::with_capacity(v.iter().map(|b| b.text.len()).sum());
        for b in v {
            ret.push_str(b.text);
        }
        ret
    }
    /// sort the blocks of `text` and join them together
    pub fn usort(&self, text: &[u8]) -> Vec<u8> {
        let v = self.usorted(text);
        let mut ret = Vec::with_capacity(v.iter().map(|b| b.text.len()).sum());
        for b in v {
            ret.extend_from_slice(b.text);
        }
        ret
    }
    /// sort the blocks of `text` and write them to `w`.
    /// Returns the blocks, in the order written.
    pub fn write_sorted<'a>(&self, text: &'a [u8], w: &mut dyn Write) -> Result<Vec<Block<'a, [u8]>>> {
        let v = self.usorted(text);
        for b in &v {
            w.write_all(b.text)?;
        }
        Ok(v)
    }
    /// first adjacent pair of blocks whose keys are out of order, if any
    pub fn check<'a>(&self, text: &'a str) -> Option<(Block<'a, str>, Block<'a, str>)> {
        let mut prev: Option<Block<'a, str>> = None;
        for (index, m) in self.s_block.find_iter(text).enumerate() {
            let curr = Block { index, key: self.key(m.as_str()), text: m.as_str() };
            if let Some(p) = prev {
                if p.key > curr.key {
                    return Some((p, curr));
                }
            }
            prev = Some(curr);
        }
        None
    }
    /// first adjacent pair of blocks whose keys are out of order, if any
    pub fn ucheck<'a>(&self, text: &'a [u8]) -> Option<(Block<'a, [u8]>, Block<'a, [u8]>)> {
        let mut prev: Option<Block<'a, [u8]>> = None;
        for (index, m) in self.u_block.find_iter(text).enumerate() {
            let curr = Block { index, key: self.ukey(m.as_bytes()), text: m.as_bytes() };
            if let Some(p) = prev {
                if p.key > curr.key {
                    return Some((p, curr));
                }
            }
            prev = Some(curr);
        }
        None
    }
}

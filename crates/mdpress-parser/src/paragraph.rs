//! Implicit paragraph handling.
//!
//! Paragraphs are never written by a marker. One opens in front of the
//! first content after the document start or a closed paragraph, and
//! closes on a blank line, in front of a heading, or at the end of the
//! document. Because those decisions are often made one character late,
//! every write goes through [`ParagraphTracker::commit`], which orders the
//! output in three phases:
//!
//! 1. prefix writes: close the paragraph a previous character ended
//! 2. the opening tag if one is pending, then the content itself, then the
//!    closing tag if the content must be surrounded
//! 3. postfix writes that depend on phase 2 being in the output already

use mdpress_core::ParagraphFlags;

/// Output that opens a paragraph.
pub const PARAGRAPH_OPEN: &str = "\n<p>";

/// Output that closes a paragraph.
pub const PARAGRAPH_CLOSE: &str = "</p>\n";

#[derive(Debug)]
pub struct ParagraphTracker<'s> {
    flags: &'s mut ParagraphFlags,
}

impl<'s> ParagraphTracker<'s> {
    pub fn new(flags: &'s mut ParagraphFlags) -> Self {
        Self { flags }
    }

    /// Content is about to be written; open a paragraph first unless one
    /// is open and staying open.
    pub fn prepare_content(&mut self) {
        if !self.flags.is_open() {
            self.flags.begin = true;
        }
    }

    /// Close the open paragraph before the next write.
    pub fn request_end(&mut self) {
        if self.flags.active {
            self.flags.end = true;
        }
    }

    /// Close the paragraph right after the next write's content.
    pub fn request_surround(&mut self) {
        self.flags.surround = true;
    }

    /// Write `content` and `postfix` to `out` with pending transitions
    /// applied around them.
    pub fn commit(&mut self, out: &mut String, content: &str, postfix: &str) {
        if self.flags.end {
            if self.flags.active {
                out.push_str(PARAGRAPH_CLOSE);
            }
            self.flags.active = false;
            self.flags.end = false;
        }

        if self.flags.begin {
            out.push_str(PARAGRAPH_OPEN);
            self.flags.active = true;
            self.flags.begin = false;
        }
        out.push_str(content);
        if self.flags.surround {
            if self.flags.active {
                out.push_str(PARAGRAPH_CLOSE);
            }
            *self.flags = ParagraphFlags::default();
        }

        out.push_str(postfix);
    }
}

//! Styled text produced by game actions.
//!
//! Every action returns a [`Narration`]: an ordered list of text segments, each
//! optionally carrying a semantic [`Tone`]. Nothing in the game layer knows how
//! a tone is drawn; that is up to the [`TextSink`](crate::console::TextSink)
//! that finally renders the narration.

/// Semantic color tags understood by the output sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    White,
    Blue,
    Red,
    BrightYellow,
    Green,
    Yellow,
    Cyan,
    Purple,
    Gray,
}

/// One run of text with an optional tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Option<Tone>,
}

/// Ordered sequence of styled segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    segments: Vec<Segment>,
}

impl Narration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for a single untinted segment.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut n = Self::new();
        n.say(text);
        n
    }

    /// Append untinted text.
    pub fn say(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(text.into(), None)
    }

    /// Append text carrying a tone.
    pub fn tint(&mut self, text: impl Into<String>, tone: Tone) -> &mut Self {
        self.push(text.into(), Some(tone))
    }

    /// Move all segments of `other` onto the end of this narration.
    pub fn append(&mut self, other: Narration) -> &mut Self {
        for seg in other.segments {
            self.push(seg.text, seg.tone);
        }
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenated text with all tones dropped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn push(&mut self, text: String, tone: Option<Tone>) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        // Merge adjacent runs of the same tone so sinks emit fewer escapes
        if let Some(last) = self.segments.last_mut() {
            if last.tone == tone {
                last.text.push_str(&text);
                return self;
            }
        }
        self.segments.push(Segment { text, tone });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_segments_with_same_tone_merge() {
        let mut n = Narration::new();
        n.say("a").say("b").tint("c", Tone::Red).tint("d", Tone::Red).say("e");
        assert_eq!(n.segments().len(), 3);
        assert_eq!(n.segments()[0].text, "ab");
        assert_eq!(n.segments()[1].tone, Some(Tone::Red));
        assert_eq!(n.plain_text(), "abcde");
    }

    #[test]
    fn empty_text_is_ignored() {
        let mut n = Narration::new();
        n.say("").tint("", Tone::Cyan);
        assert!(n.is_empty());
    }

    #[test]
    fn append_keeps_order_and_tones() {
        let mut first = Narration::plain("one ");
        let mut second = Narration::new();
        second.tint("two", Tone::Yellow);
        first.append(second);
        assert_eq!(first.plain_text(), "one two");
        assert_eq!(first.segments()[1].tone, Some(Tone::Yellow));
    }
}

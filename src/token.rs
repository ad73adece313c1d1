//! At the heart of a [`Chain`](crate::Chain) is a [`Token`]. In fact, this is just a String. But we
//! make a distinction here: A Token is a word, that is, a run of characters between the
//! [`DELIMITERS`].
//!
//! Only spaces, carriage returns and line feeds separate words. Tabs and other unicode whitespace
//! stay part of the word they appear in, and punctuation sticks to its word as well.
//!
//! If you want more control of what you want a token to be, you can use
//! [`ChainBuilder::feed_tokens()`](crate::chain::ChainBuilder::feed_tokens()).

/// Representation of a single word.
pub type Token = String;

/// A borrowed version of [`Token`]; if [`Token`] is [`String`], then [`TokenRef`] is `&str`.
pub type TokenRef<'a> = &'a str;

/// Characters that separate words.
pub const DELIMITERS: [char; 3] = [' ', '\r', '\n'];

/// What may follow a word in a [`Chain`](crate::Chain).
///
/// [`Successor::End`] marks that the word was the last one of the text it was read from. It is
/// never equal to any word, not even an empty one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Successor {
    Word(Token),
    End,
}

impl Successor {
    /// The word, unless this is the end marker.
    pub fn as_word(&self) -> Option<&Token> {
        match self {
            Successor::Word(w) => Some(w),
            Successor::End => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Successor::End)
    }
}

impl From<&str> for Successor {
    fn from(value: &str) -> Self {
        Self::Word(value.to_string())
    }
}

impl From<Option<&str>> for Successor {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::End, |w| Self::Word(w.to_string()))
    }
}

impl PartialEq<&str> for Successor {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Successor::Word(w) if w == other)
    }
}

/// Splits `content` into words, dropping the empty strings left behind by repeated, leading or
/// trailing delimiters.
pub fn split_words(content: &str) -> impl Iterator<Item = TokenRef<'_>> {
    content.split(DELIMITERS).filter(|word| !word.is_empty())
}

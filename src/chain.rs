//! See the top level crate documentation for information about the [`Chain`] type.

use hashbrown::HashMap;

use itertools::Itertools;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::distribution::{SuccessorDistribution, SuccessorDistributionBuilder};
use crate::error::{Error, Result};
use crate::token::{split_words, Successor, Token, TokenRef};

/// How many words [`Chain::generate_text()`] is usually asked for.
pub const DEFAULT_NUM_WORDS: usize = 100;

/// Simple first order Markov chain over words.
///
/// ```
/// # use wordchain::{Chain, Successor};
/// # use rand::thread_rng;
/// let chain = Chain::from_text("I am &str");
///
/// assert_eq!(
///     chain.generate_next_successor(&mut thread_rng(), "I"),
///     Some(&Successor::from("am"))
/// );
///
/// // Nothing ever followed the last word
/// assert_eq!(
///     chain.generate_next_successor(&mut thread_rng(), "&str"),
///     Some(&Successor::End)
/// );
///
/// // And we have never seen this one
/// assert_eq!(chain.generate_next_successor(&mut thread_rng(), "You"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    /// Every word of the source, in order.
    words: Vec<Token>,
    /// Distinct words in order of first occurance. Start words are picked from here so a seeded
    /// rng gives the same text every time.
    keys: Vec<Token>,
    map: HashMap<Token, SuccessorDistribution>,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Splits `text` into words and builds a chain from them. Never fails; text without any
    /// words gives an empty chain, which will refuse to generate anything.
    pub fn from_text(text: &str) -> Self {
        let mut cb = ChainBuilder::new();
        cb.feed_str(text);
        cb.build()
    }

    /// The words the chain was built from, in order.
    pub fn words(&self) -> &[Token] {
        &self.words
    }

    /// The distinct words of the chain, in the order they were first seen.
    pub fn keys(&self) -> &[Token] {
        &self.keys
    }

    /// Everything that has followed `word`, in the order it was seen. `None` if `word` is unknown.
    pub fn successors(&self, word: TokenRef<'_>) -> Option<&[Successor]> {
        self.map.get(word).map(SuccessorDistribution::successors)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Randomly chooses a word to start generating from. Every distinct word is equally likely.
    /// If the chain is empty, `None` is returned.
    pub fn start_word(&self, rng: &mut impl Rng) -> Option<&Token> {
        self.keys.choose(rng)
    }

    /// Picks what comes after `prev`.
    ///
    /// If the chain has never seen `prev`, `None` is returned. If `prev` ended the text, that may
    /// be [`Successor::End`].
    pub fn generate_next_successor(
        &self,
        rng: &mut impl Rng,
        prev: TokenRef<'_>,
    ) -> Option<&Successor> {
        let dist = self.map.get(prev)?;
        Some(dist.get_random_successor(rng))
    }

    /// Generates at most `n` words, starting at a random word from [`Chain::start_word()`]. Fewer
    /// words are generated if the walk draws [`Successor::End`].
    ///
    /// Asking for zero words always gives an empty vector.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if the chain is empty.
    pub fn generate_words(&self, rng: &mut impl Rng, n: usize) -> Result<Vec<&Token>> {
        if n < 1 {
            return Ok(Vec::new());
        }

        let mut current = self.start_word(rng).ok_or(Error::InvalidState)?;
        let mut res = vec![current];

        while res.len() < n {
            let Some(successor) = self.generate_next_successor(rng, current) else {
                // Cannot happen for a built chain, every word is a key
                trace!("no successors for {current:?}");
                break;
            };
            let Some(next) = successor.as_word() else {
                trace!("reached end of chain after {} words", res.len());
                break;
            };
            res.push(next);
            current = next;
        }

        Ok(res)
    }

    /// Like [`Chain::generate_words()`], but joins the words with single spaces.
    pub fn generate(&self, rng: &mut impl Rng, n: usize) -> Result<String> {
        Ok(self.generate_words(rng, n)?.into_iter().join(" "))
    }

    /// [`Chain::generate()`] using the thread local rng.
    pub fn generate_text(&self, n: usize) -> Result<String> {
        self.generate(&mut thread_rng(), n)
    }
}

/// Builds a Chain by being fed words and keeping track of every word that follows another.
#[derive(Clone, Debug)]
pub struct ChainBuilder {
    words: Vec<Token>,
    keys: Vec<Token>,
    map: HashMap<Token, SuccessorDistributionBuilder>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            keys: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Uses up the builder and creates a new chain. A builder that was never fed any words gives
    /// an empty chain.
    pub fn build(self) -> Chain {
        let mut chain_map = HashMap::with_capacity(self.map.len());
        for (word, dist_builder) in self.map {
            chain_map.insert(word, dist_builder.build());
        }

        debug!(
            "built chain from {} words, {} of them distinct",
            self.words.len(),
            chain_map.len()
        );

        Chain {
            words: self.words,
            keys: self.keys,
            map: chain_map,
        }
    }

    /// Feeds the chain builder with more text, splitting it with
    /// [`split_words()`](crate::token::split_words()).
    pub fn feed_str(&mut self, content: &str) {
        self.feed_tokens(split_words(content));
    }

    /// Feeds the chain builder with already split words. Each word gets the following word as a
    /// successor, and the last one gets [`Successor::End`]. Empty tokens are skipped.
    ///
    /// Every call is its own sequence: the first word fed here does not become a successor of the
    /// last word of an earlier call.
    pub fn feed_tokens<'a, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = TokenRef<'a>>,
    {
        let Self { words, keys, map } = self;

        let start = words.len();
        words.extend(
            tokens
                .into_iter()
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );

        let fed = &words[start..];
        for (i, word) in fed.iter().enumerate() {
            let next = Successor::from(fed.get(i + 1).map(String::as_str));
            Self::add_occurance(map, keys, word, next);
        }
    }

    /// Add the occurance of `next` following `word`.
    fn add_occurance(
        map: &mut HashMap<Token, SuccessorDistributionBuilder>,
        keys: &mut Vec<Token>,
        word: TokenRef<'_>,
        next: Successor,
    ) {
        match map.get_mut(word) {
            Some(b) => {
                b.add_successor(next);
            }
            None => {
                let mut b = SuccessorDistributionBuilder::new();
                b.add_successor(next);
                keys.push(word.to_string());
                map.insert(word.to_string(), b);
            }
        }
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;
    use rand::rngs::StdRng;
    use rand::{thread_rng, SeedableRng};

    use crate::{Chain, Error, Successor};

    const HAT: &str = "the cat in the hat";

    fn word_count(s: &str) -> usize {
        s.split(' ').count()
    }

    #[test]
    fn builds_successor_map() {
        let chain = Chain::from_text(HAT);

        assert_eq!(chain.words(), ["the", "cat", "in", "the", "hat"]);
        assert_eq!(chain.len(), 4);
        assert_eq!(
            chain.successors("the").unwrap(),
            [Successor::from("cat"), Successor::from("hat")]
        );
        assert_eq!(chain.successors("cat").unwrap(), [Successor::from("in")]);
        assert_eq!(chain.successors("in").unwrap(), [Successor::from("the")]);
        assert_eq!(chain.successors("hat").unwrap(), [Successor::End]);
        assert!(chain.successors("dog").is_none());
    }

    #[test]
    fn keys_in_order_of_first_occurance() {
        let chain = Chain::from_text(HAT);
        assert_eq!(chain.keys(), ["the", "cat", "in", "hat"]);
    }

    #[test]
    fn messy_whitespace_builds_same_chain() {
        assert_eq!(
            Chain::from_text("  the cat  in\r\nthe  hat \n"),
            Chain::from_text(HAT)
        );
    }

    #[test]
    fn building_twice_is_identical() {
        let s = "one fish two fish red fish blue fish";
        assert_eq!(Chain::from_text(s), Chain::from_text(s));
    }

    #[test]
    fn successor_lists_match_occurances() {
        let s = "a b a c a a";
        let chain = Chain::from_text(s);
        let total: usize = chain
            .keys()
            .iter()
            .map(|k| chain.successors(k).unwrap().len())
            .sum();
        assert_eq!(total, chain.words().len());
        assert_eq!(
            chain.successors("a").unwrap(),
            [
                Successor::from("b"),
                Successor::from("c"),
                Successor::from("a"),
                Successor::End
            ]
        );
    }

    #[test]
    fn every_word_is_a_key() {
        let chain = Chain::from_text("all work and no play makes jack a dull boy");
        for word in chain.words() {
            assert!(!chain.successors(word).unwrap().is_empty());
        }
    }

    #[test]
    fn empty_text_builds_empty_chain() {
        for s in ["", "   ", "\r\n\n \r"] {
            let chain = Chain::from_text(s);
            assert!(chain.is_empty());
            assert!(chain.words().is_empty());
            assert!(chain.start_word(&mut thread_rng()).is_none());
        }
    }

    #[test]
    fn empty_chain_cannot_generate() {
        let chain = Chain::from_text(" \n ");
        assert_eq!(chain.generate_text(10), Err(Error::InvalidState));
        assert_eq!(
            chain.generate_words(&mut thread_rng(), 1),
            Err(Error::InvalidState)
        );
    }

    #[test]
    fn zero_words_is_empty() {
        let chain = Chain::from_text(HAT);
        assert_eq!(chain.generate_text(0).unwrap(), "");
        assert_eq!(Chain::from_text("").generate_text(0).unwrap(), "");
    }

    #[test]
    fn generate_returns_between_one_and_n_words() {
        let chain = Chain::from_text(HAT);
        let mut rng = thread_rng();
        for n in [1, 2, 5, 50, 100] {
            for _ in 0..50 {
                let text = chain.generate(&mut rng, n).unwrap();
                let count = word_count(&text);
                assert!((1..=n).contains(&count), "{count} words for n = {n}");
            }
        }
    }

    #[test]
    fn generated_words_come_from_input() {
        let chain = Chain::from_text(HAT);
        let known: HashSet<&str> = HAT.split(' ').collect();
        for _ in 0..100 {
            let text = chain.generate_text(100).unwrap();
            for word in text.split(' ') {
                assert!(known.contains(word), "{word:?} was never in the input");
            }
        }
    }

    #[test]
    fn stops_at_end_of_text() {
        let chain = Chain::from_text("I am");
        for _ in 0..50 {
            let text = chain.generate_text(10).unwrap();
            assert!(text == "I am" || text == "am", "unexpected {text:?}");
        }
    }

    #[test]
    fn single_word_is_single_word() {
        let chain = Chain::from_text("  hello  ");
        assert_eq!(chain.generate_text(100).unwrap(), "hello");
    }

    #[test]
    fn cycle_can_reach_n() {
        // "a" is followed by "a" twice and by the end once
        let chain = Chain::from_text("a a a");
        let mut rng = StdRng::seed_from_u64(1);
        let longest = (0..200)
            .map(|_| chain.generate_words(&mut rng, 5).unwrap().len())
            .max()
            .unwrap();
        assert_eq!(longest, 5);
    }

    #[test]
    fn same_seed_same_text() {
        let chain = Chain::from_text(
            "the quick brown fox jumps over the lazy dog and the dog sleeps over the fox",
        );
        let a = chain.generate(&mut StdRng::seed_from_u64(1337), 30).unwrap();
        let b = chain.generate(&mut StdRng::seed_from_u64(1337), 30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_key_can_start() {
        let chain = Chain::from_text(HAT);
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            seen.insert(chain.start_word(&mut rng).unwrap().as_str());
        }
        assert_eq!(seen.len(), chain.len());
    }

    #[test]
    fn separate_feeds_end_separately() {
        let mut cb = Chain::builder();
        cb.feed_str("I am");
        cb.feed_tokens(["you", "", "are"]);
        let chain = cb.build();

        assert_eq!(chain.words(), ["I", "am", "you", "are"]);
        assert_eq!(chain.successors("am").unwrap(), [Successor::End]);
        assert_eq!(chain.successors("you").unwrap(), [Successor::from("are")]);
        assert_eq!(chain.successors("are").unwrap(), [Successor::End]);
    }

    #[test]
    fn chain_can_be_shared() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chain>();

        let chain = Chain::from_text(HAT);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..25 {
                        assert!(!chain.generate_text(20).unwrap().is_empty());
                    }
                });
            }
        });
    }

    #[test]
    fn generate_long_from_fortune() {
        // Nice output from fortune
        let s = r#"
Coach: How's it going, Norm?
Norm:  Daddy's rich and Momma's good lookin'.
                -- Cheers, Truce or Consequences

Sam:   What's up, Norm?
Norm:  My nipples.  It's freezing out there.
                -- Cheers, Coach Returns to Action
"#;
        let chain = Chain::from_text(s);
        let mut rng = thread_rng();
        for _ in 0..100 {
            let words = chain.generate_words(&mut rng, 100).unwrap();
            assert!(!words.is_empty() && words.len() <= 100);
            assert!(words.iter().all(|w| !w.is_empty()));
        }
    }
}

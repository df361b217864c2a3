//! Benchmark input: the subject/prefix pair and its mutation step.
//!
//! The suite keeps one [`SamplePair`] per strategy and mutates it before every
//! comparison. Subject and prefix gain or lose their leading character in
//! lockstep, so the pair drifts between matching and non-matching states and
//! no strategy can profit from seeing the same input twice.

use rand::Rng;

/// Upper bound (exclusive) on the length of a generated subject.
pub const MAX_LENGTH: usize = 32;

/// Upper bound (exclusive) on generated code points.
pub const CHAR_CODE_LIMIT: u8 = 127;

/// One step of the mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Prepend the character to both subject and prefix.
    Prepend(char),
    /// Remove the first character of both subject and prefix.
    DropFirst,
}

impl Mutation {
    /// Draws a mutation with even odds for each branch.
    ///
    /// The prepended character comes from the same draw that picked the
    /// branch, which limits it to code points below 64.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let draw: f64 = rng.gen();

        if draw < 0.5 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let code = (draw * f64::from(CHAR_CODE_LIMIT)) as u8;
            Self::Prepend(char::from(code))
        } else {
            Self::DropFirst
        }
    }
}

/// Subject string and prefix candidate, mutated together.
///
/// The prefix is not guaranteed to be shorter than the subject, nor to be a
/// prefix of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplePair {
    subject: String,
    prefix: String,
}

impl SamplePair {
    /// Creates a pair from explicit strings.
    #[must_use]
    pub fn new(subject: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            prefix: prefix.into(),
        }
    }

    /// Generates a random subject and a random contiguous substring of it.
    ///
    /// Half of the prefixes start at the beginning of the subject; the others
    /// start anywhere after it. Empty and full-length prefixes both occur.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let length = rng.gen_range(0..MAX_LENGTH);
        let subject: String = (0..length)
            .map(|_| char::from(rng.gen_range(0..CHAR_CODE_LIMIT)))
            .collect();

        let start = if length < 2 || rng.gen_bool(0.5) {
            0
        } else {
            rng.gen_range(1..length)
        };
        let end = rng.gen_range(start..=length);
        let prefix = subject.chars().skip(start).take(end - start).collect();

        Self { subject, prefix }
    }

    /// The string tested for a leading match.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The candidate leading substring.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Draws a mutation, applies it and returns it.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Mutation {
        let mutation = Mutation::draw(rng);
        self.apply(mutation);
        mutation
    }

    /// Applies a mutation to both strings.
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::Prepend(ch) => {
                self.subject.insert(0, ch);
                self.prefix.insert(0, ch);
            }
            Mutation::DropFirst => {
                drop_first(&mut self.subject);
                drop_first(&mut self.prefix);
            }
        }
    }
}

fn drop_first(s: &mut String) {
    if let Some(ch) = s.chars().next() {
        s.drain(..ch.len_utf8());
    }
}

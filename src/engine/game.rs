//! The guess engine
//!
//! Owns one game at a time: target selection, input accumulation, scoring of
//! submitted guesses and win/loss detection. Every operation is synchronous.

use super::{
    GameConfig, GameError, GameEvent, GameObserver, GameState, GameStatus, ObserverId, Target,
};
use crate::core::{Feedback, Word, score_guess};
use crate::dictionary::{Dictionary, DictionarySource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Won,
    Lost,
}

/// Single-player Wordle game engine
///
/// Generic over its random source so selection can be made deterministic.
///
/// # Examples
/// ```
/// use wordle_game::dictionary::Dictionary;
/// use wordle_game::engine::{GameConfig, GuessEngine};
///
/// let dict = Dictionary::from_entries([("stare", "To look fixedly.")]);
/// let mut engine = GuessEngine::with_seed(GameConfig::default(), 7);
/// engine.select_target(&dict).unwrap();
///
/// for letter in "stare".chars() {
///     engine.add_letter(letter);
/// }
/// let feedback = engine.submit_guess().unwrap();
/// assert!(feedback.is_perfect());
/// assert!(engine.state().is_won);
/// ```
pub struct GuessEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
    dictionary: Option<Dictionary>,
    target: Option<Target>,
    current_input: String,
    history: Vec<String>,
    results: Vec<Feedback>,
    outcome: Option<Outcome>,
    observers: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_observer: usize,
}

impl GuessEngine<StdRng> {
    /// Create an engine seeded from the operating system
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine whose target selection is reproducible
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GuessEngine<R> {
    /// Create an engine using the given random source
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            dictionary: None,
            target: None,
            current_input: String::new(),
            history: Vec::new(),
            results: Vec::new(),
            outcome: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Register an observer for [`GameEvent`]s
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns `false` if `id` was not registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    /// Number of registered observers
    #[inline]
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Load a dictionary from `source`, keep it for [`new_game`](Self::new_game)
    /// and select the first target
    ///
    /// # Errors
    ///
    /// - `GameError::DictionaryLoad` if the source fails
    /// - `GameError::EmptyDictionary` if it holds no usable word
    ///
    /// On error the engine is left untouched.
    pub fn initialize(&mut self, source: &impl DictionarySource) -> Result<Target, GameError> {
        let dictionary = source.load().map_err(|err| {
            warn!(error = %err, "dictionary load failed");
            GameError::DictionaryLoad(err)
        })?;

        let target = pick_target(&mut self.rng, &dictionary, self.config.word_length())?;
        self.dictionary = Some(dictionary);
        self.start(target.clone());
        Ok(target)
    }

    /// Start a new game with a fresh target from the dictionary given to
    /// [`initialize`](Self::initialize)
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no dictionary was loaded or it
    /// holds no usable word.
    pub fn new_game(&mut self) -> Result<Target, GameError> {
        let dictionary = self.dictionary.as_ref().ok_or(GameError::EmptyDictionary)?;
        let target = pick_target(&mut self.rng, dictionary, self.config.word_length())?;
        self.start(target.clone());
        Ok(target)
    }

    /// Pick a target uniformly at random from `dictionary` and reset the game
    ///
    /// Only alphabetic words of the configured length are eligible.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no word is eligible; nothing is
    /// changed in that case.
    pub fn select_target(&mut self, dictionary: &Dictionary) -> Result<Target, GameError> {
        let target = pick_target(&mut self.rng, dictionary, self.config.word_length())?;
        self.start(target.clone());
        Ok(target)
    }

    /// Append a letter to the current input
    ///
    /// Returns `false` without changing anything if the game is not in
    /// progress, the input is full, or `letter` is not an ASCII letter.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if !self.accepts_input()
            || self.current_input.len() >= self.config.word_length()
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }

        self.current_input.push(letter.to_ascii_lowercase());
        true
    }

    /// Like [`add_letter`](Self::add_letter), for keys that arrive as strings
    ///
    /// Anything other than exactly one character is rejected.
    pub fn add_key(&mut self, key: &str) -> bool {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.add_letter(letter),
            _ => false,
        }
    }

    /// Remove the last letter of the current input
    pub fn remove_letter(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.current_input.pop().is_some()
    }

    /// Score the current input against the target
    ///
    /// Returns `None` without changing anything if the game is not in
    /// progress or the input is incomplete. Otherwise records the guess,
    /// emits `Won` or `Lost` when the game ends, clears the input and
    /// returns the feedback.
    pub fn submit_guess(&mut self) -> Option<Feedback> {
        if !self.accepts_input() || self.current_input.len() != self.config.word_length() {
            trace!(len = self.current_input.len(), "guess rejected");
            return None;
        }

        let target = self.target.as_ref()?;
        let feedback = score_guess(&self.current_input, &target.word)?;

        let guess = std::mem::take(&mut self.current_input);
        let solved = guess == target.word;
        self.history.push(guess);
        self.results.push(feedback.clone());

        let attempts = self.history.len();
        let event = if solved {
            self.outcome = Some(Outcome::Won);
            info!(attempts, "game won");
            Some(GameEvent::Won {
                word: target.word.clone(),
                definition: target.definition.clone(),
                attempts,
            })
        } else if attempts == self.config.max_attempts() {
            self.outcome = Some(Outcome::Lost);
            info!(attempts, "game lost");
            Some(GameEvent::Lost {
                word: target.word.clone(),
                definition: target.definition.clone(),
                attempts: self.config.max_attempts(),
            })
        } else {
            None
        };

        if let Some(event) = event {
            self.emit(&event);
        }

        Some(feedback)
    }

    /// Owned snapshot of the current state
    #[must_use]
    pub fn state(&self) -> GameState {
        let (target_word, target_definition) = self
            .target
            .as_ref()
            .map(|t| (t.word.clone(), t.definition.clone()))
            .unwrap_or_default();

        GameState {
            status: self.status(),
            attempt_index: self.history.len(),
            current_input: self.current_input.clone(),
            history: self.history.clone(),
            results: self.results.clone(),
            target_word,
            target_definition,
            is_over: self.is_over(),
            is_won: self.outcome == Some(Outcome::Won),
            is_lost: self.outcome == Some(Outcome::Lost),
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (&self.target, self.outcome) {
            (None, _) => GameStatus::AwaitingFirstWord,
            (Some(_), None) => GameStatus::InProgress,
            (Some(_), Some(Outcome::Won)) => GameStatus::Won,
            (Some(_), Some(Outcome::Lost)) => GameStatus::Lost,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Letters typed for the guess in progress
    #[inline]
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Number of submitted guesses
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    fn accepts_input(&self) -> bool {
        self.status() == GameStatus::InProgress
    }

    fn start(&mut self, target: Target) {
        self.current_input.clear();
        self.history.clear();
        self.results.clear();
        self.outcome = None;

        let event = GameEvent::TargetSelected {
            word: target.word.clone(),
            definition: target.definition.clone(),
        };
        self.target = Some(target);
        self.emit(&event);
    }

    fn emit(&mut self, event: &GameEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }
}

/// Choose an eligible word uniformly at random
fn pick_target<R: Rng>(
    rng: &mut R,
    dictionary: &Dictionary,
    word_length: usize,
) -> Result<Target, GameError> {
    let eligible: Vec<(&str, &str)> = dictionary
        .iter()
        .filter(|(word, _)| Word::new(word, word_length).is_ok())
        .collect();

    if eligible.is_empty() {
        warn!(words = dictionary.len(), word_length, "no eligible target words");
        return Err(GameError::EmptyDictionary);
    }

    let (word, definition) = eligible[rng.random_range(0..eligible.len())];
    debug!(eligible = eligible.len(), "selected new target");

    Ok(Target {
        word: word.to_ascii_lowercase(),
        definition: definition.to_string(),
    })
}

//! Engine integration tests: target selection, input handling and game end.

use std::cell::RefCell;
use std::rc::Rc;
use wordle_game::core::{LetterResult, score_guess};
use wordle_game::dictionary::{Dictionary, DictionaryError, DictionarySource};
use wordle_game::engine::{GameConfig, GameError, GameEvent, GameStatus, GuessEngine};

fn test_dictionary() -> Dictionary {
    Dictionary::from_entries([
        ("crane", "A machine for lifting."),
        ("slate", "A fine-grained rock."),
        ("stare", "To look fixedly."),
        ("speed", "Rate of motion."),
        ("toast", "Browned bread."),
    ])
}

fn stare_only() -> Dictionary {
    Dictionary::from_entries([("stare", "To look fixedly.")])
}

fn engine_for(dict: &Dictionary) -> GuessEngine {
    let mut engine = GuessEngine::with_seed(GameConfig::default(), 42);
    engine.select_target(dict).unwrap();
    engine
}

fn type_word(engine: &mut GuessEngine, word: &str) {
    for letter in word.chars() {
        engine.add_letter(letter);
    }
}

fn record_events(engine: &mut GuessEngine) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    engine.subscribe(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));
    events
}

struct FailingSource;

impl DictionarySource for FailingSource {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        Err(DictionaryError::Io {
            path: "lib/clean.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        })
    }
}

// =============================================================================
// Target Selection
// =============================================================================

#[test]
fn test_selected_word_comes_from_dictionary() {
    let dict = test_dictionary();
    for seed in 0..20 {
        let mut engine = GuessEngine::with_seed(GameConfig::default(), seed);
        let target = engine.select_target(&dict).unwrap();

        assert_eq!(dict.get(&target.word), Some(target.definition.as_str()));
        let state = engine.state();
        assert_eq!(state.target_word, target.word);
        assert_eq!(state.target_definition, target.definition);
    }
}

#[test]
fn test_same_seed_same_target() {
    let dict = test_dictionary();
    let mut first = GuessEngine::with_seed(GameConfig::default(), 7);
    let mut second = GuessEngine::with_seed(GameConfig::default(), 7);

    for _ in 0..5 {
        assert_eq!(
            first.select_target(&dict).unwrap(),
            second.select_target(&dict).unwrap()
        );
    }
}

#[test]
fn test_every_word_eventually_selected() {
    let dict = test_dictionary();
    let mut engine = GuessEngine::with_seed(GameConfig::default(), 5);
    let mut seen = std::collections::BTreeSet::new();

    for _ in 0..200 {
        seen.insert(engine.select_target(&dict).unwrap().word);
    }

    assert_eq!(seen.len(), dict.len());
}

#[test]
fn test_empty_dictionary_fails() {
    let mut engine = GuessEngine::with_seed(GameConfig::default(), 1);
    let result = engine.select_target(&Dictionary::new());

    assert!(matches!(result, Err(GameError::EmptyDictionary)));
    assert_eq!(engine.status(), GameStatus::AwaitingFirstWord);
}

#[test]
fn test_target_selected_event() {
    let mut engine = GuessEngine::with_seed(GameConfig::default(), 1);
    let events = record_events(&mut engine);

    let target = engine.select_target(&stare_only()).unwrap();

    assert_eq!(
        *events.borrow(),
        vec![GameEvent::TargetSelected {
            word: target.word,
            definition: target.definition,
        }]
    );
}

#[test]
fn test_initialize_load_failure_is_distinct() {
    let mut engine = GuessEngine::with_seed(GameConfig::default(), 1);
    let events = record_events(&mut engine);

    let result = engine.initialize(&FailingSource);

    assert!(matches!(result, Err(GameError::DictionaryLoad(_))));
    assert_eq!(engine.status(), GameStatus::AwaitingFirstWord);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_initialize_empty_source() {
    let mut engine = GuessEngine::with_seed(GameConfig::default(), 1);
    let result = engine.initialize(&Dictionary::new());

    assert!(matches!(result, Err(GameError::EmptyDictionary)));
    assert_eq!(engine.status(), GameStatus::AwaitingFirstWord);
}

#[test]
fn test_initialize_malformed_json_is_load_failure() {
    let mut engine = GuessEngine::with_seed(GameConfig::default(), 1);
    let err = Dictionary::from_json_str("{ broken").unwrap_err();

    struct Broken(std::sync::Mutex<Option<DictionaryError>>);
    impl DictionarySource for Broken {
        fn load(&self) -> Result<Dictionary, DictionaryError> {
            Err(self.0.lock().unwrap().take().unwrap())
        }
    }

    let result = engine.initialize(&Broken(std::sync::Mutex::new(Some(err))));
    assert!(matches!(result, Err(GameError::DictionaryLoad(_))));
}

// =============================================================================
// Input Accumulation
// =============================================================================

#[test]
fn test_add_letter_fills_exactly_word_length() {
    let mut engine = engine_for(&stare_only());

    for letter in ['a', 'b', 'c', 'd', 'e'] {
        assert!(engine.add_letter(letter));
    }
    assert!(!engine.add_letter('f'));
    assert_eq!(engine.current_input(), "abcde");
}

#[test]
fn test_add_letter_rejects_non_letters() {
    let mut engine = engine_for(&stare_only());

    for key in ['1', '!', ' ', '\n', 'é', 'ß'] {
        assert!(!engine.add_letter(key), "accepted {key:?}");
    }
    assert!(!engine.add_key("ab"));
    assert_eq!(engine.current_input(), "");
}

#[test]
fn test_add_letter_lowercases() {
    let mut engine = engine_for(&stare_only());

    assert!(engine.add_letter('S'));
    assert_eq!(engine.state().current_input, "s");
}

#[test]
fn test_remove_letter() {
    let mut engine = engine_for(&stare_only());

    assert!(!engine.remove_letter());

    type_word(&mut engine, "sta");
    assert!(engine.remove_letter());
    assert_eq!(engine.current_input(), "st");
}

#[test]
fn test_incomplete_guess_not_submitted() {
    let mut engine = engine_for(&stare_only());
    type_word(&mut engine, "star");

    assert!(engine.submit_guess().is_none());

    let state = engine.state();
    assert_eq!(state.attempt_index, 0);
    assert!(state.history.is_empty());
    assert_eq!(state.current_input, "star");
}

// =============================================================================
// Scoring through the engine
// =============================================================================

#[test]
fn test_submit_returns_feedback_and_records_history() {
    let mut engine = engine_for(&stare_only());
    type_word(&mut engine, "stamp");

    let feedback = engine.submit_guess().unwrap();
    assert_eq!(
        feedback.as_slice(),
        &[
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::Correct,
            LetterResult::Absent,
            LetterResult::Absent,
        ]
    );

    let state = engine.state();
    assert_eq!(state.attempt_index, 1);
    assert_eq!(state.history, vec!["stamp".to_string()]);
    assert_eq!(state.results, vec![feedback]);
    assert!(state.current_input.is_empty());
    assert_eq!(state.status, GameStatus::InProgress);
}

#[test]
fn test_guess_validity_not_checked_against_dictionary() {
    let mut engine = engine_for(&stare_only());
    type_word(&mut engine, "zzzzz");

    assert!(engine.submit_guess().is_some());
}

#[test]
fn test_score_guess_reference_cases() {
    let all = |r| vec![r; 5];
    assert_eq!(
        score_guess("stare", "stare").unwrap().as_slice(),
        all(LetterResult::Correct).as_slice()
    );
    assert_eq!(
        score_guess("rates", "stare").unwrap().as_slice(),
        all(LetterResult::Present).as_slice()
    );
    assert!(score_guess("speed", "speed").unwrap().is_perfect());
}

// =============================================================================
// Game End
// =============================================================================

#[test]
fn test_win_on_first_attempt() {
    let mut engine = engine_for(&stare_only());
    let events = record_events(&mut engine);

    type_word(&mut engine, "stare");
    engine.submit_guess().unwrap();

    let state = engine.state();
    assert!(state.is_over);
    assert!(state.is_won);
    assert!(!state.is_lost);
    assert_eq!(state.status, GameStatus::Won);
    assert_eq!(
        *events.borrow(),
        vec![GameEvent::Won {
            word: "stare".to_string(),
            definition: "To look fixedly.".to_string(),
            attempts: 1,
        }]
    );
}

#[test]
fn test_win_on_last_attempt_is_not_a_loss() {
    let mut engine = engine_for(&stare_only());
    let events = record_events(&mut engine);

    for _ in 0..5 {
        type_word(&mut engine, "rates");
        engine.submit_guess().unwrap();
    }
    type_word(&mut engine, "stare");
    engine.submit_guess().unwrap();

    let state = engine.state();
    assert!(state.is_won);
    assert!(!state.is_lost);
    assert_eq!(events.borrow().len(), 1);
    assert!(matches!(
        events.borrow()[0],
        GameEvent::Won { attempts: 6, .. }
    ));
}

#[test]
fn test_loss_after_max_attempts() {
    let mut engine = engine_for(&stare_only());
    let events = record_events(&mut engine);

    for _ in 0..5 {
        type_word(&mut engine, "rates");
        engine.submit_guess().unwrap();
    }

    assert!(!engine.is_over());
    assert!(events.borrow().is_empty());

    type_word(&mut engine, "rates");
    engine.submit_guess().unwrap();

    let state = engine.state();
    assert!(state.is_over);
    assert!(state.is_lost);
    assert!(!state.is_won);
    assert_eq!(state.attempt_index, 6);
    assert_eq!(
        *events.borrow(),
        vec![GameEvent::Lost {
            word: "stare".to_string(),
            definition: "To look fixedly.".to_string(),
            attempts: 6,
        }]
    );
}

#[test]
fn test_no_mutation_after_game_over() {
    let mut engine = engine_for(&stare_only());
    type_word(&mut engine, "stare");
    engine.submit_guess().unwrap();

    let events = record_events(&mut engine);
    let before = engine.state();

    assert!(!engine.add_letter('a'));
    assert!(!engine.remove_letter());
    assert!(engine.submit_guess().is_none());

    assert_eq!(engine.state(), before);
    assert!(events.borrow().is_empty());
}

#[test]
fn test_custom_max_attempts() {
    let config = GameConfig::new(5, 2).unwrap();
    let mut engine = GuessEngine::with_seed(config, 9);
    engine.select_target(&stare_only()).unwrap();
    let events = record_events(&mut engine);

    for _ in 0..2 {
        type_word(&mut engine, "crane");
        engine.submit_guess().unwrap();
    }

    assert_eq!(engine.status(), GameStatus::Lost);
    assert!(matches!(
        events.borrow()[0],
        GameEvent::Lost { attempts: 2, .. }
    ));
}

#[test]
fn test_state_snapshot_is_independent() {
    let mut engine = engine_for(&stare_only());
    type_word(&mut engine, "crane");
    engine.submit_guess().unwrap();

    let mut snapshot = engine.state();
    snapshot.history.push("bogus".to_string());
    snapshot.current_input.push('x');

    let fresh = engine.state();
    assert_eq!(fresh.history, vec!["crane".to_string()]);
    assert!(fresh.current_input.is_empty());
}

#[test]
fn test_state_invariants_hold_through_a_game() {
    let dict = test_dictionary();
    let mut engine = engine_for(&dict);
    let target = engine.state().target_word;

    for guess in ["crane", "slate", "toast", "speed", "stare", "crane"] {
        type_word(&mut engine, guess);
        engine.submit_guess();

        let state = engine.state();
        assert_eq!(state.is_over, state.is_won || state.is_lost);
        assert!(!(state.is_won && state.is_lost));
        assert_eq!(state.history.len(), state.attempt_index);
        if state.is_won {
            assert_eq!(state.history.last(), Some(&target));
        }
        if state.is_lost {
            assert_eq!(state.attempt_index, 6);
        }
    }

    assert!(engine.is_over());
}

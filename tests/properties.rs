use lingo_trainer::config::{ATTEMPT_LIMIT, HINT_PLACEHOLDER, round_score};
use lingo_trainer::core::{Feedback, Game, GameError, GameStatus, Mark, Round, classify};
use proptest::prelude::*;

fn word(length: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('A', 'F'), length)
        .prop_map(|chars| chars.into_iter().collect())
}

fn any_word() -> impl Strategy<Value = String> {
    (5usize..=7).prop_flat_map(word)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A word guessed against itself is fully correct
    #[test]
    fn identical_attempt_all_correct(w in any_word()) {
        let feedback = Feedback::calculate(&w, &w);
        prop_assert!(feedback.marks().iter().all(|&m| m == Mark::Correct));
        prop_assert!(feedback.is_word_guessed());
        prop_assert!(feedback.is_attempt_valid());
    }

    /// Attempts of another length are invalid at every word position
    #[test]
    fn wrong_length_all_invalid(w in any_word(), attempt in "[A-F]{0,9}") {
        prop_assume!(attempt.chars().count() != w.chars().count());
        let feedback = Feedback::calculate(&attempt, &w);
        prop_assert_eq!(feedback.marks().len(), w.chars().count());
        prop_assert!(feedback.marks().iter().all(|&m| m == Mark::Invalid));
        prop_assert!(!feedback.is_attempt_valid());
    }

    /// Correct and present marks never claim more copies of a letter than the word has
    #[test]
    fn marks_respect_letter_counts((w, attempt) in (5usize..=7).prop_flat_map(|n| (word(n), word(n)))) {
        let marks = classify(&attempt, &w);
        prop_assert_eq!(marks.len(), w.len());

        for letter in 'A'..='F' {
            let in_word = w.chars().filter(|&c| c == letter).count();
            let claimed = attempt
                .chars()
                .zip(&marks)
                .filter(|&(c, m)| c == letter && *m != Mark::Absent)
                .count();
            prop_assert!(claimed <= in_word);
        }

        for ((a, b), m) in attempt.chars().zip(w.chars()).zip(&marks) {
            prop_assert_eq!(a == b, *m == Mark::Correct);
        }
    }

    /// The hint keeps the word length and only ever reveals letters
    #[test]
    fn hint_is_monotonic(
        (w, attempts) in (5usize..=7).prop_flat_map(|n| {
            (word(n), proptest::collection::vec(prop_oneof![word(n), word(n + 1)], 1..=ATTEMPT_LIMIT))
        })
    ) {
        let mut round = Round::new(w.clone());
        let mut previous = round.hint().to_string();

        for attempt in &attempts {
            round.guess(attempt).unwrap();
            let hint = round.hint().to_string();
            prop_assert_eq!(hint.chars().count(), w.chars().count());

            for ((before, after), secret) in previous.chars().zip(hint.chars()).zip(w.chars()) {
                if before != HINT_PLACEHOLDER {
                    prop_assert_eq!(before, after);
                }
                prop_assert!(after == HINT_PLACEHOLDER || after == secret);
            }
            previous = hint;
        }
    }

    /// Winning on attempt k adds exactly 5 * (5 - k) + 5
    #[test]
    fn win_score(w in any_word(), misses in 0usize..ATTEMPT_LIMIT) {
        let miss: String = std::iter::repeat_n('Z', w.chars().count()).collect();
        let mut game = Game::new(1);
        game.start_new_round(w.clone()).unwrap();
        for _ in 0..misses {
            game.guess(&miss).unwrap();
        }
        game.guess(&w).unwrap();

        let expected = 5 * (5 - (misses as u32 + 1)) + 5;
        prop_assert_eq!(game.score(), expected);
        prop_assert_eq!(game.score(), round_score(misses + 1));
        prop_assert_eq!(game.status(), GameStatus::WaitingForRound);
    }

    /// Score never decreases and the game only leaves Playing through a win or elimination
    #[test]
    fn score_non_decreasing(
        rounds in proptest::collection::vec((any_word(), proptest::collection::vec(any::<bool>(), 1..=ATTEMPT_LIMIT)), 1..6)
    ) {
        let mut game = Game::new(1);
        let mut last_score = 0;

        'rounds: for (w, hits) in rounds {
            if game.start_new_round(w.clone()).is_err() {
                break;
            }
            for hit in hits {
                let attempt = if hit { w.clone() } else { "ZZZZZ".to_string() };
                game.guess(&attempt).unwrap();
                prop_assert!(game.score() >= last_score);
                last_score = game.score();
                match game.status() {
                    GameStatus::Playing => {}
                    GameStatus::WaitingForRound => continue 'rounds,
                    GameStatus::Eliminated => break 'rounds,
                }
            }
            // Round neither won nor lost: the game is still playing
            prop_assert!(game.is_playing());
            break;
        }
    }
}

#[test]
fn actions_in_wrong_state_fail() {
    let mut game = Game::new(1);
    assert_eq!(
        game.guess("BAARD"),
        Err(GameError::GameState(GameStatus::WaitingForRound))
    );

    game.start_new_round("BAARD").unwrap();
    assert_eq!(
        game.start_new_round("BAARD"),
        Err(GameError::GameState(GameStatus::Playing))
    );
}

mod common;

use common::*;
use game_core::{summarize, validate_game, GameValidationError};
use game_types::GameKind;

#[test]
fn test_catalogue_games_are_valid() {
    for game in create_catalogue() {
        assert_eq!(validate_game(&game), Ok(()), "{} should be valid", game.id());
    }
}

#[test]
fn test_invalid_games_of_each_type() {
    let quiz = create_quiz("quiz-x", &[("Pick one", &["Only"][..], "Only")]);
    assert!(matches!(
        validate_game(&quiz),
        Err(GameValidationError::InvalidQuestion { .. })
    ));

    let word_search = create_word_search("ws-x", &["PEAR"], &[("PEAR", (0, 0), (0, 4))]);
    assert!(matches!(
        validate_game(&word_search),
        Err(GameValidationError::InvalidWordPlacement { .. })
    ));

    let crossword = create_crossword("cw-x", 2, 2, &[("COLD", 0, 0)]);
    assert!(matches!(
        validate_game(&crossword),
        Err(GameValidationError::InvalidClue { .. })
    ));

    let anagrams = create_anagrams("an-x", &["EARTH", " "]);
    assert!(matches!(
        validate_game(&anagrams),
        Err(GameValidationError::InvalidAnagrams { .. })
    ));
}

#[test]
fn test_word_search_backwards_word() {
    let game = create_word_search("ws-rev", &["RAEP"], &[("PEAR", (0, 0), (0, 3))]);
    assert_eq!(validate_game(&game), Ok(()));
}

#[test]
fn test_summary_over_catalogue() {
    let catalogue = create_catalogue();
    let plays = vec![
        create_play("quiz-1", 1, 30),
        create_play("wordsearch-1", 1, 60),
        create_play("crossword-1", 1, 90),
        create_play("anagrams-1", 2, 15),
        create_play("anagrams-1", 3, 25),
    ];

    let summary = summarize(&plays, &catalogue, 2);
    assert_eq!(summary.total_plays, 5);
    assert_eq!(summary.average_score, 1.6);
    assert_eq!(summary.average_time, 44.0);
    assert_eq!(summary.subscriber_count, 2);

    let anagrams = summary
        .plays_per_type
        .iter()
        .find(|count| count.name == GameKind::Anagrams.to_string())
        .expect("anagram bucket");
    assert_eq!(anagrams.value, 2);
    assert_eq!(summary.plays_per_type.len(), 4);
}

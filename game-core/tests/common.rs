#![allow(dead_code)]

use game_types::{
    AnagramData, AnagramGame, ClueDirection, CrosswordClue, CrosswordData, CrosswordGame, Game,
    GameCategory, GameDifficulty, GameMeta, GridCell, GridSize, Play, QuizGame, QuizQuestion,
    WordSearchData, WordSearchGame, WordSpan,
};

/// Creates game metadata with the given id and title
pub fn create_meta(id: &str, title: &str) -> GameMeta {
    GameMeta {
        id: id.to_string(),
        title: title.to_string(),
        difficulty: GameDifficulty::Easy,
        category: GameCategory::Vocabulary,
    }
}

/// Creates a quiz with one question per (question, options, answer) triple
pub fn create_quiz(id: &str, questions: &[(&str, &[&str], &str)]) -> Game {
    Game::Quiz(QuizGame {
        meta: create_meta(id, "Test Quiz"),
        data: questions
            .iter()
            .map(|(question, options, answer)| QuizQuestion {
                question: question.to_string(),
                options: options.iter().map(|o| o.to_string()).collect(),
                correct_answer: answer.to_string(),
            })
            .collect(),
    })
}

/// Creates a word search whose rows are given as strings
pub fn create_word_search(
    id: &str,
    rows: &[&str],
    words: &[(&str, (u32, u32), (u32, u32))],
) -> Game {
    Game::WordSearch(WordSearchGame {
        meta: create_meta(id, "Test Word Search"),
        data: WordSearchData {
            grid: rows
                .iter()
                .map(|row| row.chars().map(|c| c.to_string()).collect())
                .collect(),
            words: words.iter().map(|(word, _, _)| word.to_string()).collect(),
            word_positions: words
                .iter()
                .map(|(word, start, end)| {
                    (
                        word.to_string(),
                        WordSpan {
                            start: GridCell {
                                row: start.0,
                                col: start.1,
                            },
                            end: GridCell {
                                row: end.0,
                                col: end.1,
                            },
                        },
                    )
                })
                .collect(),
        },
    })
}

/// Creates a crossword of the given size with across clues only
pub fn create_crossword(id: &str, rows: u32, cols: u32, answers: &[(&str, u32, u32)]) -> Game {
    Game::Crossword(CrosswordGame {
        meta: create_meta(id, "Test Crossword"),
        data: CrosswordData {
            size: GridSize { rows, cols },
            clues: answers
                .iter()
                .enumerate()
                .map(|(i, (answer, row, col))| CrosswordClue {
                    number: i as u32 + 1,
                    direction: ClueDirection::Across,
                    clue: format!("Clue for {answer}"),
                    answer: answer.to_string(),
                    row: *row,
                    col: *col,
                })
                .collect(),
        },
    })
}

/// Creates an anagram game from a word list
pub fn create_anagrams(id: &str, words: &[&str]) -> Game {
    Game::Anagrams(AnagramGame {
        meta: create_meta(id, "Test Anagrams"),
        data: AnagramData {
            words: words.iter().map(|w| w.to_string()).collect(),
        },
    })
}

/// Creates a recorded play for the given game
pub fn create_play(game_id: &str, score: u32, time: u32) -> Play {
    game_core::new_play(game_id, score, time).expect("test play should be valid")
}

/// One game of every type, all valid
pub fn create_catalogue() -> Vec<Game> {
    vec![
        create_quiz(
            "quiz-1",
            &[("Largest land animal?", &["Elephant", "Hippo"][..], "Elephant")],
        ),
        create_word_search("wordsearch-1", &["PEAR", "XXXX"], &[("PEAR", (0, 0), (0, 3))]),
        create_crossword("crossword-1", 3, 4, &[("COLD", 0, 0), ("ANT", 2, 1)]),
        create_anagrams("anagrams-1", &["LISTEN", "EARTH"]),
    ]
}

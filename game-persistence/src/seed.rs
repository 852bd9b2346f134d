use std::collections::BTreeMap;

use game_types::{
    AnagramData, AnagramGame, ClueDirection, CrosswordClue, CrosswordData, CrosswordGame, Game,
    GameCategory, GameDifficulty, GameMeta, GridCell, GridSize, QuizGame, QuizQuestion,
    WordSearchData, WordSearchGame, WordSpan,
};

fn meta(id: &str, title: &str, difficulty: GameDifficulty, category: GameCategory) -> GameMeta {
    GameMeta {
        id: id.to_string(),
        title: title.to_string(),
        difficulty,
        category,
    }
}

fn question(question: &str, options: [&str; 4], correct_answer: &str) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct_answer.to_string(),
    }
}

fn clue(
    number: u32,
    direction: ClueDirection,
    text: &str,
    answer: &str,
    row: u32,
    col: u32,
) -> CrosswordClue {
    CrosswordClue {
        number,
        direction,
        clue: text.to_string(),
        answer: answer.to_string(),
        row,
        col,
    }
}

fn fruit_word_search() -> WordSearchData {
    let rows = ["APPLES", "BANANA", "ORANGE", "GRAPES", "PEARST", "CHERRY"];
    // (word, row, last column); every word runs left to right from column 0
    let words = [
        ("APPLE", 0, 4),
        ("BANANA", 1, 5),
        ("ORANGE", 2, 5),
        ("GRAPES", 3, 5),
        ("PEAR", 4, 3),
        ("CHERRY", 5, 5),
    ];

    let word_positions: BTreeMap<String, WordSpan> = words
        .iter()
        .map(|&(word, row, end_col)| {
            (
                word.to_string(),
                WordSpan {
                    start: GridCell { row, col: 0 },
                    end: GridCell { row, col: end_col },
                },
            )
        })
        .collect();

    WordSearchData {
        grid: rows
            .iter()
            .map(|row| row.chars().map(|c| c.to_string()).collect())
            .collect(),
        words: words.iter().map(|(word, _, _)| word.to_string()).collect(),
        word_positions,
    }
}

/// The catalogue written on first start.
pub fn seed_games() -> Vec<Game> {
    vec![
        Game::Quiz(QuizGame {
            meta: meta("quiz-1", "Animal Trivia", GameDifficulty::Easy, GameCategory::Animals),
            data: vec![
                question(
                    "What is the largest land animal?",
                    ["Elephant", "Rhino", "Hippo", "Giraffe"],
                    "Elephant",
                ),
                question(
                    "Which bird is known for its beautiful tail feathers?",
                    ["Peacock", "Eagle", "Parrot", "Swan"],
                    "Peacock",
                ),
                question(
                    "What is a group of lions called?",
                    ["Pack", "Herd", "Pride", "Flock"],
                    "Pride",
                ),
            ],
        }),
        Game::Quiz(QuizGame {
            meta: meta("quiz-2", "Space Exploration", GameDifficulty::Medium, GameCategory::Space),
            data: vec![
                question(
                    "Which planet is known as the Red Planet?",
                    ["Mars", "Venus", "Jupiter", "Saturn"],
                    "Mars",
                ),
                question(
                    "Who was the first human to walk on the moon?",
                    ["Buzz Aldrin", "Yuri Gagarin", "Neil Armstrong", "Michael Collins"],
                    "Neil Armstrong",
                ),
                question(
                    "What is the name of the galaxy we live in?",
                    ["Andromeda", "Triangulum", "Whirlpool", "Milky Way"],
                    "Milky Way",
                ),
            ],
        }),
        Game::WordSearch(WordSearchGame {
            meta: meta(
                "wordsearch-1",
                "Fruity Fun",
                GameDifficulty::Easy,
                GameCategory::GeneralKnowledge,
            ),
            data: fruit_word_search(),
        }),
        Game::Crossword(CrosswordGame {
            meta: meta(
                "crossword-1",
                "Beginner Crossword",
                GameDifficulty::Easy,
                GameCategory::Vocabulary,
            ),
            data: CrosswordData {
                size: GridSize { rows: 5, cols: 5 },
                clues: vec![
                    clue(1, ClueDirection::Across, "Opposite of hot", "COLD", 0, 1),
                    clue(2, ClueDirection::Across, "A small insect", "ANT", 2, 0),
                    clue(3, ClueDirection::Across, "Not old", "NEW", 4, 2),
                    clue(1, ClueDirection::Down, "A feline pet", "CAT", 0, 1),
                    clue(4, ClueDirection::Down, "A vehicle", "CAR", 2, 4),
                ],
            },
        }),
        Game::Anagrams(AnagramGame {
            meta: meta(
                "anagrams-1",
                "Simple Scramble",
                GameDifficulty::Easy,
                GameCategory::Vocabulary,
            ),
            data: AnagramData {
                words: vec![
                    "LISTEN".to_string(),
                    "TRIANGLE".to_string(),
                    "EARTH".to_string(),
                ],
            },
        }),
    ]
}

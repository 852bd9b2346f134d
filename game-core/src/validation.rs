use game_types::{
    AnagramData, ClueDirection, CrosswordData, Game, GridCell, QuizQuestion, WordSearchData,
    WordSpan,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameValidationError {
    #[error("Game id must not be empty")]
    MissingId,
    #[error("Game title must not be empty")]
    MissingTitle,
    #[error("Question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },
    #[error("Word search grid is invalid: {reason}")]
    InvalidGrid { reason: String },
    #[error("Word '{word}' is not placed correctly: {reason}")]
    InvalidWordPlacement { word: String, reason: String },
    #[error("Crossword clue {number} {direction} is invalid: {reason}")]
    InvalidClue {
        number: u32,
        direction: String,
        reason: String,
    },
    #[error("Anagram list is invalid: {reason}")]
    InvalidAnagrams { reason: String },
}

/// Check a game definition submitted through the admin panel.
///
/// Only structural consistency is checked; whether a puzzle is fun or
/// solvable is up to its author.
pub fn validate_game(game: &Game) -> Result<(), GameValidationError> {
    let meta = game.meta();
    if meta.id.trim().is_empty() {
        return Err(GameValidationError::MissingId);
    }
    if meta.title.trim().is_empty() {
        return Err(GameValidationError::MissingTitle);
    }

    match game {
        Game::Quiz(quiz) => validate_quiz(&quiz.data),
        Game::WordSearch(word_search) => validate_word_search(&word_search.data),
        Game::Crossword(crossword) => validate_crossword(&crossword.data),
        Game::Anagrams(anagrams) => validate_anagrams(&anagrams.data),
    }
}

// An empty question list is the editor's starting template, so it passes.
fn validate_quiz(questions: &[QuizQuestion]) -> Result<(), GameValidationError> {
    for (index, question) in questions.iter().enumerate() {
        let invalid = |reason: &str| GameValidationError::InvalidQuestion {
            index: index + 1,
            reason: reason.to_string(),
        };

        if question.question.trim().is_empty() {
            return Err(invalid("question text is empty"));
        }
        if question.options.len() < 2 {
            return Err(invalid("at least two options are required"));
        }
        if !question.options.contains(&question.correct_answer) {
            return Err(invalid("correct answer is not one of the options"));
        }
    }
    Ok(())
}

fn validate_word_search(data: &WordSearchData) -> Result<(), GameValidationError> {
    let rows = data.grid.len();
    let cols = data.grid.first().map(Vec::len).unwrap_or(0);

    if rows == 0 || cols == 0 {
        return Err(GameValidationError::InvalidGrid {
            reason: "grid is empty".to_string(),
        });
    }
    if data.grid.iter().any(|row| row.len() != cols) {
        return Err(GameValidationError::InvalidGrid {
            reason: "rows have different lengths".to_string(),
        });
    }
    if data.grid.iter().flatten().any(|cell| cell.chars().count() != 1) {
        return Err(GameValidationError::InvalidGrid {
            reason: "every cell must hold exactly one letter".to_string(),
        });
    }

    for word in &data.words {
        let placement_error = |reason: &str| GameValidationError::InvalidWordPlacement {
            word: word.clone(),
            reason: reason.to_string(),
        };

        let span = data
            .word_positions
            .get(word)
            .ok_or_else(|| placement_error("no position given"))?;

        // a straight line between two cells of the grid stays inside it
        let in_grid = |cell: GridCell| (cell.row as usize) < rows && (cell.col as usize) < cols;
        if !in_grid(span.start) || !in_grid(span.end) {
            return Err(placement_error("position is outside the grid"));
        }

        let cells = span_cells(span).ok_or_else(|| placement_error("not a straight line"))?;

        let spelled: String = cells
            .iter()
            .map(|cell| data.grid[cell.row as usize][cell.col as usize].as_str())
            .collect::<String>()
            .to_uppercase();
        let target = word.to_uppercase();
        let reversed: String = target.chars().rev().collect();

        if spelled != target && spelled != reversed {
            return Err(placement_error("letters in the grid do not spell the word"));
        }
    }

    Ok(())
}

/// Cells covered by a span, start to end inclusive. `None` unless the span
/// is horizontal, vertical or a 45 degree diagonal.
fn span_cells(span: &WordSpan) -> Option<Vec<GridCell>> {
    let (start, end) = (span.start, span.end);
    let row_delta = end.row as i64 - start.row as i64;
    let col_delta = end.col as i64 - start.col as i64;

    if row_delta != 0 && col_delta != 0 && row_delta.abs() != col_delta.abs() {
        return None;
    }

    let steps = row_delta.abs().max(col_delta.abs());
    let (row_step, col_step) = (row_delta.signum(), col_delta.signum());

    let cells = (0..=steps)
        .map(|i| GridCell {
            row: (start.row as i64 + i * row_step) as u32,
            col: (start.col as i64 + i * col_step) as u32,
        })
        .collect();
    Some(cells)
}

// Crossings are not cross-checked. The bundled beginner puzzle
// has overlapping answers that disagree on a letter.
fn validate_crossword(data: &CrosswordData) -> Result<(), GameValidationError> {
    if data.size.rows == 0 || data.size.cols == 0 {
        return Err(GameValidationError::InvalidGrid {
            reason: "crossword size must be at least 1x1".to_string(),
        });
    }

    for clue in &data.clues {
        let direction = match clue.direction {
            ClueDirection::Across => "across",
            ClueDirection::Down => "down",
        };
        let invalid = |reason: &str| GameValidationError::InvalidClue {
            number: clue.number,
            direction: direction.to_string(),
            reason: reason.to_string(),
        };

        let length = clue.answer.trim().chars().count() as u32;
        if length == 0 {
            return Err(invalid("answer is empty"));
        }
        if clue.clue.trim().is_empty() {
            return Err(invalid("clue text is empty"));
        }

        let (last_row, last_col) = match clue.direction {
            ClueDirection::Across => (clue.row, clue.col.saturating_add(length - 1)),
            ClueDirection::Down => (clue.row.saturating_add(length - 1), clue.col),
        };
        if last_row >= data.size.rows || last_col >= data.size.cols {
            return Err(invalid("answer does not fit in the grid"));
        }
    }

    Ok(())
}

fn validate_anagrams(data: &AnagramData) -> Result<(), GameValidationError> {
    if data.words.is_empty() {
        return Err(GameValidationError::InvalidAnagrams {
            reason: "at least one word is required".to_string(),
        });
    }
    if data.words.iter().any(|word| word.trim().is_empty()) {
        return Err(GameValidationError::InvalidAnagrams {
            reason: "words must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::{
        AnagramGame, CrosswordClue, CrosswordGame, GameMeta, GridSize, QuizGame, WordSearchGame,
    };
    use std::collections::BTreeMap;

    fn meta(id: &str) -> GameMeta {
        GameMeta {
            id: id.to_string(),
            title: "Test Game".to_string(),
            ..Default::default()
        }
    }

    fn cell(row: u32, col: u32) -> GridCell {
        GridCell { row, col }
    }

    fn grid(rows: &[&str]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.chars().map(|c| c.to_string()).collect())
            .collect()
    }

    fn word_search(rows: &[&str], placements: &[(&str, GridCell, GridCell)]) -> Game {
        let word_positions: BTreeMap<String, WordSpan> = placements
            .iter()
            .map(|(word, start, end)| {
                (
                    word.to_string(),
                    WordSpan {
                        start: *start,
                        end: *end,
                    },
                )
            })
            .collect();

        Game::WordSearch(WordSearchGame {
            meta: meta("ws"),
            data: WordSearchData {
                grid: grid(rows),
                words: placements.iter().map(|(w, _, _)| w.to_string()).collect(),
                word_positions,
            },
        })
    }

    #[test]
    fn test_empty_quiz_template_is_valid() {
        let game = Game::Quiz(QuizGame {
            meta: meta("game-1"),
            data: Vec::new(),
        });
        assert_eq!(validate_game(&game), Ok(()));
    }

    #[test]
    fn test_blank_id_and_title_rejected() {
        let mut game = Game::Quiz(QuizGame {
            meta: meta("  "),
            data: Vec::new(),
        });
        assert_eq!(validate_game(&game), Err(GameValidationError::MissingId));

        game.meta_mut().id = "quiz-1".to_string();
        game.meta_mut().title = String::new();
        assert_eq!(validate_game(&game), Err(GameValidationError::MissingTitle));
    }

    #[test]
    fn test_quiz_answer_must_be_an_option() {
        let game = Game::Quiz(QuizGame {
            meta: meta("quiz"),
            data: vec![QuizQuestion {
                question: "Largest planet?".to_string(),
                options: vec!["Mars".to_string(), "Venus".to_string()],
                correct_answer: "Jupiter".to_string(),
            }],
        });

        let err = validate_game(&game).unwrap_err();
        assert!(matches!(err, GameValidationError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn test_word_search_accepts_all_directions() {
        let game = word_search(
            &["CATX", "XOXD", "XXWX", "GODX"],
            &[
                ("CAT", cell(0, 0), cell(0, 2)),
                ("COW", cell(0, 0), cell(2, 2)),
                ("DOG", cell(3, 2), cell(3, 0)),
                ("CXXG", cell(0, 0), cell(3, 0)),
            ],
        );
        assert_eq!(validate_game(&game), Ok(()));
    }

    #[test]
    fn test_word_search_rejects_bent_span() {
        let game = word_search(&["CAT", "XXX"], &[("CAT", cell(0, 0), cell(1, 2))]);
        let err = validate_game(&game).unwrap_err();
        assert!(matches!(err, GameValidationError::InvalidWordPlacement { .. }));
    }

    #[test]
    fn test_word_search_rejects_wrong_letters_and_bounds() {
        let wrong = word_search(&["CAT"], &[("DOG", cell(0, 0), cell(0, 2))]);
        assert!(validate_game(&wrong).is_err());

        let outside = word_search(&["CAT"], &[("CATS", cell(0, 0), cell(0, 3))]);
        assert!(validate_game(&outside).is_err());
    }

    #[test]
    fn test_word_search_rejects_far_out_of_bounds_span() {
        let game = word_search(&["CAT"], &[("CAT", cell(0, 0), cell(0, 2_000_000_000))]);
        assert_eq!(
            validate_game(&game),
            Err(GameValidationError::InvalidWordPlacement {
                word: "CAT".to_string(),
                reason: "position is outside the grid".to_string(),
            })
        );

        let game = word_search(&["CAT"], &[("CAT", cell(u32::MAX, u32::MAX), cell(0, 0))]);
        assert!(matches!(
            validate_game(&game),
            Err(GameValidationError::InvalidWordPlacement { .. })
        ));
    }

    #[test]
    fn test_word_search_rejects_ragged_grid() {
        let game = word_search(&["CAT", "XX"], &[]);
        assert!(matches!(
            validate_game(&game),
            Err(GameValidationError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_crossword_answer_must_fit() {
        let mut data = CrosswordData {
            size: GridSize { rows: 5, cols: 5 },
            clues: vec![CrosswordClue {
                number: 1,
                direction: ClueDirection::Across,
                clue: "Opposite of hot".to_string(),
                answer: "COLD".to_string(),
                row: 0,
                col: 1,
            }],
        };
        let game = Game::Crossword(CrosswordGame {
            meta: meta("cw"),
            data: data.clone(),
        });
        assert_eq!(validate_game(&game), Ok(()));

        data.clues[0].col = 2;
        let game = Game::Crossword(CrosswordGame {
            meta: meta("cw"),
            data,
        });
        let err = validate_game(&game).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Crossword clue 1 across is invalid: answer does not fit in the grid"
        );
    }

    #[test]
    fn test_anagrams_need_words() {
        let game = Game::Anagrams(AnagramGame {
            meta: meta("anagrams"),
            data: AnagramData { words: Vec::new() },
        });
        assert!(matches!(
            validate_game(&game),
            Err(GameValidationError::InvalidAnagrams { .. })
        ));
    }
}

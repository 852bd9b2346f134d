use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub type GameId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameCategory {
    #[default]
    #[serde(rename = "General Knowledge")]
    GeneralKnowledge,
    Animals,
    Space,
    Vocabulary,
}

/// The puzzle type of a game, i.e. the `type` tag on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameKind {
    Quiz,
    WordSearch,
    Crossword,
    Anagrams,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameKind::Quiz => "Quiz",
            GameKind::WordSearch => "WordSearch",
            GameKind::Crossword => "Crossword",
            GameKind::Anagrams => "Anagrams",
        };
        f.write_str(name)
    }
}

/// Fields shared by every game regardless of its puzzle type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameMeta {
    pub id: GameId,
    pub title: String,
    pub difficulty: GameDifficulty,
    pub category: GameCategory,
}

/// A game definition. The `type` field selects the shape of `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export)]
pub enum Game {
    Quiz(QuizGame),
    WordSearch(WordSearchGame),
    Crossword(CrosswordGame),
    Anagrams(AnagramGame),
}

impl Game {
    pub fn meta(&self) -> &GameMeta {
        match self {
            Game::Quiz(game) => &game.meta,
            Game::WordSearch(game) => &game.meta,
            Game::Crossword(game) => &game.meta,
            Game::Anagrams(game) => &game.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut GameMeta {
        match self {
            Game::Quiz(game) => &mut game.meta,
            Game::WordSearch(game) => &mut game.meta,
            Game::Crossword(game) => &mut game.meta,
            Game::Anagrams(game) => &mut game.meta,
        }
    }

    pub fn id(&self) -> &str {
        &self.meta().id
    }

    pub fn title(&self) -> &str {
        &self.meta().title
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Game::Quiz(_) => GameKind::Quiz,
            Game::WordSearch(_) => GameKind::WordSearch,
            Game::Crossword(_) => GameKind::Crossword,
            Game::Anagrams(_) => GameKind::Anagrams,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuizGame {
    #[serde(flatten)]
    pub meta: GameMeta,
    pub data: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordSearchGame {
    #[serde(flatten)]
    pub meta: GameMeta,
    pub data: WordSearchData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WordSearchData {
    pub grid: Vec<Vec<String>>,
    pub words: Vec<String>,
    pub word_positions: BTreeMap<String, WordSpan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordSpan {
    pub start: GridCell,
    pub end: GridCell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrosswordGame {
    #[serde(flatten)]
    pub meta: GameMeta,
    pub data: CrosswordData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrosswordData {
    pub size: GridSize,
    pub clues: Vec<CrosswordClue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ClueDirection {
    Across,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrosswordClue {
    pub number: u32,
    pub direction: ClueDirection,
    pub clue: String,
    pub answer: String,
    pub row: u32,
    pub col: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnagramGame {
    #[serde(flatten)]
    pub meta: GameMeta,
    pub data: AnagramData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnagramData {
    pub words: Vec<String>,
}

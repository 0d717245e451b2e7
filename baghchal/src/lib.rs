//! Rules engine and computer opponents for Bagh-Chal style hunt games.
//!
//! The game is played on a grid of intersections connected by lines: orthogonal lines
//! join every intersection, diagonal lines only leave intersections whose coordinates sum
//! to an even number. The predator side captures prey by jumping over them along a line.
//! The prey side starts on a ring of border cells around the board and must bring every
//! piece onto the board before any of them may move along the lines.
//!
//! [`board`] holds the board model and its legality rules, [`strategy`] the computer
//! players, and [`game`] the turn order and end-of-game rules.

pub mod board;
pub mod game;
pub mod strategy;

use std::fmt;
use std::io;

use log::debug;

use crate::error::Result;
use crate::model::chain_state::ChainState;
use crate::model::markov_chain::MarkovChain;

/// Number of cells on the board, the last one ends the game.
pub const BOARD_SIZE: u32 = 100;

/// Highest dice face.
pub const DICE_MAX: u32 = 6;

/// Ladders and snakes as `(from, to)` pairs.
///
/// A pair climbing the board (`from < to`) is a ladder, otherwise a snake.
pub const TRANSITIONS: [(u32, u32); 20] = [
	(13, 4),
	(85, 17),
	(95, 67),
	(97, 58),
	(66, 89),
	(87, 31),
	(57, 83),
	(91, 25),
	(28, 50),
	(35, 11),
	(8, 30),
	(41, 62),
	(81, 43),
	(69, 32),
	(20, 39),
	(33, 70),
	(79, 99),
	(23, 76),
	(15, 47),
	(61, 14),
];

/// Forced move attached to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jump {
	Ladder(u32),
	Snake(u32),
}

impl Jump {
	pub fn target(self) -> u32 {
		match self {
			Jump::Ladder(to) | Jump::Snake(to) => to,
		}
	}
}

/// A cell of the snakes-and-ladders board.
///
/// Cells are identified by their number alone.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
	pub number: u32,
	pub jump: Option<Jump>,
}

impl Cell {
	pub fn new(number: u32) -> Self {
		Self { number, jump: None }
	}
}

impl PartialEq for Cell {
	fn eq(&self, other: &Self) -> bool {
		self.number == other.number
	}
}

impl Eq for Cell {}

impl fmt::Display for Cell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.number)
	}
}

impl ChainState for Cell {
	fn is_terminal(&self) -> bool {
		self.number == BOARD_SIZE
	}

	/// Renders `[n]` followed by an arrow, annotated with the ladder or
	/// snake leaving the cell. The last cell gets no arrow.
	fn render(&self, out: &mut dyn io::Write) -> io::Result<()> {
		write!(out, "{self}")?;
		if self.is_terminal() {
			return Ok(());
		}
		match self.jump {
			Some(Jump::Ladder(to)) => write!(out, "-ladder to {to} -> "),
			Some(Jump::Snake(to)) => write!(out, "-snake to {to} -> "),
			None => write!(out, " -> "),
		}
	}
}

/// Builds the 100 cells of the board with their ladders and snakes.
pub fn create_board() -> Vec<Cell> {
	let mut cells: Vec<Cell> = (1..=BOARD_SIZE).map(Cell::new).collect();
	for (from, to) in TRANSITIONS {
		let jump = if from < to { Jump::Ladder(to) } else { Jump::Snake(to) };
		cells[(from - 1) as usize].jump = Some(jump);
	}
	cells
}

/// Fills `chain` with every cell and every legal move of the board.
///
/// # Behavior
/// - Cells are inserted in board order, so the first node is cell 1.
/// - A cell with a ladder or a snake has a single transition, to its target.
/// - Any other cell has one transition per dice face that stays on the board.
pub fn fill_chain(chain: &mut MarkovChain<Cell>) -> Result<()> {
	let cells = create_board();
	let ids = cells
		.iter()
		.map(|cell| chain.get_or_insert(cell))
		.collect::<Result<Vec<_>>>()?;

	for (cell, &from) in cells.iter().zip(&ids) {
		match cell.jump {
			Some(jump) => {
				let to = ids[(jump.target() - 1) as usize];
				chain.record_transition(from, to)?;
			}
			None => {
				for face in 1..=DICE_MAX {
					let target = cell.number + face;
					if target > BOARD_SIZE {
						break;
					}
					chain.record_transition(from, ids[(target - 1) as usize])?;
				}
			}
		}
	}

	debug!("board built with {} cells", chain.len());
	Ok(())
}

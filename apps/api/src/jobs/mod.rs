// Job search over the static board, plus per-user saved jobs.

pub mod board;
pub mod handlers;
pub mod search;

// Diagnostic tooling for the Pioneer move generator
pub mod bitboard;
pub mod diff;
pub mod harness;
pub mod listing;
pub mod moves;

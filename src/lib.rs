//! Crate root module declarations for the Plum Chess rules engine.
//!
//! Exposes the board model, the precomputed move tables, and the move
//! generation pipeline that turns a position into danger zones, checks, pins
//! and legal move sets.

pub mod game_state {
    pub mod board;
    pub mod chess_errors;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod move_patterns;
    pub mod rays;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod piece_moves;
    pub mod pins;
    pub mod ray_walk;
}

pub mod utils {
    pub mod algebraic;
}

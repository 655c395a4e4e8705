/// Binary operator evaluation logic.
///
/// Handles `+ - * /` with integer/real promotion, and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix `+` and arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the post-order tree walk and the evaluator's result type.
pub mod core;

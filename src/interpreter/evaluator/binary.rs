/// Dispatch of binary operators to their handlers.
pub mod core;

/// Scalar arithmetic: `+ - * /` with integer/real promotion.
pub mod scalar;

/// Exponentiation.
pub mod power;

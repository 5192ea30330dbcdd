pub mod mc_engine;
pub mod paths;
pub mod payoffs;

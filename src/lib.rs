

pub mod point;
pub mod select;
pub mod closest_pair;
pub mod error;
pub mod input;
pub mod output;
pub mod app;
pub mod generator;
pub mod experiment;

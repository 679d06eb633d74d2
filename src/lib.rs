pub mod assets;

pub mod cleaner;

pub mod cli;

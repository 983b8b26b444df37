//! Main module for formcode library functionality

pub mod ast;
pub mod grammar;
pub mod lexing;
pub mod parsing;
pub mod token;

#![cfg(test)]

mod discovery;
mod scanner;

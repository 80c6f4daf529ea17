#![cfg(test)]

mod bit_cast;
mod decimal;

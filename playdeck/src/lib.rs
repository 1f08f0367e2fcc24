pub use deck::*;

mod deck;

pub mod nibbles;

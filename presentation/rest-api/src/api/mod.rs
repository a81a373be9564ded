pub mod amount;
pub mod cart;
pub mod error;
pub mod health;
pub mod product;
pub mod security;
pub mod tags;
pub mod voice_cart;

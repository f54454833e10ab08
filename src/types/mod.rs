pub mod violation;

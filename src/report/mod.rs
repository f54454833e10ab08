pub mod junit;

pub use junit::render;

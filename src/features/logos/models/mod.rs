pub mod logo;

pub use logo::Logo;

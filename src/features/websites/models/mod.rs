pub mod website;

pub use website::Website;

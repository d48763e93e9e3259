pub mod movie;
pub mod storage;
pub mod library;
pub mod error;

pub use error::{MovieLibError, Result};
pub use library::MovieLibrary;
pub use movie::{Movie, MovieUpdate};

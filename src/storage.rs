mod directory;
pub use directory::{Directory, Error, ErrorKind};

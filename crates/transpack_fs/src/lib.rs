mod file_system;
mod memory;
#[cfg(feature = "os")]
mod os;

pub use crate::file_system::FileSystem;
pub use crate::memory::MemoryFileSystem;
#[cfg(feature = "os")]
pub use os::OsFileSystem;

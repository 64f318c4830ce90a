pub mod error;
pub mod marker;
pub mod solve;
pub mod window;

pub use error::ScanError;
pub use solve::{solve, MESSAGE_MARKER_SIZE, PACKET_MARKER_SIZE};
pub use window::{find_first_unique_window, has_duplicates, Strategy, WindowScanner};

// Devices controlled by the remote
//
// These are the receivers of the Command Pattern: plain state holders with
// the primitive operations that commands are built from.

pub mod light;
pub mod tv;

pub use light::Light;
pub use tv::{DEFAULT_VOLUME, Tv};

pub mod key_codes;
pub mod layout;

pub use key_codes::*;
pub use layout::*;

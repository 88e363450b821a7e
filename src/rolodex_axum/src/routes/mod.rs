pub mod refresh;
pub mod session;
pub mod sign_in;
pub mod sign_up;

pub use refresh::refresh;
pub use session::session;
pub use sign_in::sign_in;
pub use sign_up::sign_up;

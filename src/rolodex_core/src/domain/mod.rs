pub mod audit;
pub mod credentials;
pub mod email;
pub mod password;
pub mod session;
pub mod user;
pub mod user_name;

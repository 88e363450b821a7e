use super::{email::Email, password::Password, user_name::UserName};

/// Registration data, already validated by the transport.
#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub name: UserName,
    pub email: Email,
    pub password: Password,
}

#[derive(Debug, Clone)]
pub struct SignInInput {
    pub email: Email,
    pub password: Password,
}

pub mod env {
    pub const ENV_PREFIX: &str = "ROLODEX";
    pub const ENV_SEPARATOR: &str = "__";
    pub const JWT_SECRET_ENV_VAR: &str = "ROLODEX__AUTH__JWT_SECRET";
    pub const PASSWORD_SALT_ENV_VAR: &str = "ROLODEX__AUTH__PASSWORD_SALT";
    pub const PASSWORD_PEPPER_ENV_VAR: &str = "ROLODEX__AUTH__PASSWORD_PEPPER";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ROLODEX__AUTH__ALLOWED_ORIGINS";
    pub const DATABASE_URL_ENV_VAR: &str = "ROLODEX__POSTGRES__URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "ROLODEX__REDIS__HOST_NAME";
}

pub const CONFIG_FILE: &str = "config/base";
pub const REFRESH_TOKEN_COOKIE_NAME: &str = "refresh-token";
pub const AUDIT_QUEUE: &str = "audit_log";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}

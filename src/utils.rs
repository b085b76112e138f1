pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age=86400;{secure} Path=/; SameSite=Strict")
}

pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Max-Age=0; Path=/; SameSite=Strict")
}

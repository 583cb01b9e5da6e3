use crate::args;
use log::info;
use rand::RngCore;
use rocket::config::Ident;

#[derive(Debug, PartialEq)]
pub enum ReleaseEnvironment {
    Development,
    Production,
}

impl ReleaseEnvironment {
    pub fn value(&self) -> String {
        match *self {
            ReleaseEnvironment::Development => String::from("development"),
            ReleaseEnvironment::Production => String::from("production"),
        }
    }
}

/// Random data generation for record ids
pub fn generate_rnd() -> String {
    let mut data = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut data);
    hex::encode(data)
}

/// Length of the hex string produced by `generate_rnd`
pub const RND_LEN: usize = 64;

/// Check that `id` is `prefix` followed by a `generate_rnd` value.
///
/// Index keys share the record prefixes, so they fail here.
pub fn is_record_id(prefix: &str, id: &str) -> bool {
    match id.strip_prefix(prefix) {
        Some(rnd) => rnd.len() == RND_LEN && rnd.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Helper for separation of dev and prod concerns
pub fn get_release_env(args: &args::Args) -> ReleaseEnvironment {
    if args.release_env == "prod" {
        ReleaseEnvironment::Production
    } else {
        ReleaseEnvironment::Development
    }
}

/// Build the rocket configuration from the command line and environment
pub fn rocket_config(args: &args::Args) -> rocket::Config {
    let env = get_release_env(args);
    info!("release environment: {}", env.value());
    let defaults = match env {
        ReleaseEnvironment::Production => rocket::Config::release_default(),
        ReleaseEnvironment::Development => rocket::Config::debug_default(),
    };
    rocket::Config {
        ident: Ident::none(),
        address: args.address,
        port: args.port,
        ..defaults
    }
}

// DoS prevention
pub const fn string_limit() -> usize {
    512
}

// Tests
//-------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_rnd_test() {
        let rnd = generate_rnd();
        let actual = rnd.len();
        let expected = RND_LEN;
        assert_eq!(expected, actual);
        assert_ne!(rnd, generate_rnd());
    }

    #[test]
    fn is_record_id_test() {
        let uid = format!("{}{}", crate::USER_DB_KEY, generate_rnd());
        assert!(is_record_id(crate::USER_DB_KEY, &uid));
        assert!(!is_record_id(crate::PRODUCT_DB_KEY, &uid));
        assert!(!is_record_id(crate::USER_DB_KEY, crate::USER_LIST_DB_KEY));
        assert!(!is_record_id(crate::PRODUCT_DB_KEY, crate::PRODUCT_LIST_DB_KEY));
        assert!(!is_record_id(crate::USER_DB_KEY, ""));
        let not_hex = format!("{}{}", crate::USER_DB_KEY, "z".repeat(RND_LEN));
        assert!(!is_record_id(crate::USER_DB_KEY, &not_hex));
    }

    #[test]
    fn release_env_test() {
        let args: args::Args = Default::default();
        assert_eq!(ReleaseEnvironment::Development, get_release_env(&args));
        let args = args::Args {
            release_env: String::from("prod"),
            ..Default::default()
        };
        assert_eq!(ReleaseEnvironment::Production, get_release_env(&args));
    }

    #[test]
    fn rocket_config_test() {
        let args = args::Args {
            port: 4321,
            ..Default::default()
        };
        let config = rocket_config(&args);
        assert_eq!(4321, config.port);
        assert_eq!(args.address, config.address);
    }

    #[test]
    fn app_port_test() {
        let config = rocket_config(&Default::default());
        assert_eq!(crate::DEFAULT_APP_PORT, config.port);
    }
}

//! core command line arguments
use clap::Parser;
use std::net::{
    IpAddr,
    Ipv4Addr,
};

/// cmd line args
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// set release environment
    #[arg(
        short,
        long,
        env = crate::STOREFRONT_RELEASE_ENV,
        help = "Set release environment (dev, prod)",
        default_value = "dev"
    )]
    pub release_env: String,
    /// Application port
    #[arg(
        short,
        long,
        env = crate::STOREFRONT_PORT,
        help = "Set app port",
        default_value_t = crate::DEFAULT_APP_PORT
    )]
    pub port: u16,
    /// Application address
    #[arg(
        long,
        env = crate::STOREFRONT_HOST,
        help = "Set the address to listen on",
        default_value = "0.0.0.0"
    )]
    pub address: IpAddr,
}

impl Args {
    /// Parse from the process arguments and environment
    pub fn load() -> Self {
        Args::parse()
    }
}

impl Default for Args {
    fn default() -> Self {
        Args {
            release_env: String::from("dev"),
            port: crate::DEFAULT_APP_PORT,
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

// Tests
//-------------------------------------------------------------------------------

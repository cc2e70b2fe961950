use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// How order submission waits on chat notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NotifyMode {
    /// Respond after both deliveries finished and report their outcome.
    #[default]
    Sync,
    /// Respond right after the order is stored; deliver in the background.
    Async,
}

/// Server configuration. Every option can come from a flag or its environment variable.
///
/// Provider credentials have no defaults: startup fails with the list of missing
/// options when any of them is absent or empty.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 1000)]
    pub port: u16,

    /// Whether order responses wait for notification delivery.
    #[arg(long, env = "NOTIFY_MODE", value_enum, default_value_t = NotifyMode::Sync)]
    pub notify_mode: NotifyMode,

    /// Timeout applied to every provider call, in seconds.
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS", default_value_t = 10)]
    pub provider_timeout_secs: u64,

    /// Maximum JSON request body size, in MiB.
    #[arg(long, env = "BODY_LIMIT_MB", default_value_t = 50)]
    pub body_limit_mb: usize,

    #[arg(long, env = "WHATSAPP_PHONE_NUMBER_ID", value_parser = NonEmptyStringValueParser::new())]
    pub whatsapp_phone_number_id: String,

    #[arg(long, env = "WHATSAPP_ACCESS_TOKEN", hide_env_values = true, value_parser = NonEmptyStringValueParser::new())]
    pub whatsapp_access_token: String,

    /// Admin number receiving new-order chat messages.
    #[arg(long, env = "ADMIN_PHONE", value_parser = NonEmptyStringValueParser::new())]
    pub admin_phone: String,

    #[arg(long, env = "WHATSAPP_API_URL", default_value = "https://graph.facebook.com/v17.0")]
    pub whatsapp_api_url: String,

    #[arg(long, env = "EMAIL_API_KEY", hide_env_values = true, value_parser = NonEmptyStringValueParser::new())]
    pub email_api_key: String,

    #[arg(long, env = "EMAIL_API_URL", default_value = "https://api.resend.com")]
    pub email_api_url: String,

    /// Sender address for notification emails.
    #[arg(long, env = "EMAIL_FROM", value_parser = NonEmptyStringValueParser::new())]
    pub email_from: String,

    /// Admin inbox receiving order emails.
    #[arg(long, env = "ADMIN_EMAIL", value_parser = NonEmptyStringValueParser::new())]
    pub admin_email: String,

    /// Public key id, also returned to the storefront checkout.
    #[arg(long, env = "RAZORPAY_KEY_ID", value_parser = NonEmptyStringValueParser::new())]
    pub razorpay_key_id: String,

    #[arg(long, env = "RAZORPAY_KEY_SECRET", hide_env_values = true, value_parser = NonEmptyStringValueParser::new())]
    pub razorpay_key_secret: String,

    #[arg(long, env = "RAZORPAY_API_URL", default_value = "https://api.razorpay.com/v1")]
    pub razorpay_api_url: String,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(1024 * 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 18] = [
        "order-intake",
        "--whatsapp-phone-number-id",
        "111",
        "--whatsapp-access-token",
        "wa-token",
        "--admin-phone",
        "+910000000000",
        "--email-api-key",
        "re_key",
        "--email-from",
        "shop@example.com",
        "--admin-email",
        "admin@example.com",
        "--razorpay-key-id",
        "rzp_test_key",
        "--razorpay-key-secret",
        "rzp_secret",
        "--notify-mode=async",
    ];

    #[test]
    fn test_config_defaults() {
        let config = Config::try_parse_from(REQUIRED[..17].iter().copied()).unwrap();
        assert_eq!(config.port, 1000);
        assert_eq!(config.notify_mode, NotifyMode::Sync);
        assert_eq!(config.provider_timeout(), Duration::from_secs(10));
        assert_eq!(config.body_limit_bytes(), 50 * 1024 * 1024);
        assert_eq!(config.whatsapp_api_url, "https://graph.facebook.com/v17.0");
    }

    #[test]
    fn test_notify_mode_flag() {
        let config = Config::try_parse_from(REQUIRED).unwrap();
        assert_eq!(config.notify_mode, NotifyMode::Async);
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let mut args = REQUIRED[..17].to_vec();
        args[16] = "";
        assert!(Config::try_parse_from(args).is_err());
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}

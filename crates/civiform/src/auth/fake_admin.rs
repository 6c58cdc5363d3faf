use crate::config::{AppConfig, AppEnvironment};

/// Impersonation targets offered on the debug login panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeAdminRole {
    GlobalAdmin,
    ProgramAdmin,
    DualAdmin,
    TrustedIntermediary,
}

impl FakeAdminRole {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::GlobalAdmin,
            Self::ProgramAdmin,
            Self::DualAdmin,
            Self::TrustedIntermediary,
        ]
    }

    /// Element id of the panel button.
    pub const fn button_id(self) -> &'static str {
        match self {
            Self::GlobalAdmin => "admin",
            Self::ProgramAdmin => "program-admin",
            Self::DualAdmin => "dual-admin",
            Self::TrustedIntermediary => "trusted-intermediary",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GlobalAdmin => "CiviForm Admin",
            Self::ProgramAdmin => "Program Admin",
            Self::DualAdmin => "Program and Civiform Admin",
            Self::TrustedIntermediary => "Trusted Intermediary",
        }
    }

    /// Value of the `adminType` callback parameter.
    pub const fn callback_value(self) -> &'static str {
        match self {
            Self::GlobalAdmin => "GLOBAL",
            Self::ProgramAdmin => "PROGRAM",
            Self::DualAdmin => "DUAL",
            Self::TrustedIntermediary => "TRUSTED_INTERMEDIARY",
        }
    }
}

/// Capability check gating the debug impersonation panel.
///
/// This only controls visibility; the callback endpoints enforce their own checks.
#[derive(Debug, Clone)]
pub struct FakeAdminClient {
    environment: AppEnvironment,
    accepted_hosts: Vec<String>,
}

impl FakeAdminClient {
    pub const CLIENT_NAME: &'static str = "FakeAdminClient";

    pub fn new(environment: AppEnvironment, accepted_hosts: Vec<String>) -> Self {
        Self {
            environment,
            accepted_hosts,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut accepted_hosts = config.auth.fake_admin_hosts.clone();
        if let Some(staging) = &config.auth.staging_hostname {
            accepted_hosts.push(staging.clone());
        }
        Self::new(config.environment, accepted_hosts)
    }

    /// Never errors: an unknown or malformed host simply disables the panel.
    pub fn can_enable(&self, host: &str) -> bool {
        if self.environment.is_production() {
            return false;
        }
        let host = host.trim();
        !host.is_empty()
            && self
                .accepted_hosts
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(host))
    }
}

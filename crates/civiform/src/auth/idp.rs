/// Applicant authentication source selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityProvider {
    Disabled,
    Idcs,
    LoginRadius,
    GenericOidc,
    LoginGov,
}

impl IdentityProvider {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "disabled" => Some(Self::Disabled),
            "idcs" => Some(Self::Idcs),
            "login-radius" => Some(Self::LoginRadius),
            "generic-oidc" => Some(Self::GenericOidc),
            "login-gov" => Some(Self::LoginGov),
            _ => None,
        }
    }

    /// Configuration value, also used as the login button's element id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Idcs => "idcs",
            Self::LoginRadius => "login-radius",
            Self::GenericOidc => "generic-oidc",
            Self::LoginGov => "login-gov",
        }
    }
}

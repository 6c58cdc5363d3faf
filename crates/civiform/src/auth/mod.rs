pub mod fake_admin;
mod idp;
pub mod router;

pub use fake_admin::{FakeAdminClient, FakeAdminRole};
pub use idp::IdentityProvider;
pub use router::{login_router, LoginPage};

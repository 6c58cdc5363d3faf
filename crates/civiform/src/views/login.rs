use crate::auth::{FakeAdminClient, FakeAdminRole, IdentityProvider};
use crate::config::AppConfig;
use crate::html::node::{a, div, h1, img, p, p_text, span, Element};
use crate::html::Document;
use crate::i18n::{MessageKey, Messages};
use crate::routes;
use crate::views::components::{redirect_button, ToastMessage};
use crate::views::layout::BaseHtmlLayout;
use crate::views::styles::{components, reference, utility};
use crate::views::RequestContext;

const LOCAL_LOGO: &str = "ChiefSeattle_Blue";

pub const APPLICANT_LOGIN_SECTION_ID: &str = "applicant-login";
pub const ALTERNATE_LOGIN_ID: &str = "alternate-login-buttons";
pub const ADMIN_LOGIN_SECTION_ID: &str = "admin-login";
pub const DEBUG_PANEL_ID: &str = "debug-content";
pub const REGISTER_BUTTON_ID: &str = "register";
pub const GUEST_BUTTON_ID: &str = "guest";

/// Flags and branding the login page derives from configuration once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSettings {
    pub applicant_idp: IdentityProvider,
    pub applicant_auth_disabled: bool,
    pub use_alternate_registration: bool,
    pub logo_url: Option<String>,
    pub civic_entity_full_name: String,
    pub civic_entity_short_name: String,
}

impl LoginSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        let applicant_idp = config.auth.applicant_idp;
        let (applicant_auth_disabled, use_alternate_registration) = match applicant_idp {
            IdentityProvider::Disabled => (true, false),
            IdentityProvider::Idcs => (false, config.auth.idcs_register_uri.is_some()),
            _ => (false, false),
        };

        Self {
            applicant_idp,
            applicant_auth_disabled,
            use_alternate_registration,
            logo_url: config.whitelabel.small_logo_url.clone(),
            civic_entity_full_name: config.whitelabel.civic_entity_full_name.clone(),
            civic_entity_short_name: config.whitelabel.civic_entity_short_name.clone(),
        }
    }
}

/// Login page renderer.
#[derive(Debug, Clone)]
pub struct LoginForm {
    layout: BaseHtmlLayout,
    settings: LoginSettings,
    fake_admin: FakeAdminClient,
}

impl LoginForm {
    pub fn new(layout: BaseHtmlLayout, settings: LoginSettings, fake_admin: FakeAdminClient) -> Self {
        Self {
            layout,
            settings,
            fake_admin,
        }
    }

    pub fn from_config(layout: BaseHtmlLayout, config: &AppConfig) -> Self {
        Self::new(
            layout,
            LoginSettings::from_config(config),
            FakeAdminClient::from_config(config),
        )
    }

    pub fn settings(&self) -> &LoginSettings {
        &self.settings
    }

    pub fn render(
        &self,
        request: &RequestContext,
        messages: &dyn Messages,
        message: Option<&str>,
    ) -> Document {
        let mut bundle = self
            .layout
            .bundle()
            .title("Login")
            .main_content(self.main_content(messages));

        if let Some(message) = message.map(str::trim).filter(|message| !message.is_empty()) {
            bundle = bundle.toast(ToastMessage::alert(message));
        }

        // Visibility gate only; the fake admin callbacks validate the host themselves.
        if self.fake_admin.can_enable(&request.host) {
            bundle = bundle.main_content(debug_content());
        }

        self.layout.render(bundle)
    }

    fn main_content(&self, messages: &dyn Messages) -> Element {
        let settings = &self.settings;
        let logo_alt = format!("{} Logo", settings.civic_entity_full_name);
        let logo = match &settings.logo_url {
            Some(url) => img().attr("src", url.clone()),
            None => self.layout.local_image(LOCAL_LOGO),
        }
        .attr("alt", logo_alt)
        .attr("aria-hidden", "true")
        .class(components::LOGIN_LOGO);

        let heading = h1()
            .classes(&[utility::FLEX, utility::TEXT_2XL])
            .child(span(settings.civic_entity_short_name.clone()).class(utility::BOLD))
            .child(span("CiviForm"));

        let applicant_login = div()
            .id(APPLICANT_LOGIN_SECTION_ID)
            .classes(&[
                components::LOGIN_SECTION,
                utility::FLEX,
                utility::FLEX_COL,
                utility::ITEMS_CENTER,
            ]);

        let mut content = div()
            .class(components::LOGIN_PAGE)
            .child(logo)
            .child(heading);

        if settings.applicant_auth_disabled {
            let disabled = messages.at(MessageKey::ContentLoginDisabledPrompt, &[]);
            content = content.child(applicant_login.child(p_text(disabled)));
        } else {
            let prompt = messages.at(
                MessageKey::ContentLoginPrompt,
                &[settings.civic_entity_full_name.as_str()],
            );
            content = content
                .child(
                    applicant_login
                        .child(p_text(prompt))
                        .child(self.login_button(messages)),
                )
                .child(
                    p_text(messages.at(MessageKey::ContentLoginPromptAlternative, &[]))
                        .class(utility::TEXT_LG),
                );
        }

        let alternate = div().id(ALTERNATE_LOGIN_ID).classes(&[
            reference::ALTERNATE_LOGIN_ROW,
            utility::FLEX,
            utility::GAP_4,
            utility::ITEMS_CENTER,
        ]);
        let alternate = if settings.use_alternate_registration {
            alternate
                .child(create_account_button(messages))
                .child(p_text(messages.at(MessageKey::ContentOr, &[])))
                .child(guest_button(messages))
        } else {
            alternate.child(guest_button(messages))
        };

        let admin_login = div()
            .id(ADMIN_LOGIN_SECTION_ID)
            .classes(&[utility::FLEX, utility::JUSTIFY_CENTER, utility::ITEMS_CENTER])
            .child(
                p().text(messages.at(MessageKey::ContentAdminLoginPrompt, &[]))
                    .text(" ")
                    .child(
                        a(messages.at(MessageKey::LinkAdminLogin, &[]))
                            .attr("href", routes::ADMIN_LOGIN)
                            .class(components::ADMIN_LOGIN),
                    ),
            );

        div()
            .class(utility::WIDTH_FULL)
            .child(content.child(alternate).child(admin_login))
    }

    fn login_button(&self, messages: &dyn Messages) -> Element {
        redirect_button(
            self.settings.applicant_idp.as_str(),
            messages.at(MessageKey::ButtonLogin, &[]),
            routes::APPLICANT_LOGIN,
        )
        .class(components::LOGIN_REDIRECT_BUTTON)
    }
}

fn create_account_button(messages: &dyn Messages) -> Element {
    redirect_button(
        REGISTER_BUTTON_ID,
        messages.at(MessageKey::ButtonCreateAccount, &[]),
        routes::REGISTER,
    )
    .class(components::LOGIN_REDIRECT_BUTTON_SECONDARY)
}

fn guest_button(messages: &dyn Messages) -> Element {
    redirect_button(
        GUEST_BUTTON_ID,
        messages.at(MessageKey::ButtonLoginGuest, &[]),
        &routes::guest_callback(),
    )
    .class(components::LOGIN_REDIRECT_BUTTON_SECONDARY)
}

fn debug_content() -> Element {
    div()
        .id(DEBUG_PANEL_ID)
        .class(components::DEBUG_PANEL)
        .child(p_text("DEMO MODE. LOGIN AS:").class(utility::TEXT_2XL))
        .children(FakeAdminRole::ordered().into_iter().map(|role| {
            redirect_button(
                role.button_id(),
                role.label(),
                &routes::fake_admin_callback(role),
            )
        }))
}

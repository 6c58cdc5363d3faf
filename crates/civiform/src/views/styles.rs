//! Class names shared by the views.
//!
//! `utility` holds presentational classes from the stylesheet. `reference` holds marker
//! classes that client script and tests look elements up by, so they must stay stable.

pub mod utility {
    pub const FLEX: &str = "flex";
    pub const FLEX_COL: &str = "flex-col";
    pub const FLEX_GROW: &str = "flex-grow";
    pub const ITEMS_CENTER: &str = "items-center";
    pub const JUSTIFY_CENTER: &str = "justify-center";
    pub const GAP_4: &str = "gap-4";
    pub const HIDDEN: &str = "hidden";
    pub const BOLD: &str = "font-bold";
    pub const TEXT_SM: &str = "text-sm";
    pub const TEXT_LG: &str = "text-lg";
    pub const TEXT_2XL: &str = "text-2xl";
    pub const TEXT_GRAY: &str = "text-gray-700";
    pub const MY_4: &str = "my-4";
    pub const MB_2: &str = "mb-2";
    pub const PX_20: &str = "px-20";
    pub const PT_4: &str = "pt-4";
    pub const BORDER: &str = "border";
    pub const ROUNDED: &str = "rounded";
    pub const SHADOW: &str = "shadow-lg";
    pub const WIDTH_FULL: &str = "w-full";
    pub const BG_WHITE: &str = "bg-white";
}

pub mod components {
    pub const BODY: &str = "bg-gray-50";
    pub const MAIN: &str = "main";
    pub const LOGIN_PAGE: &str = "cf-login-page";
    pub const LOGIN_LOGO: &str = "cf-login-logo";
    pub const LOGIN_SECTION: &str = "cf-login-section";
    pub const LOGIN_REDIRECT_BUTTON: &str = "cf-login-button";
    pub const LOGIN_REDIRECT_BUTTON_SECONDARY: &str = "cf-login-button-secondary";
    pub const ADMIN_LOGIN: &str = "cf-admin-login";
    pub const DEBUG_PANEL: &str = "cf-debug-panel";
    pub const PRIMARY_BUTTON: &str = "usa-button";
    pub const OUTLINE_BUTTON: &str = "usa-button usa-button--outline";
    pub const TERTIARY_BUTTON: &str = "usa-button usa-button--unstyled";
    pub const CHECKBOX: &str = "cf-checkbox";
    pub const CARD: &str = "cf-card";
    pub const MODAL: &str = "cf-modal";
    pub const MODAL_HEADER: &str = "cf-modal-header";
    pub const MODAL_CONTENT: &str = "cf-modal-content";
    pub const MODAL_THREE_FOURTHS: &str = "cf-modal-wide";
    pub const TOAST: &str = "cf-toast";
    pub const TOAST_SUCCESS: &str = "cf-toast-success";
    pub const TOAST_ALERT: &str = "cf-toast-alert";
}

pub mod reference {
    pub const EDIT_NOTE_FORM: &str = "cf-program-admin-edit-note-form";
    pub const STATUS_UPDATE_FORM: &str = "cf-program-admin-status-update-form";
    pub const STATUS_SELECTOR: &str = "cf-program-admin-status-selector";
    pub const BLOCK_CARD: &str = "cf-admin-application-block-card";
    pub const APPLICANT_LABEL: &str = "cf-application-applicant-label";
    pub const MODAL_OPEN: &str = "cf-modal-open";
    pub const MODAL_CLOSE: &str = "cf-modal-close";
    pub const ALTERNATE_LOGIN_ROW: &str = "cf-alternate-login-buttons";

    /// Data attribute (without the `data-` prefix) naming the status a hidden modal
    /// trigger confirms.
    pub const STATUS_CONFIRM_DATA_KEY: &str = "status-update-confirm-for-status";
}

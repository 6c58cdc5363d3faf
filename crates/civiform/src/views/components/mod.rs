pub mod buttons;
pub mod modal;
pub mod toast;

pub use buttons::{link_button, redirect_button};
pub use modal::{Modal, ModalWidth};
pub use toast::{ToastKind, ToastMessage};

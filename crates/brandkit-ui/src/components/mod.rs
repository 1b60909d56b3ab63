pub(crate) mod fields;
pub(crate) mod logo_input;
pub(crate) mod modal;
pub(crate) mod toast;

pub mod contacts_svc_bindings;
pub mod toast_bindings;

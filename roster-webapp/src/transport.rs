use std::sync::Arc;

use crate::bindings::contacts_svc_bindings::ContactsPromiseClient;

fn create_service_url() -> String {
    let location = web_sys::window().unwrap().location();

    // TODO error handling
    format!("{}//{}", location.protocol().unwrap(), location.host().unwrap()).to_string()
}

#[derive(Clone)]
pub struct ConnectionManager {
    contacts: Arc<ContactsPromiseClient>,
}

impl ConnectionManager {
    pub fn new() -> ConnectionManager {
        let service_url = create_service_url();

        let contacts = ContactsPromiseClient::new(service_url);

        ConnectionManager { contacts: Arc::new(contacts) }
    }

    pub fn contacts(&self) -> &ContactsPromiseClient {
        &self.contacts
    }
}

use js_sys;
use wasm_bindgen::prelude::*;

use roster_commons::model::{ContactDraft, ContactRecord};

#[wasm_bindgen(module = "/js/platform/contacts_svc.js")]
extern "C" {
    pub type ContactData;

    #[wasm_bindgen(constructor)]
    pub fn new() -> ContactData;

    #[wasm_bindgen(method)]
    pub fn getId(this: &ContactData) -> String;

    #[wasm_bindgen(method)]
    pub fn setId(this: &ContactData, id: String);

    #[wasm_bindgen(method)]
    pub fn getFirstName(this: &ContactData) -> String;

    #[wasm_bindgen(method)]
    pub fn setFirstName(this: &ContactData, first_name: String);

    #[wasm_bindgen(method)]
    pub fn getLastName(this: &ContactData) -> String;

    #[wasm_bindgen(method)]
    pub fn setLastName(this: &ContactData, last_name: String);

    #[wasm_bindgen(method)]
    pub fn getEmail(this: &ContactData) -> String;

    #[wasm_bindgen(method)]
    pub fn setEmail(this: &ContactData, email: String);

    #[wasm_bindgen(method)]
    pub fn getPhone(this: &ContactData) -> String;

    #[wasm_bindgen(method)]
    pub fn setPhone(this: &ContactData, phone: String);
}

impl From<&ContactDraft> for ContactData {
    fn from(draft: &ContactDraft) -> Self {
        // drafts carry no server identifier yet
        let binding = Self::new();
        binding.setFirstName(draft.first_name.clone());
        binding.setLastName(draft.last_name.clone());
        binding.setEmail(draft.email.clone());
        binding.setPhone(draft.phone.clone());

        return binding;
    }
}

impl From<&ContactRecord> for ContactData {
    fn from(record: &ContactRecord) -> Self {
        let binding = Self::new();
        binding.setId(record.id.clone());
        binding.setFirstName(record.first_name.clone());
        binding.setLastName(record.last_name.clone());
        binding.setEmail(record.email.clone());
        binding.setPhone(record.phone.clone());

        return binding;
    }
}

impl Into<ContactRecord> for ContactData {
    fn into(self) -> ContactRecord {
        return ContactRecord::new(
            self.getId(),
            self.getFirstName(),
            self.getLastName(),
            self.getEmail(),
            self.getPhone(),
        );
    }
}

#[wasm_bindgen(module = "/js/platform/contacts_svc.js")]
extern "C" {
    pub type ContactsPromiseClient;

    #[wasm_bindgen(constructor)]
    pub fn new(hostname: String) -> ContactsPromiseClient;

    #[wasm_bindgen(method)]
    pub fn saveContacts(
        this: &ContactsPromiseClient,
        contacts_to_insert: js_sys::Array,
    ) -> js_sys::Promise;

    #[wasm_bindgen(method)]
    pub fn getContacts(
        this: &ContactsPromiseClient,
        contacts_to_update: js_sys::Array,
    ) -> js_sys::Promise;
}

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::futures_0_3::JsFuture;

use log::*;

use roster_commons::model::{ContactDraft, ContactRecord};
use roster_commons::notify::UNKNOWN_ERROR;

use crate::bindings::contacts_svc_bindings::ContactData;
use crate::ctrl::ControllerError;
use crate::transport::ConnectionManager;

#[derive(Clone)]
pub struct SubmissionController {
    connections: ConnectionManager,
}

impl SubmissionController {
    pub fn new(connections: ConnectionManager) -> SubmissionController {
        SubmissionController { connections }
    }

    /// Sends the validated drafts to the save procedure and reshapes the
    /// response. The follow-up acknowledgement runs as a continuation of the
    /// save's success path and is passed the confirmed records.
    pub async fn submit_new(
        &self,
        drafts: &[ContactDraft],
    ) -> Result<Vec<ContactRecord>, ControllerError> {
        debug!("Saving {} draft contact(s)", drafts.len());

        let batch = js_sys::Array::new();
        for draft in drafts {
            let bound: ContactData = draft.into();
            batch.push(&bound);
        }

        let promise = self.connections.contacts().saveContacts(batch);
        let value = JsFuture::from(promise).await.map_err(|e| rejected(&e))?;

        let saved = reshape_response(value)?;

        // the acknowledgement is advisory; its failure must not undo the save
        if let Err(error) = self.acknowledge(&saved).await {
            warn!("Acknowledgement after save failed: {}", error);
        }

        Ok(saved)
    }

    /// Sends an already-merged record list through the same save procedure.
    pub async fn submit_edits(
        &self,
        records: &[ContactRecord],
    ) -> Result<Vec<ContactRecord>, ControllerError> {
        debug!("Saving {} edited contact(s)", records.len());

        let batch = js_sys::Array::new();
        for record in records {
            let bound: ContactData = record.into();
            batch.push(&bound);
        }

        let promise = self.connections.contacts().saveContacts(batch);
        let value = JsFuture::from(promise).await.map_err(|e| rejected(&e))?;

        reshape_response(value)
    }

    async fn acknowledge(&self, saved: &[ContactRecord]) -> Result<(), ControllerError> {
        let batch = js_sys::Array::new();
        for record in saved {
            let bound: ContactData = record.into();
            batch.push(&bound);
        }

        let promise = self.connections.contacts().getContacts(batch);
        let _ack = JsFuture::from(promise).await.map_err(|e| rejected(&e))?;

        debug!("Service acknowledged {} contact(s)", saved.len());
        Ok(())
    }
}

fn rejected(value: &JsValue) -> ControllerError {
    ControllerError::RemoteRejected {
        message: remote_error_message(value).unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
    }
}

fn remote_error_message(value: &JsValue) -> Option<String> {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .filter(|message| !message.is_empty())
}

fn reshape_response(value: JsValue) -> Result<Vec<ContactRecord>, ControllerError> {
    let entries: js_sys::Array = value.dyn_into().map_err(|_| ControllerError::InvalidResponse {
        message: "saved contacts are not a sequence".to_string(),
    })?;

    let mut records = Vec::with_capacity(entries.length() as usize);
    for entry in entries.iter() {
        let bound: ContactData = entry.dyn_into().map_err(|_| ControllerError::InvalidResponse {
            message: "saved contact has an unexpected shape".to_string(),
        })?;

        records.push(bound.into());
    }

    Ok(records)
}

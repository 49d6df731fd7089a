use log::*;
use uuid::Uuid;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::futures_0_3::spawn_local;

use yew::prelude::*;
use yew::{html, Component, ComponentLink, Html, Properties, ShouldRender};

use roster_commons::form::FormState;
use roster_commons::model::{apply_patches, CellPatch, ContactDraft, ContactField, ContactRecord};
use roster_commons::notify::{report_failure, report_saved, report_updated};

use crate::bindings::toast_bindings::ToastNotifier;
use crate::ctrl::SubmissionController;
use crate::views::{results, PresentationMode};

pub enum FormMsg {
    AddRow,
    RemoveRow(Uuid),
    CloneRow(Uuid),
    Input(Uuid, ContactField, String),
    Save,
    Saved(Vec<ContactRecord>),
    SaveFailed(String),
    EnterEdit,
    CancelEdit,
    EditInput(String, ContactField, String),
    CommitEdits,
    CellCommit(CellPatch),
    EditsSaved(Vec<ContactRecord>),
    EditsFailed(String),
}

#[derive(Clone, Properties)]
pub struct FormProps {
    pub on_error: Callback<String>,
    pub controller: SubmissionController,
    pub notifier: ToastNotifier,
    pub mode: PresentationMode,
}

pub struct ContactFormView {
    link: ComponentLink<Self>,
    props: FormProps,
    form: FormState,
    created: Vec<ContactRecord>,
    edit_copy: Option<Vec<ContactRecord>>,
    pending_patches: Vec<CellPatch>,
    saving: bool,
}

impl Component for ContactFormView {
    type Message = FormMsg;
    type Properties = FormProps;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        ContactFormView {
            link,
            props,
            form: FormState::new(),
            created: vec![],
            edit_copy: None,
            pending_patches: vec![],
            saving: false,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        return match msg {
            FormMsg::AddRow => {
                self.form = self.form.add_row();
                true
            }
            FormMsg::RemoveRow(id) => {
                match self.form.remove_row(id) {
                    Ok(next) => self.form = next,
                    Err(error) => {
                        report_failure(&self.props.notifier, "Error", Some(&error.to_string()))
                    }
                }
                true
            }
            FormMsg::CloneRow(id) => {
                match self.form.clone_row(id) {
                    Ok(next) => self.form = next,
                    Err(error) => {
                        report_failure(&self.props.notifier, "Error", Some(&error.to_string()))
                    }
                }
                true
            }
            FormMsg::Input(id, field, value) => {
                match self.form.update_field(id, field, &value) {
                    Ok(next) => self.form = next,
                    Err(error) => self
                        .props
                        .on_error
                        .emit(format!("Lost track of a form row: {}", error)),
                }
                true
            }
            FormMsg::Save => {
                if self.saving || !self.validate_all() {
                    return false;
                }

                info!("Saving {} contact(s)", self.form.rows().len());

                self.saving = true;
                let controller = self.props.controller.clone();
                let drafts: Vec<ContactDraft> = self.form.rows().to_vec();
                let link = self.link.clone();
                spawn_local(async move {
                    match controller.submit_new(&drafts).await {
                        Ok(saved) => link.send_message(FormMsg::Saved(saved)),
                        Err(error) => {
                            link.send_message(FormMsg::SaveFailed(error.user_message()))
                        }
                    }
                });
                true
            }
            FormMsg::Saved(records) => {
                self.saving = false;
                report_saved(&self.props.notifier, records.len());
                self.created = records;
                self.form = self.form.reset();
                true
            }
            FormMsg::SaveFailed(message) => {
                // the drafts stay untouched for another attempt
                self.saving = false;
                report_failure(&self.props.notifier, "Error creating contacts", Some(&message));
                true
            }
            FormMsg::EnterEdit => {
                self.edit_copy = Some(self.created.clone());
                true
            }
            FormMsg::CancelEdit => {
                self.edit_copy = None;
                true
            }
            FormMsg::EditInput(id, field, value) => {
                if let Some(copy) = self.edit_copy.as_mut() {
                    match copy.iter_mut().find(|record| record.id == id) {
                        Some(record) => record.set_field(field, value),
                        None => warn!("Edited record disappeared from the draft copy: {}", id),
                    }
                }
                true
            }
            FormMsg::CommitEdits => {
                if self.saving {
                    return false;
                }

                if let Some(copy) = self.edit_copy.clone() {
                    self.dispatch_edits(copy);
                }
                true
            }
            FormMsg::CellCommit(patch) => {
                self.pending_patches.push(patch);
                if !self.saving {
                    self.submit_pending_edits();
                }
                true
            }
            FormMsg::EditsSaved(records) => {
                self.saving = false;
                report_updated(&self.props.notifier);
                self.created = records;
                self.edit_copy = None;
                self.pending_patches.clear();
                true
            }
            FormMsg::EditsFailed(message) => {
                // pending edits stay in place for retry
                self.saving = false;
                report_failure(&self.props.notifier, "Error updating contacts", Some(&message));
                true
            }
        };
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        // don't render
        false
    }

    fn view(&self) -> Html {
        html! {
        <div class="contact_form_layout">
            <div class="box draft_rows">
                {for self.form.rows().iter().map(|row| self.draft_row(row))}
            </div>
            <div class="form_controls">
                <button onclick=self.link.callback(|_| FormMsg::AddRow)>{"Add row"}</button>
                <button onclick=self.link.callback(|_| FormMsg::Save)>{"Save contacts"}</button>
                {self.loading_view()}
            </div>
            {self.results_view()}
        </div>
        }
    }
}

impl ContactFormView {
    fn draft_row(&self, row: &ContactDraft) -> Html {
        let row_id = row.local_id;
        html! {
        <div class="box draft_row">
            <input class="contact_field" placeholder="First name" required=true
                value=row.first_name.clone()
                oninput=self.link.callback(move |e: InputData| {
                    FormMsg::Input(row_id, ContactField::FirstName, e.value)
                }) />
            <input class="contact_field" placeholder="Last name" required=true
                value=row.last_name.clone()
                oninput=self.link.callback(move |e: InputData| {
                    FormMsg::Input(row_id, ContactField::LastName, e.value)
                }) />
            <input class="contact_field" type="email" placeholder="Email" required=true
                value=row.email.clone()
                oninput=self.link.callback(move |e: InputData| {
                    FormMsg::Input(row_id, ContactField::Email, e.value)
                }) />
            <input class="contact_field" type="tel" placeholder="Phone"
                value=row.phone.clone()
                oninput=self.link.callback(move |e: InputData| {
                    FormMsg::Input(row_id, ContactField::Phone, e.value)
                }) />
            <button onclick=self.link.callback(move |_| FormMsg::CloneRow(row_id))>{"Clone"}</button>
            <button onclick=self.link.callback(move |_| FormMsg::RemoveRow(row_id))>{"Remove"}</button>
        </div>
        }
    }

    fn loading_view(&self) -> Html {
        if self.saving {
            html! { <div class="loading_indicator">{"Saving..."}</div> }
        } else {
            html! { <></> }
        }
    }

    fn results_view(&self) -> Html {
        if self.created.is_empty() {
            return html! { <></> };
        }

        html! {
        <results::ResultsTable
            mode=self.props.mode
            records=self.created.clone()
            edit_copy=self.edit_copy.clone()
            on_enter_edit=self.link.callback(|_| FormMsg::EnterEdit)
            on_cancel_edit=self.link.callback(|_| FormMsg::CancelEdit)
            on_edit_input=self.link.callback(|(id, field, value)| FormMsg::EditInput(id, field, value))
            on_commit_edits=self.link.callback(|_| FormMsg::CommitEdits)
            on_cell_commit=self.link.callback(FormMsg::CellCommit) />
        }
    }

    /// Every visible contact input reports its own validity; submission only
    /// proceeds when all of them pass.
    fn validate_all(&self) -> bool {
        let document = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document,
            None => {
                self.props.on_error.emit("Document is not available".to_string());
                return false;
            }
        };

        let inputs = match document.query_selector_all("input.contact_field") {
            Ok(inputs) => inputs,
            Err(_) => {
                self.props.on_error.emit("Unable to query contact inputs".to_string());
                return false;
            }
        };

        let mut all_valid = true;
        for index in 0..inputs.length() {
            if let Some(node) = inputs.item(index) {
                if let Ok(input) = node.dyn_into::<web_sys::HtmlInputElement>() {
                    if !input.report_validity() {
                        all_valid = false;
                    }
                }
            }
        }

        all_valid
    }

    /// Merges the pending cell patches into the displayed records and sends
    /// the result. Patches without a matching record are dropped from the
    /// queue, otherwise they would retry forever.
    fn submit_pending_edits(&mut self) {
        let (merged, unmatched) = apply_patches(&self.created, &self.pending_patches);

        if !unmatched.is_empty() {
            warn!("Dropping {} cell edit(s) without a matching record", unmatched.len());
            self.pending_patches.retain(|patch| !unmatched.contains(&patch.id));
        }

        if self.pending_patches.is_empty() {
            return;
        }

        self.dispatch_edits(merged);
    }

    fn dispatch_edits(&mut self, merged: Vec<ContactRecord>) {
        self.saving = true;
        let controller = self.props.controller.clone();
        let link = self.link.clone();
        spawn_local(async move {
            match controller.submit_edits(&merged).await {
                Ok(records) => link.send_message(FormMsg::EditsSaved(records)),
                Err(error) => link.send_message(FormMsg::EditsFailed(error.user_message())),
            }
        });
    }
}

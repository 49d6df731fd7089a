use yew::prelude::*;
use yew::{html, Component, ComponentLink, Html, Properties, ShouldRender};

use roster_commons::model::{CellPatch, ContactField, ContactRecord};

use crate::views::PresentationMode;

pub enum ResultsMsg {
    EnterEdit,
    CancelEdit,
    EditInput(String, ContactField, String),
    CommitEdits,
    CellCommit(String, ContactField, String),
    Nope,
}

#[derive(Clone, Properties)]
pub struct ResultsProps {
    pub mode: PresentationMode,
    pub records: Vec<ContactRecord>,
    pub edit_copy: Option<Vec<ContactRecord>>,
    pub on_enter_edit: Callback<()>,
    pub on_cancel_edit: Callback<()>,
    pub on_edit_input: Callback<(String, ContactField, String)>,
    pub on_commit_edits: Callback<()>,
    pub on_cell_commit: Callback<CellPatch>,
}

/// Renders the confirmed records. Edit state lives in the owning form view;
/// this component only forwards commit and discard intents upwards.
pub struct ResultsTable {
    link: ComponentLink<Self>,
    props: ResultsProps,
}

impl Component for ResultsTable {
    type Message = ResultsMsg;
    type Properties = ResultsProps;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        ResultsTable { link, props }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        return match msg {
            ResultsMsg::EnterEdit => {
                self.props.on_enter_edit.emit(());
                false
            }
            ResultsMsg::CancelEdit => {
                self.props.on_cancel_edit.emit(());
                false
            }
            ResultsMsg::EditInput(id, field, value) => {
                self.props.on_edit_input.emit((id, field, value));
                false
            }
            ResultsMsg::CommitEdits => {
                self.props.on_commit_edits.emit(());
                false
            }
            ResultsMsg::CellCommit(id, field, value) => {
                self.props.on_cell_commit.emit(CellPatch { id, field, value });
                false
            }
            ResultsMsg::Nope => false,
        };
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        self.props = props;
        true
    }

    fn view(&self) -> Html {
        match self.props.mode {
            PresentationMode::ReadOnly => self.read_only_table(),
            PresentationMode::DraftEdit => self.draft_edit_view(),
            PresentationMode::InlineEdit => self.inline_edit_table(),
        }
    }
}

impl ResultsTable {
    fn header() -> Html {
        html! {
        <tr>
            <th>{"Name"}</th>
            <th>{"Email"}</th>
            <th>{"Phone"}</th>
        </tr>
        }
    }

    fn read_only_table(&self) -> Html {
        html! {
        <table class="results_table">
            {Self::header()}
            {for self.props.records.iter().map(|record| {
                html! {
                <tr>
                    <td><a href=record.record_url()>{record.display_name()}</a></td>
                    <td>{&record.email}</td>
                    <td>{&record.phone}</td>
                </tr>
                }
            })}
        </table>
        }
    }

    fn draft_edit_view(&self) -> Html {
        return match &self.props.edit_copy {
            None => html! {
            <div class="results">
                {self.read_only_table()}
                <button onclick=self.link.callback(|_| ResultsMsg::EnterEdit)>{"Edit"}</button>
            </div>
            },
            Some(copy) => html! {
            <div class="results">
                <table class="results_table">
                    {Self::header()}
                    {for copy.iter().map(|record| self.draft_edit_row(record))}
                </table>
                <button onclick=self.link.callback(|_| ResultsMsg::CommitEdits)>{"Save"}</button>
                <button onclick=self.link.callback(|_| ResultsMsg::CancelEdit)>{"Cancel"}</button>
            </div>
            },
        };
    }

    fn draft_edit_row(&self, record: &ContactRecord) -> Html {
        html! {
        <tr>
            <td>
                {self.draft_edit_cell(record, ContactField::FirstName)}
                {self.draft_edit_cell(record, ContactField::LastName)}
            </td>
            <td>{self.draft_edit_cell(record, ContactField::Email)}</td>
            <td>{self.draft_edit_cell(record, ContactField::Phone)}</td>
        </tr>
        }
    }

    fn draft_edit_cell(&self, record: &ContactRecord, field: ContactField) -> Html {
        let id = record.id.clone();
        html! {
            <input class="cell_input" value=record.field(field).to_string()
                oninput=self.link.callback(move |e: InputData| {
                    ResultsMsg::EditInput(id.clone(), field, e.value)
                }) />
        }
    }

    fn inline_edit_table(&self) -> Html {
        html! {
        <table class="results_table">
            {Self::header()}
            {for self.props.records.iter().map(|record| self.inline_row(record))}
        </table>
        }
    }

    fn inline_row(&self, record: &ContactRecord) -> Html {
        html! {
        <tr>
            <td>
                {self.inline_cell(record, ContactField::FirstName)}
                {self.inline_cell(record, ContactField::LastName)}
            </td>
            <td>{self.inline_cell(record, ContactField::Email)}</td>
            <td>{self.inline_cell(record, ContactField::Phone)}</td>
        </tr>
        }
    }

    /// Commits on the change event, so a cell edit saves when the user
    /// leaves the cell.
    fn inline_cell(&self, record: &ContactRecord, field: ContactField) -> Html {
        let id = record.id.clone();
        html! {
            <input class="cell_input" value=record.field(field).to_string()
                onchange=self.link.callback(move |e: ChangeData| match e {
                    ChangeData::Value(value) => ResultsMsg::CellCommit(id.clone(), field, value),
                    _ => ResultsMsg::Nope,
                }) />
        }
    }
}

use log::*;

use wasm_bindgen::prelude::*;
use yew::{html, Callback, Component, ComponentLink, Html, ShouldRender};

use crate::bindings::toast_bindings::ToastNotifier;
use crate::ctrl::SubmissionController;
use crate::transport::ConnectionManager;
use crate::views::{contact_form, PresentationMode};

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);
}

pub enum AppMessage {
    ApplicationError(String),
}

pub struct AppContainer {
    link: ComponentLink<Self>,
    on_error: Callback<String>,
    controller: SubmissionController,
    notifier: ToastNotifier,
    mode: PresentationMode,
}

impl Component for AppContainer {
    type Message = AppMessage;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        info!("Initialising app...");

        let on_error: Callback<String> = link.callback(AppMessage::ApplicationError);

        let connections = ConnectionManager::new();
        let controller = SubmissionController::new(connections);
        let notifier = ToastNotifier::new();

        let mode = current_mode();
        info!("Presentation mode: {:?}", mode);

        AppContainer { link, on_error, controller, notifier, mode }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        return match msg {
            AppMessage::ApplicationError(message) => {
                error!("{}", message);
                alert(&message);
                true
            }
        };
    }

    fn change(&mut self, _: Self::Properties) -> ShouldRender {
        // don't render
        false
    }

    fn view(&self) -> Html {
        html! {
        <div>
            <contact_form::ContactFormView
             on_error=self.on_error.clone()
             controller=self.controller.clone()
             notifier=self.notifier.clone()
             mode=self.mode />
        </div>
        }
    }
}

fn current_mode() -> PresentationMode {
    // TODO error handling
    let search = web_sys::window().unwrap().location().search().unwrap();

    PresentationMode::from_search(&search)
}

//! Client-only contact form: nothing is sent, the button just walks through
//! Idle -> Sending -> Sent -> Idle on fixed delays.

use serde::Serialize;
use serde_json::json;

use crate::{
    controller::{PageController, Task},
    dom::Dom,
    logging::LogLevel,
};

const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
const SENDING_LABEL: &str = "Sending...";
const SENT_LABEL: &str = "Message Sent!";
const SENT_BACKGROUND: &str = "linear-gradient(45deg, #00cc66, #00ff88)";

const SENDING_DURATION_MS: u32 = 1_500;
const SENT_DURATION_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Sending,
    Sent,
}

impl FormPhase {
    fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Sent => "sent",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl<D: Dom> PageController<D> {
    #[cfg(test)]
    pub fn form_phase(&self) -> FormPhase {
        self.form
    }

    pub fn on_submit(&mut self) {
        let Some(form) = self.refs.contact_form.clone() else {
            return;
        };

        if self.form != FormPhase::Idle {
            self.log(
                LogLevel::Debug,
                "form_submit_ignored",
                json!({ "phase": self.form.as_str() }),
            );
            return;
        }

        let submission = FormSubmission {
            name: self.dom.form_value(&form, "name"),
            email: self.dom.form_value(&form, "email"),
            message: self.dom.form_value(&form, "message"),
        };

        let buttons = self.dom.query_within(&form, SUBMIT_BUTTON_SELECTOR);
        if let Some(button) = buttons.into_iter().next() {
            let label = self.dom.text(&button);
            self.dom.set_text(&button, SENDING_LABEL);
            self.dom.set_disabled(&button, true);
            self.form = FormPhase::Sending;
            self.timeline
                .schedule(SENDING_DURATION_MS, Task::ShowSent { button, label });
        }

        self.log(
            LogLevel::Info,
            "form_submitted",
            serde_json::to_value(&submission).unwrap_or_default(),
        );
    }

    pub(crate) fn show_sent(&mut self, button: D::Element, label: String) {
        self.dom.set_text(&button, SENT_LABEL);
        self.dom.set_style(&button, "background", SENT_BACKGROUND);
        self.form = FormPhase::Sent;
        self.timeline
            .schedule(SENT_DURATION_MS, Task::ResetForm { button, label });
    }

    pub(crate) fn reset_form(&mut self, button: &D::Element, label: &str) {
        self.dom.set_text(button, label);
        self.dom.set_disabled(button, false);
        self.dom.set_style(button, "background", "");
        if let Some(form) = &self.refs.contact_form {
            self.dom.reset_form(form);
        }
        self.form = FormPhase::Idle;
    }
}

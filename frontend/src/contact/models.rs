use std::collections::BTreeMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use yew::Reducible;

pub const FORM_INVALID_MESSAGE: &str = "Por favor, corrija os erros no formulário";
pub const SUCCESS_MESSAGE: &str = "✓ Mensagem enviada com sucesso! Entrarei em contato em breve.";
pub const FAILURE_MESSAGE: &str = "✗ Erro ao enviar mensagem. Tente novamente mais tarde.";
pub const DEV_MODE_MESSAGE: &str =
    "⚠ Modo de desenvolvimento: Mensagem não enviada. Configure o endpoint.";

pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Nome",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "email",
        label: "Email",
        kind: FieldKind::Email,
        required: true,
    },
    FieldSpec {
        name: "subject",
        label: "Assunto",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        name: "message",
        label: "Mensagem",
        kind: FieldKind::TextArea,
        required: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "Este campo é obrigatório",
            FieldError::InvalidEmail => "Por favor, insira um email válido",
            FieldError::TooShort => "A mensagem deve ter pelo menos 10 caracteres",
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Checks run in order: presence, email shape, message length.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return if spec.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }
    if spec.kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    if spec.name == "message" && trimmed.chars().count() < MESSAGE_MIN_CHARS {
        return Err(FieldError::TooShort);
    }
    Ok(())
}

/// Field name to value, serialized as the JSON request body.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormSubmission(pub BTreeMap<String, String>);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Rejected,
    DevMode(FormSubmission),
    Post {
        endpoint: String,
        payload: FormSubmission,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Input { index: usize, value: String },
    Blur(usize),
    SubmitAttempted,
    Succeeded,
    Failed,
    DevModeAccepted,
    Reset,
    StatusExpired(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub specs: &'static [FieldSpec],
    pub fields: Vec<FieldState>,
    pub status: Option<FormStatus>,
    /// Bumped whenever a status is shown so stale timers can be told apart.
    pub status_generation: u32,
}

impl FormState {
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        Self {
            specs,
            fields: vec![FieldState::default(); specs.len()],
            status: None,
            status_generation: 0,
        }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|s| s.name == name)
    }

    fn validate_at(&mut self, index: usize) -> bool {
        let (Some(spec), Some(field)) = (self.specs.get(index), self.fields.get_mut(index)) else {
            return true;
        };
        field.error = validate_field(spec, &field.value).err();
        field.error.is_none()
    }

    fn show_status(&mut self, kind: StatusKind, message: &'static str) {
        self.status = Some(FormStatus { kind, message });
        self.status_generation += 1;
    }

    fn reset_fields(&mut self) {
        for field in &mut self.fields {
            *field = FieldState::default();
        }
    }

    fn required_fields_valid(&self) -> bool {
        self.specs
            .iter()
            .zip(&self.fields)
            .filter(|(spec, _)| spec.required)
            .all(|(spec, field)| validate_field(spec, &field.value).is_ok())
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Input { index, value } => {
                let Some(field) = self.fields.get_mut(index) else {
                    return;
                };
                field.value = value;
                if field.error.is_some() {
                    self.validate_at(index);
                }
            }
            FormAction::Blur(index) => {
                self.validate_at(index);
            }
            FormAction::SubmitAttempted => {
                let required: Vec<usize> = (0..self.specs.len())
                    .filter(|&i| self.specs[i].required)
                    .collect();
                let mut valid = true;
                for index in required {
                    valid &= self.validate_at(index);
                }
                if !valid {
                    self.show_status(StatusKind::Error, FORM_INVALID_MESSAGE);
                }
            }
            FormAction::Succeeded => {
                self.show_status(StatusKind::Success, SUCCESS_MESSAGE);
                self.reset_fields();
            }
            FormAction::Failed => self.show_status(StatusKind::Error, FAILURE_MESSAGE),
            FormAction::DevModeAccepted => self.show_status(StatusKind::Success, DEV_MODE_MESSAGE),
            FormAction::Reset => self.reset_fields(),
            FormAction::StatusExpired(generation) => {
                let expired = generation == self.status_generation
                    && self.status.map(|s| s.kind) == Some(StatusKind::Success);
                if expired {
                    self.status = None;
                }
            }
        }
    }

    /// Decides what a submit should do, without touching any state.
    pub fn plan_submission(&self, endpoint: Option<&str>) -> Submission {
        if !self.required_fields_valid() {
            return Submission::Rejected;
        }
        let payload = FormSubmission(
            self.specs
                .iter()
                .zip(&self.fields)
                .map(|(spec, field)| (spec.name.to_string(), field.value.clone()))
                .collect(),
        );
        match endpoint {
            Some(endpoint) => Submission::Post {
                endpoint: endpoint.to_string(),
                payload,
            },
            None => Submission::DevMode(payload),
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://forms.example.com/f/abc";

    fn form() -> FormState {
        FormState::new(CONTACT_FIELDS)
    }

    fn fill(state: &mut FormState, name: &str, value: &str) {
        let index = state.index_of(name).unwrap();
        state.apply(FormAction::Input {
            index,
            value: value.to_string(),
        });
    }

    fn valid_form() -> FormState {
        let mut state = form();
        fill(&mut state, "name", "Ana Souza");
        fill(&mut state, "email", "a@b.co");
        fill(&mut state, "message", "Gostaria de conversar sobre um projeto.");
        state
    }

    fn error_of(state: &FormState, name: &str) -> Option<FieldError> {
        state.fields[state.index_of(name).unwrap()].error
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ana.souza+site@mail.example.com.br"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn validation_order() {
        let email = &CONTACT_FIELDS[1];
        let message = &CONTACT_FIELDS[3];
        assert_eq!(validate_field(email, "  "), Err(FieldError::Required));
        assert_eq!(validate_field(email, "nope"), Err(FieldError::InvalidEmail));
        assert_eq!(validate_field(email, "a@b.co"), Ok(()));
        assert_eq!(validate_field(message, "curta"), Err(FieldError::TooShort));
        assert_eq!(validate_field(message, "   123456789   "), Err(FieldError::TooShort));
        assert_eq!(validate_field(message, "1234567890"), Ok(()));
    }

    #[test]
    fn optional_field_may_stay_empty() {
        let subject = &CONTACT_FIELDS[2];
        assert_eq!(validate_field(subject, ""), Ok(()));
    }

    #[test]
    fn blur_marks_empty_required_field() {
        let mut state = form();
        state.apply(FormAction::Blur(0));
        assert_eq!(error_of(&state, "name"), Some(FieldError::Required));
        assert_eq!(FieldError::Required.message(), "Este campo é obrigatório");
    }

    #[test]
    fn input_revalidates_only_fields_in_error() {
        let mut state = form();
        fill(&mut state, "email", "x");
        assert_eq!(error_of(&state, "email"), None);

        state.apply(FormAction::Blur(1));
        assert_eq!(error_of(&state, "email"), Some(FieldError::InvalidEmail));

        fill(&mut state, "email", "x@y.z");
        assert_eq!(error_of(&state, "email"), None);
    }

    #[test]
    fn empty_required_field_blocks_submission() {
        let mut state = valid_form();
        fill(&mut state, "name", "");
        assert_eq!(state.plan_submission(Some(ENDPOINT)), Submission::Rejected);

        state.apply(FormAction::SubmitAttempted);
        assert_eq!(error_of(&state, "name"), Some(FieldError::Required));
        assert_eq!(
            state.status,
            Some(FormStatus {
                kind: StatusKind::Error,
                message: FORM_INVALID_MESSAGE
            })
        );
    }

    #[test]
    fn bad_email_blocks_submission() {
        let mut state = valid_form();
        fill(&mut state, "email", "not-an-email");
        assert_eq!(state.plan_submission(Some(ENDPOINT)), Submission::Rejected);
        state.apply(FormAction::SubmitAttempted);
        assert_eq!(error_of(&state, "email"), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn valid_form_posts_every_field() {
        let state = valid_form();
        let Submission::Post { endpoint, payload } = state.plan_submission(Some(ENDPOINT)) else {
            panic!("expected a POST");
        };
        assert_eq!(endpoint, ENDPOINT);
        assert_eq!(payload.0.len(), 4);
        assert_eq!(payload.0["email"], "a@b.co");
        assert_eq!(payload.0["subject"], "");
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["name"], "Ana Souza");
    }

    #[test]
    fn submit_attempt_on_valid_form_sets_no_status() {
        let mut state = valid_form();
        state.apply(FormAction::SubmitAttempted);
        assert!(state.status.is_none());
        assert!(state.fields.iter().all(|f| f.error.is_none()));
    }

    #[test]
    fn no_endpoint_means_dev_mode() {
        let state = valid_form();
        assert!(matches!(state.plan_submission(None), Submission::DevMode(_)));
    }

    #[test]
    fn success_clears_fields_and_status_expires() {
        let mut state = valid_form();
        state.apply(FormAction::Blur(2));
        state.apply(FormAction::Succeeded);
        assert!(state.fields.iter().all(|f| f.value.is_empty() && f.error.is_none()));
        assert_eq!(state.status.map(|s| s.kind), Some(StatusKind::Success));

        let generation = state.status_generation;
        state.apply(FormAction::StatusExpired(generation));
        assert!(state.status.is_none());
    }

    #[test]
    fn stale_expiry_does_not_clear_newer_status() {
        let mut state = valid_form();
        state.apply(FormAction::Succeeded);
        let stale = state.status_generation;
        state.apply(FormAction::DevModeAccepted);
        state.apply(FormAction::StatusExpired(stale));
        assert_eq!(state.status.map(|s| s.message), Some(DEV_MODE_MESSAGE));
    }

    #[test]
    fn error_status_does_not_expire() {
        let mut state = valid_form();
        state.apply(FormAction::Failed);
        let generation = state.status_generation;
        state.apply(FormAction::StatusExpired(generation));
        assert_eq!(state.status.map(|s| s.message), Some(FAILURE_MESSAGE));
    }

    #[test]
    fn failure_keeps_values() {
        let mut state = valid_form();
        let before: Vec<_> = state.fields.iter().map(|f| f.value.clone()).collect();
        state.apply(FormAction::Failed);
        let after: Vec<_> = state.fields.iter().map(|f| f.value.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(state.status.map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut state = form();
        state.apply(FormAction::SubmitAttempted);
        fill(&mut state, "name", "Ana");
        state.apply(FormAction::Reset);
        assert!(state.fields.iter().all(|f| *f == FieldState::default()));
    }
}

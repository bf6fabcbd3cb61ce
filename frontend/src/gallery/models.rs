use std::fmt;
use std::rc::Rc;

use serde::Deserialize;
use yew::Reducible;

use crate::modal::models::{ModalAction, ModalState};

pub const FEED_ERROR_MESSAGE: &str =
    "Não foi possível carregar os projetos. Tente novamente mais tarde.";

/// Feed ids are opaque: any JSON number or string is accepted.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ProjectId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{}", n),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub short: String,
    pub details: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub image: Option<String>,
    pub features: Option<Vec<String>>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

impl Project {
    pub fn image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.image.as_deref().filter(|s| !s.is_empty()).unwrap_or(fallback)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Feed {
    Loading,
    Ready(Rc<[Project]>),
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    Loaded(Vec<Project>),
    Failed,
    Open(usize),
    Close,
    Escape,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    pub feed: Feed,
    pub modal: ModalState,
    selected: Option<usize>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            feed: Feed::Loading,
            modal: ModalState::default(),
            selected: None,
        }
    }
}

impl GalleryState {
    pub fn apply(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::Loaded(projects) => {
                self.feed = Feed::Ready(projects.into());
                self.selected = None;
            }
            GalleryAction::Failed => {
                self.feed = Feed::Failed;
                self.selected = None;
            }
            GalleryAction::Open(index) => {
                if index < self.cards().len() {
                    self.selected = Some(index);
                    self.modal.apply(ModalAction::Open);
                }
            }
            GalleryAction::Close => self.modal.apply(ModalAction::Close),
            GalleryAction::Escape => self.modal.apply(ModalAction::Escape),
        }
    }

    /// Projects in feed order; empty while loading or after a failure.
    pub fn cards(&self) -> &[Project] {
        match &self.feed {
            Feed::Ready(projects) => &projects[..],
            Feed::Loading | Feed::Failed => &[],
        }
    }

    /// The project shown in the overlay. Content stays in place while the
    /// overlay animates closed.
    pub fn selected(&self) -> Option<&Project> {
        self.selected.and_then(|i| self.cards().get(i))
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self.feed {
            Feed::Failed => Some(FEED_ERROR_MESSAGE),
            _ => None,
        }
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use super::models::{GalleryAction, GalleryState, Project};
use crate::config::SiteConfig;
use crate::modal::models::FocusReturn;
use crate::modal::{use_escape, use_modal_projection};
use crate::reveal::{self, RevealOptions};
use crate::utils::api::fetch_json;
use crate::utils::scroll_lock::LockHolder;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub config: SiteConfig,
}

fn tech_tags(tech: &[String]) -> Html {
    html! {
        { for tech.iter().map(|t| html! { <span class="tech-tag">{t.clone()}</span> }) }
    }
}

fn project_detail(project: &Project, fallback_image: &str) -> Html {
    html! {
        <>
            <div id="modalImage" class="modal-image">
                <img src={project.image_or(fallback_image).to_string()} alt={project.title.clone()} />
            </div>
            <h3 id="modalTitle" class="modal-title">{project.title.clone()}</h3>
            <p id="modalDescription" class="modal-description">{project.details.clone()}</p>
            <div id="modalTech" class="project-tech">
                { tech_tags(&project.tech) }
            </div>
            <div id="modalFeatures" class="modal-features">
                if let Some(features) = &project.features {
                    <h4>{"Funcionalidades"}</h4>
                    <ul>
                        { for features.iter().map(|f| html! { <li>{f.clone()}</li> }) }
                    </ul>
                }
            </div>
            <div id="modalFooter" class="modal-footer">
                if let Some(github) = &project.github {
                    <a href={github.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-secondary">
                        <span>{"GitHub"}</span>
                    </a>
                }
                if let Some(demo) = &project.demo {
                    <a href={demo.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                        <span>{"Ver Demo"}</span>
                    </a>
                }
            </div>
        </>
    }
}

/// Project grid loaded from the JSON feed, plus the detail overlay.
#[function_component]
pub fn Gallery(props: &GalleryProps) -> Html {
    let state = use_reducer(GalleryState::default);
    let grid_ref = use_node_ref();
    let close_ref = use_node_ref();

    // Load the feed once; no retry on failure
    {
        let state = state.clone();
        let url = props.config.projects_url.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch_json::<Vec<Project>>(&url).await {
                        Ok(projects) => {
                            log::info!("Loaded {} projects", projects.len());
                            state.dispatch(GalleryAction::Loaded(projects));
                        }
                        Err(e) => {
                            log::error!("Error loading projects: {}", e);
                            state.dispatch(GalleryAction::Failed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    // Cards arrive after the page-wide reveal pass, so they get their own
    {
        let grid_ref = grid_ref.clone();
        let options = RevealOptions {
            delay_step_ms: props.config.reveal_delay_ms,
            threshold: props.config.reveal_threshold,
        };
        use_effect_with_deps(
            move |count| {
                let handle = if *count > 0 {
                    grid_ref.cast::<Element>().map(|grid| reveal::attach(&grid, options))
                } else {
                    None
                };
                move || drop(handle)
            },
            state.cards().len(),
        );
    }

    use_modal_projection(
        state.modal,
        close_ref.clone(),
        NodeRef::default(),
        FocusReturn::None,
        LockHolder::ProjectModal,
    );

    {
        let state = state.clone();
        use_escape(Callback::from(move |_| state.dispatch(GalleryAction::Escape)));
    }

    let on_close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GalleryAction::Close))
    };

    let fallback_image = props.config.fallback_image.as_str();
    let cards = state.cards().iter().enumerate().map(|(index, project)| {
        let on_details = {
            let state = state.clone();
            Callback::from(move |_: MouseEvent| state.dispatch(GalleryAction::Open(index)))
        };
        html! {
            <article
                class="project-card"
                data-animate=""
                role="listitem"
                style={format!("transition-delay: {:.1}s", index as f64 * 0.1)}
            >
                <div class="project-image">
                    <img
                        src={project.image_or(fallback_image).to_string()}
                        alt={project.title.clone()}
                        loading="lazy"
                    />
                </div>
                <div class="project-content">
                    <h3 class="project-title">{project.title.clone()}</h3>
                    <p class="project-description">{project.short.clone()}</p>
                    <div class="project-tech">
                        { tech_tags(&project.tech) }
                    </div>
                    <div class="project-footer">
                        <button
                            class="project-link"
                            type="button"
                            data-project-id={project.id.to_string()}
                            onclick={on_details}
                        >
                            <span>{"Ver detalhes"}</span>
                        </button>
                    </div>
                </div>
            </article>
        }
    });

    html! {
        <>
            <div id="projectsGrid" class="projects-grid" role="list" ref={grid_ref}>
                if let Some(message) = state.error_message() {
                    <div class="error-message">
                        <p>{message}</p>
                    </div>
                } else {
                    { for cards }
                }
            </div>
            <div
                id="projectModal"
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modalTitle"
                aria-hidden={state.modal.aria_hidden()}
            >
                <div class="modal-overlay" onclick={on_close.clone()}></div>
                <div class="modal-content">
                    <button
                        class="modal-close"
                        type="button"
                        aria-label="Fechar"
                        ref={close_ref}
                        onclick={on_close}
                    >
                        {"×"}
                    </button>
                    if let Some(project) = state.selected() {
                        { project_detail(project, fallback_image) }
                    }
                </div>
            </div>
        </>
    }
}

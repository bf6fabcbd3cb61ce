use web_sys::Element;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::contact::contact_form::ContactForm;
use crate::gallery::gallery::Gallery;
use crate::modal::info_modal::InfoModal;
use crate::nav::navbar::{NavLink, Navbar};
use crate::reveal::{self, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: SiteConfig,
}

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("#inicio", "Início"),
        NavLink::new("#sobre", "Sobre"),
        NavLink::new("#projetos", "Projetos"),
        NavLink::new("#contato", "Contato"),
    ]
}

#[function_component]
pub fn Home(props: &HomeProps) -> Html {
    let main_ref = use_node_ref();

    {
        let main_ref = main_ref.clone();
        let options = RevealOptions {
            delay_step_ms: props.config.reveal_delay_ms,
            threshold: props.config.reveal_threshold,
        };
        use_effect_with_deps(
            move |_| {
                let handle = main_ref.cast::<Element>().map(|root| reveal::attach(&root, options));
                gloo_console::log!(
                    "%c Portfolio carregado ",
                    "background: #f97316; color: #fff; padding: 4px 8px; border-radius: 4px; font-weight: bold;"
                );
                move || drop(handle)
            },
            (),
        );
    }

    html! {
        <>
            <Navbar config={props.config.clone()} brand="Portfolio" links={nav_links()} />
            <main ref={main_ref}>
                <header id="inicio" class="hero">
                    <div class="hero-content" data-animate="">
                        <h1 class="hero-title">{"Desenvolvedor de Software"}</h1>
                        <p class="hero-subtitle">
                            {"Construo aplicações web rápidas, acessíveis e fáceis de manter."}
                        </p>
                        <div class="hero-cta">
                            <a href="#projetos" class="btn btn-primary">{"Ver projetos"}</a>
                            <a href="#contato" class="btn btn-secondary">{"Fale comigo"}</a>
                        </div>
                    </div>
                </header>

                <section id="sobre" class="section about">
                    <h2 class="section-title" data-animate="">{"Sobre"}</h2>
                    <div class="about-content" data-animate="">
                        <p>
                            {"Técnico em desenvolvimento de sistemas, com foco em front-end e integrações."}
                        </p>
                        <InfoModal badge_label="Formação técnica" title="Formação">
                            <p>{"Curso técnico em Desenvolvimento de Sistemas, concluído com projeto integrador."}</p>
                        </InfoModal>
                    </div>
                </section>

                <section id="projetos" class="section projects">
                    <h2 class="section-title" data-animate="">{"Projetos"}</h2>
                    <Gallery config={props.config.clone()} />
                </section>

                <section id="contato" class="section contact">
                    <h2 class="section-title" data-animate="">{"Contato"}</h2>
                    <div data-animate="">
                        <ContactForm config={props.config.clone()} />
                    </div>
                </section>
            </main>
            <footer class="footer">
                <p>{"Feito com Rust e WebAssembly."}</p>
            </footer>
        </>
    }
}

use crate::domain::{adapters::Git, models::Language};

pub struct AppContext<G: Git> {
    pub git: G,
    pub language: Language,
}

impl<G: Git> AppContext<G> {
    pub fn new(git: G, language: Language) -> AppContext<G> {
        log::info!("using '{:?}' descriptions", language);
        AppContext { git, language }
    }
}

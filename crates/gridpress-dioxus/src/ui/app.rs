use dioxus::prelude::*;
use gridpress_engine::{Article, Cmd, io};
use std::path::PathBuf;

use super::components::{ArticleBody, LibraryErrorScreen};
use super::context::{NavTarget, RefData, RenderMode};
use crate::demo;

const GRIDPRESS_CSS: &str = include_str!("../assets/gridpress.css");

/// Pick the article to open: the first file in the library, or a freshly
/// seeded sample article persisted so the next launch finds it.
fn open_or_seed(library_path: &PathBuf) -> Result<(PathBuf, Article), String> {
    let files = io::scan_articles(library_path)
        .map_err(|e| format!("Could not scan library '{}': {e}", library_path.display()))?;

    if let Some(path) = files.first() {
        let article = io::load_article(path)
            .map_err(|e| format!("Could not load article '{}': {e}", path.display()))?;
        return Ok((path.clone(), article));
    }

    let article = demo::demo_article();
    let path = library_path.join(format!("{}.json", article.id));
    io::save_article(&path, &article)
        .map_err(|e| format!("Could not seed sample article '{}': {e}", path.display()))?;
    log::info!("Seeded sample article at {}", path.display());
    Ok((path, article))
}

#[component]
pub fn App(library_path: PathBuf, refdata: RefData) -> Element {
    let mut opened = use_signal(|| open_or_seed(&library_path));
    let mut mode = use_signal(|| RenderMode::Edit);

    let (article_path, article) = match &*opened.read() {
        Ok((path, article)) => (path.clone(), article.clone()),
        Err(message) => {
            let details = message.clone();
            return rsx! {
                LibraryErrorScreen { library_path: library_path.clone(), details }
            };
        }
    };

    let on_command = {
        let article_path = article_path.clone();
        Callback::new(move |cmd: Cmd| {
            let mut guard = opened.write();
            let Ok((_, article)) = &mut *guard else {
                return;
            };
            match article.body.apply(cmd) {
                Ok(patch) => {
                    log::debug!(
                        "applied command, document version {} (touched {:?})",
                        patch.version,
                        patch.touched
                    );
                    // Auto-save after every effective edit, as plain files are
                    // the only persistence layer.
                    if let Err(e) = io::save_article(&article_path, article) {
                        log::error!("Auto-save failed for {}: {e}", article_path.display());
                    }
                }
                Err(e) => log::warn!("Rejected command: {e}"),
            }
        })
    };

    let on_navigate = Callback::new(move |target: NavTarget| {
        // Routing lives in the host site; the desktop preview only records
        // where publish-mode rendering would have gone.
        log::info!("navigation requested: {target:?}");
    });

    let current_mode = *mode.read();
    let mode_label = if current_mode.is_edit() {
        "Preview"
    } else {
        "Edit"
    };

    rsx! {
        style { {GRIDPRESS_CSS} }
        div {
            class: "app-container",
            header {
                class: "app-header",
                span { class: "app-name", "gridpress" }
                button {
                    class: "mode-toggle",
                    onclick: move |_| {
                        let next = if mode.read().is_edit() {
                            RenderMode::Publish
                        } else {
                            RenderMode::Edit
                        };
                        *mode.write() = next;
                    },
                    "{mode_label}"
                }
                button {
                    class: "save-button",
                    onclick: {
                        let article_path = article_path.clone();
                        move |_| {
                            if let Ok((_, article)) = &*opened.read() {
                                match io::save_article(&article_path, article) {
                                    Ok(()) => log::info!("Saved {}", article_path.display()),
                                    Err(e) => {
                                        log::error!("Save failed for {}: {e}", article_path.display());
                                    }
                                }
                            }
                        }
                    },
                    "Save"
                }
            }
            article {
                class: "article",
                if current_mode.is_edit() {
                    input {
                        class: "article-title-input",
                        placeholder: "Title",
                        value: "{article.title}",
                        oninput: move |event: Event<FormData>| {
                            if let Ok((_, article)) = &mut *opened.write() {
                                article.title = event.value();
                            }
                        }
                    }
                    textarea {
                        class: "article-standfirst-input",
                        placeholder: "Standfirst",
                        value: "{article.standfirst}",
                        oninput: move |event: Event<FormData>| {
                            if let Ok((_, article)) = &mut *opened.write() {
                                article.standfirst = event.value();
                            }
                        }
                    }
                } else {
                    h1 { class: "article-title", "{article.title}" }
                    if !article.standfirst.is_empty() {
                        p { class: "article-standfirst", "{article.standfirst}" }
                    }
                }
                ArticleBody {
                    document: article.body.clone(),
                    mode: current_mode,
                    refdata: refdata.clone(),
                    on_command,
                    on_navigate,
                }
            }
        }
    }
}

use dioxus::prelude::*;
use gridpress_config::Config;
use std::path::PathBuf;

/// Shown instead of the editor when the article library cannot be opened.
///
/// Mirrors the two ways out of the situation: relaunch with a different
/// library directory, or fix `library_path` in the config file.
#[component]
pub fn LibraryErrorScreen(library_path: PathBuf, details: String) -> Element {
    let library = library_path.display().to_string();
    let config = Config::config_path().display().to_string();

    rsx! {
        div {
            class: "error-screen",
            h1 { class: "error-title", "Cannot open article library" }
            code { class: "error-library", "{library}" }
            p { class: "error-details", "{details}" }
            p {
                class: "error-hint",
                "Relaunch with a different library directory as the first "
                "argument, or set library_path in "
                code { "{config}" }
                "."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn screen_html(details: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            LibraryErrorScreen,
            LibraryErrorScreenProps {
                library_path: PathBuf::from("/tmp/articles"),
                details: details.to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn shows_the_failing_library_and_details() {
        let html = screen_html("permission denied");
        assert!(html.contains("/tmp/articles"));
        assert!(html.contains("permission denied"));
    }

    #[test]
    fn points_at_the_config_file_as_a_way_out() {
        let html = screen_html("scan failed");
        assert!(html.contains("library_path"));
        assert!(html.contains("config.toml"));
    }
}

use serde::Serialize;

/// Route segments rendered without the site header and footer.
pub const CHROMELESS_PREFIXES: [&str; 2] = ["/auth", "/dashboard"];

/// Whether the site header and footer are rendered for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chrome {
    pub header: bool,
    pub footer: bool,
}

impl Chrome {
    pub const SHOWN: Chrome = Chrome { header: true, footer: true };
    pub const HIDDEN: Chrome = Chrome { header: false, footer: false };
}

pub fn hides_chrome(path: &str) -> bool {
    CHROMELESS_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Plain string-prefix check, so `/authors` is treated like `/auth/login`.
pub fn chrome_for_path(path: &str) -> Chrome {
    if hides_chrome(path) {
        Chrome::HIDDEN
    } else {
        Chrome::SHOWN
    }
}

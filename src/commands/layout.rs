use crate::layout::chrome_for_path;

fn visibility(shown: bool) -> &'static str {
    if shown {
        "shown"
    } else {
        "hidden"
    }
}

pub fn run(paths: &[String]) {
    for path in paths {
        let chrome = chrome_for_path(path);
        println!(
            "{:<32} header: {:<6} footer: {}",
            path,
            visibility(chrome.header),
            visibility(chrome.footer)
        );
    }
}

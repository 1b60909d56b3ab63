//! Document head adapter for theme injection.

use crate::core::ports::StyleHost;
use gloo::console;
use gloo::utils::document;
use web_sys::{Document, Element};

use super::js_detail;

/// [`StyleHost`] that manages `<style>` elements in `document.head`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DocumentStyleHost;

impl StyleHost for DocumentStyleHost {
    fn install_style(&self, id: &str, css: &str) {
        let document = document();
        let element = match document.get_element_by_id(id) {
            Some(element) => element,
            None => match create_style(&document, id) {
                Ok(element) => element,
                Err(detail) => {
                    console::error!("theme style element unavailable", id, detail);
                    return;
                }
            },
        };
        element.set_text_content(Some(css));
    }
}

fn create_style(document: &Document, id: &str) -> Result<Element, String> {
    let element = document
        .create_element("style")
        .map_err(|err| js_detail(&err))?;
    element.set_id(id);
    let head = document
        .head()
        .ok_or_else(|| "document has no head".to_string())?;
    head.append_child(&element).map_err(|err| js_detail(&err))?;
    Ok(element)
}

use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::{add_click_listener, add_input_listener, build_element};

const BRAND_URL: &str = "https://uxcel.com?ref=chessurisme&utm_source=uxcel-icon-set.vercel.app";
const SOURCE_CODE_URL: &str =
    "https://github.com/chessurisme/uxcel-icon-set?ref=chessurisme&utm_source=uxcel-icon-set.vercel.app";
const FIGMA_URL: &str =
    "https://www.figma.com/community/file/1242748013102755522/500-free-icon-set-by-uxcel?ref=chessurisme&utm_source=uxcel-icon-set.vercel.app";

/// Heading block: title, "by <logo>.com" reference row, and description.
/// Clicking the logo opens the brand site in a new tab.
pub fn build_heading(document: &web::Document) -> Result<web::Element> {
    let title = build_element(
        document,
        "h1",
        &[
            ("id", "uxcel-icons-heading"),
            ("class", "uxcel-icons-heading display"),
        ],
        &[],
    )?;
    title.set_text_content(Some("Uxcel Icons"));

    let by = build_element(document, "p", &[("id", "by"), ("class", "by")], &[])?;
    by.set_text_content(Some("by"));

    let logo = build_element(
        document,
        "img",
        &[
            ("src", "assets/images/brand.svg"),
            ("id", "uxcel-icons-logo"),
            ("class", "uxcel-icons-logo"),
            ("alt", "Uxcel Icon Logo"),
            ("draggable", "false"),
        ],
        &[],
    )?;

    let dot_com = build_element(
        document,
        "p",
        &[("id", "dot-com"), ("class", "dot-com")],
        &[],
    )?;
    dot_com.set_text_content(Some(".com"));

    let reference = build_element(
        document,
        "div",
        &[("id", "reference-wrapper"), ("class", "reference-wrapper")],
        &[&by, &logo, &dot_com],
    )?;

    let description = build_element(
        document,
        "p",
        &[
            ("id", "uxcel-icons-description"),
            ("class", "uxcel-icons-description"),
        ],
        &[],
    )?;
    description.set_text_content(Some(
        "Discover Uxcel's comprehensive Free Icon Set, a versatile collection of over 500 \
         beautifully crafted, pixel-perfect icons, now had a dedicated website.",
    ));

    add_click_listener(&logo, move || {
        if let Some(window) = web::window() {
            if let Err(e) = window.open_with_url_and_target(BRAND_URL, "_blank") {
                log::error!("open brand link failed: {:?}", e);
            }
        }
    });

    build_element(
        document,
        "div",
        &[("id", "heading-wrapper"), ("class", "heading-wrapper")],
        &[&title, &reference, &description],
    )
}

/// Search bar: leading icon plus the search input. Clicking anywhere in the
/// wrapper focuses the input; typing marks the wrapper active.
pub fn build_search_bar(document: &web::Document) -> Result<web::Element> {
    let icon = build_element(
        document,
        "img",
        &[
            ("id", "search-icon"),
            ("alt", "Search icon"),
            ("src", "icons/Ecommerce/Outline/Search.svg"),
        ],
        &[],
    )?;

    let input = build_element(
        document,
        "input",
        &[
            ("id", "search-bar"),
            ("type", "search"),
            ("placeholder", "Search icons..."),
            ("aria-label", "Search for icons"),
        ],
        &[],
    )?;

    let wrapper = build_element(
        document,
        "div",
        &[("id", "search-wrapper"), ("class", "search-wrapper")],
        &[&icon, &input],
    )?;

    let input_el: web::HtmlElement = input
        .clone()
        .dyn_into()
        .map_err(|e| anyhow!("search input is not an html element: {:?}", e))?;
    add_click_listener(&wrapper, move || {
        _ = input_el.focus();
    });

    let wrapper_for_input = wrapper.clone();
    add_input_listener(&input, move || {
        _ = wrapper_for_input.class_list().add_1("active");
    });

    Ok(wrapper)
}

fn build_chip(document: &web::Document, label: &str) -> Result<web::Element> {
    let id = format!("{}-chip", label);
    let chip = build_element(
        document,
        "span",
        &[("id", id.as_str()), ("class", "chip"), ("data-state", "on")],
        &[],
    )?;
    chip.set_text_content(Some(label));

    let chip_for_toggle = chip.clone();
    let label = label.to_string();
    add_click_listener(&chip, move || {
        let next = if chip_for_toggle.get_attribute("data-state").as_deref() == Some("on") {
            "off"
        } else {
            "on"
        };
        _ = chip_for_toggle.set_attribute("data-state", next);
        log::info!("{} chip toggled {}", label, next);
    });

    Ok(chip)
}

/// Row of style-filter chips, each toggling its own `data-state`.
pub fn build_chip_row(document: &web::Document) -> Result<web::Element> {
    let outlined = build_chip(document, "Outlined")?;
    let filled = build_chip(document, "Filled")?;
    let colored = build_chip(document, "Colored")?;
    build_element(
        document,
        "div",
        &[("id", "chip-container"), ("class", "chip-container")],
        &[&outlined, &filled, &colored],
    )
}

fn build_link(document: &web::Document, text: &str, href: &str) -> Result<web::Element> {
    let anchor = build_element(
        document,
        "a",
        &[
            ("href", href),
            ("target", "_blank"),
            ("rel", "noopener noreferrer"),
        ],
        &[],
    )?;
    anchor.set_text_content(Some(text));

    let tab_icon = build_element(
        document,
        "img",
        &[
            ("alt", "Tab icon"),
            ("class", "tab-icon"),
            ("src", "icons/Arrows/Outline/New_Tab.svg"),
        ],
        &[],
    )?;

    build_element(
        document,
        "div",
        &[("class", "link-wrapper")],
        &[&anchor, &tab_icon],
    )
}

/// External links row: source code and the Figma community file.
pub fn build_links(document: &web::Document) -> Result<web::Element> {
    let source = build_link(document, "Source Code", SOURCE_CODE_URL)?;
    let figma = build_link(document, "Icons in Figma", FIGMA_URL)?;
    build_element(
        document,
        "div",
        &[("id", "links"), ("class", "links")],
        &[&source, &figma],
    )
}

//! Declarative DOM construction for every page section. No logic here
//! beyond iterating the content tables.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement};

use super::content::{
    BRAND, BRAND_SUFFIX, CHAT_HREF, CONTACT_BLURB, CONTACT_CHANNELS, CONTACT_HEADING, EXPERIENCE,
    FOOTER_NOTE, HERO_CTA_PRIMARY, HERO_CTA_SECONDARY, HERO_KICKER, HERO_TAGLINE, HERO_TITLE,
    MARQUEE, NAV_ITEMS, PROJECTS, SKILL_GROUPS,
};
use super::dom;

pub fn navbar(document: &Document) -> Result<Element, JsValue> {
    let header = dom::el(document, "header", "site-nav")?;
    let nav = dom::el(document, "nav", "site-nav-inner")?;

    let brand = dom::link(document, "brand", "#home", BRAND)?;
    let suffix = dom::el_text(document, "span", "brand-accent", BRAND_SUFFIX)?;
    brand.append_child(&suffix)?;
    nav.append_child(&brand)?;

    let list = dom::el(document, "ul", "nav-links")?;
    for item in &NAV_ITEMS {
        let li = dom::el(document, "li", "")?;
        li.append_child(&dom::link(document, "nav-link", item.href, item.label)?)?;
        list.append_child(&li)?;
    }
    nav.append_child(&list)?;
    header.append_child(&nav)?;
    Ok(header)
}

/// The hero section also hosts the trail canvas; the canvas is returned so
/// the caller can start the effect on it.
pub fn hero(document: &Document) -> Result<(Element, HtmlCanvasElement), JsValue> {
    let section = dom::el(document, "section", "hero")?;
    section.set_id("home");

    let canvas: HtmlCanvasElement = dom::el(document, "canvas", "trail-canvas")?.dyn_into()?;
    canvas.set_attribute("aria-hidden", "true")?;
    section.append_child(&canvas)?;

    let copy = dom::el(document, "div", "hero-copy")?;
    copy.append_child(&dom::el_text(document, "p", "hero-kicker", HERO_KICKER)?)?;
    copy.append_child(&dom::el_text(document, "h1", "hero-title", HERO_TITLE)?)?;
    copy.append_child(&dom::el_text(document, "p", "hero-tagline", HERO_TAGLINE)?)?;

    let actions = dom::el(document, "div", "hero-actions")?;
    let (label, href) = HERO_CTA_PRIMARY;
    actions.append_child(&dom::link(document, "button primary", href, label)?)?;
    let (label, href) = HERO_CTA_SECONDARY;
    actions.append_child(&dom::link(document, "button ghost", href, label)?)?;
    copy.append_child(&actions)?;

    section.append_child(&copy)?;
    Ok((section, canvas))
}

pub fn marquee(document: &Document) -> Result<Element, JsValue> {
    let section = dom::el(document, "section", "marquee")?;
    let track = dom::el(document, "div", "marquee-track")?;
    // Two copies back to back so the CSS loop has no visible seam.
    for _ in 0..2 {
        for item in MARQUEE {
            track.append_child(&dom::el_text(document, "span", "marquee-item", item)?)?;
        }
    }
    section.append_child(&track)?;
    Ok(section)
}

pub fn skills(document: &Document) -> Result<Element, JsValue> {
    let section = dom::el(document, "section", "skills")?;
    section.set_id("skills");
    section.append_child(&dom::el_text(document, "h2", "section-title", "Skills")?)?;

    let grid = dom::el(document, "div", "skills-grid")?;
    for group in &SKILL_GROUPS {
        let card = dom::el(document, "div", "skill-group")?;
        card.append_child(&dom::el_text(document, "h3", "skill-group-title", group.title)?)?;
        let list = dom::el(document, "ul", "skill-list")?;
        for skill in group.skills {
            let li = dom::el(document, "li", "skill")?;
            li.append_child(&dom::el_text(document, "span", "skill-name", skill.name)?)?;
            li.append_child(&dom::el_text(document, "span", "skill-blurb", skill.blurb)?)?;
            list.append_child(&li)?;
        }
        card.append_child(&list)?;
        grid.append_child(&card)?;
    }
    section.append_child(&grid)?;
    Ok(section)
}

pub fn timeline(document: &Document) -> Result<Element, JsValue> {
    let section = dom::el(document, "section", "timeline")?;
    section.set_id("work");
    section.append_child(&dom::el_text(document, "h2", "section-title", "Work")?)?;

    let list = dom::el(document, "ol", "timeline-list")?;
    for entry in &EXPERIENCE {
        let item = dom::el(document, "li", "timeline-entry")?;
        let head = dom::el(document, "div", "timeline-head")?;
        head.append_child(&dom::el_text(document, "h3", "timeline-role", entry.role)?)?;
        head.append_child(&dom::el_text(document, "span", "timeline-period", entry.period)?)?;
        item.append_child(&head)?;
        item.append_child(&dom::el_text(document, "p", "timeline-company", entry.company)?)?;
        item.append_child(&dom::el_text(document, "p", "timeline-summary", entry.summary)?)?;
        list.append_child(&item)?;
    }
    section.append_child(&list)?;
    Ok(section)
}

pub fn projects(document: &Document) -> Result<Element, JsValue> {
    let section = dom::el(document, "section", "projects")?;
    section.set_id("projects");
    section.append_child(&dom::el_text(document, "h2", "section-title", "Projects")?)?;

    let grid = dom::el(document, "div", "projects-grid")?;
    for project in &PROJECTS {
        let card = dom::el(document, "article", "project-card")?;
        card.append_child(&dom::link(document, "project-title", project.url, project.title)?)?;
        card.append_child(&dom::el_text(document, "p", "project-blurb", project.blurb)?)?;
        let tags = dom::el(document, "ul", "project-stack")?;
        for tech in project.stack {
            tags.append_child(&dom::el_text(document, "li", "project-tag", tech)?)?;
        }
        card.append_child(&tags)?;
        grid.append_child(&card)?;
    }
    section.append_child(&grid)?;
    Ok(section)
}

pub fn contact(document: &Document) -> Result<Element, JsValue> {
    let section = dom::el(document, "section", "contact")?;
    section.set_id("contact");
    section.append_child(&dom::el_text(document, "h2", "section-title", CONTACT_HEADING)?)?;
    section.append_child(&dom::el_text(document, "p", "contact-blurb", CONTACT_BLURB)?)?;

    let list = dom::el(document, "ul", "contact-channels")?;
    for channel in &CONTACT_CHANNELS {
        let li = dom::el(document, "li", "contact-channel")?;
        li.append_child(&dom::el_text(document, "span", "contact-label", channel.label)?)?;
        li.append_child(&dom::link(document, "contact-value", channel.href, channel.value)?)?;
        list.append_child(&li)?;
    }
    section.append_child(&list)?;
    Ok(section)
}

pub fn floating_chat(document: &Document) -> Result<Element, JsValue> {
    let link = dom::link(document, "floating-chat", CHAT_HREF, "Chat")?;
    link.set_attribute("aria-label", "Chat on Telegram")?;
    Ok(link)
}

pub fn footer(document: &Document) -> Result<Element, JsValue> {
    let footer = dom::el(document, "footer", "site-footer")?;
    footer.append_child(&dom::el_text(document, "p", "footer-note", FOOTER_NOTE)?)?;
    Ok(footer)
}

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::behavior::contact::ContactSubmission;
use crate::behavior::reveal::{RevealProbe, RevealSnapshot};
use crate::behavior::{self, Command, PageEvent, PageState};
use crate::config::{self, SiteConfig};
use crate::error::{describe_js, DomError};

/// Wires the page's markup to [`behavior::dispatch`] and carries out the resulting commands.
pub struct PageController {
    inner: Rc<Inner>,
}

struct Inner {
    config: SiteConfig,
    window: Window,
    document: Document,
    header: Option<HtmlElement>,
    form: Option<HtmlFormElement>,
    status: Option<HtmlElement>,
    state: RefCell<PageState>,
    // Result of the latest `.reveal` query; `ActivateReveal` indices point into it.
    reveal_elements: RefCell<Vec<Element>>,
    // Single slot: storing a new timeout drops, and so cancels, the previous one.
    status_timer: RefCell<Option<Timeout>>,
}

impl PageController {
    pub fn install() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let config = load_config(&document);

        let header = find_html(&document, &config.selectors.header);
        let status = find_html(&document, &config.selectors.form_status);
        let form = document
            .query_selector(&config.selectors.contact_form)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());

        let controller = Self {
            inner: Rc::new(Inner {
                config,
                window,
                document,
                header,
                form,
                status,
                state: RefCell::new(PageState::default()),
                reveal_elements: RefCell::new(Vec::new()),
                status_timer: RefCell::new(None),
            }),
        };

        controller.listen_scroll()?;
        controller.listen_anchors()?;
        if let Err(e) = controller.listen_contact_form() {
            warn!("Contact form disabled: {}", e);
        }
        controller.listen_portfolio()?;
        controller.listen_load()?;

        Ok(controller)
    }

    fn listen_scroll(&self) -> Result<(), DomError> {
        let inner = Rc::clone(&self.inner);
        let scroll_callback = Closure::wrap(Box::new(move || {
            let event = PageEvent::Scrolled {
                scroll_y: inner.page_y_offset(),
                reveals: inner.reveal_snapshot(),
            };
            inner.handle(event);
        }) as Box<dyn FnMut()>);

        self.inner
            .window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        scroll_callback.forget();
        Ok(())
    }

    fn listen_anchors(&self) -> Result<(), DomError> {
        let anchors = query_all(&self.inner.document, &self.inner.config.selectors.anchor)?;
        let count = anchors.len();

        for anchor in anchors {
            let inner = Rc::clone(&self.inner);
            let link = anchor.clone();
            let click_callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let target_top = inner.resolve_fragment(&href);
                let page_y_offset = inner.page_y_offset();
                inner.handle(PageEvent::AnchorClicked { href, target_top, page_y_offset });
            }) as Box<dyn FnMut(web_sys::Event)>);

            anchor.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())?;
            click_callback.forget();
        }

        info!("Smooth scrolling attached to {} anchors", count);
        Ok(())
    }

    fn listen_contact_form(&self) -> Result<(), DomError> {
        let form = self
            .inner
            .form
            .clone()
            .ok_or_else(|| DomError::MissingElement(self.inner.config.selectors.contact_form.clone()))?;

        let inner = Rc::clone(&self.inner);
        let submit_callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let submission = inner.read_submission();
            let submit_label = inner
                .submit_button()
                .and_then(|button| button.text_content())
                .unwrap_or_default();
            inner.handle(PageEvent::FormSubmitted { submission, submit_label });
        }) as Box<dyn FnMut(web_sys::Event)>);

        form.add_event_listener_with_callback("submit", submit_callback.as_ref().unchecked_ref())?;
        submit_callback.forget();
        info!("Contact form handler installed");
        Ok(())
    }

    fn listen_portfolio(&self) -> Result<(), DomError> {
        let items = query_all(&self.inner.document, &self.inner.config.selectors.portfolio_item)?;

        for (index, item) in items.into_iter().enumerate() {
            let inner = Rc::clone(&self.inner);
            let click_callback = Closure::wrap(Box::new(move || {
                inner.handle(PageEvent::PortfolioItemClicked { index });
            }) as Box<dyn FnMut()>);

            item.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref())?;
            click_callback.forget();
        }
        Ok(())
    }

    fn listen_load(&self) -> Result<(), DomError> {
        let inner = Rc::clone(&self.inner);
        let load_callback = Closure::wrap(Box::new(move || {
            let event = PageEvent::WindowLoaded { reveals: inner.reveal_snapshot() };
            inner.handle(event);
        }) as Box<dyn FnMut()>);
        self.inner
            .window
            .add_event_listener_with_callback("load", load_callback.as_ref().unchecked_ref())?;
        load_callback.forget();

        // The module may start after DOMContentLoaded has already fired.
        if self.inner.document.ready_state() != "loading" {
            self.inner.content_loaded();
            return Ok(());
        }

        let inner = Rc::clone(&self.inner);
        let ready_callback = Closure::wrap(Box::new(move || {
            inner.content_loaded();
        }) as Box<dyn FnMut()>);
        self.inner
            .document
            .add_event_listener_with_callback("DOMContentLoaded", ready_callback.as_ref().unchecked_ref())?;
        ready_callback.forget();
        Ok(())
    }
}

impl Inner {
    /// Runs `event` and any follow-up events produced while executing its commands.
    fn handle(self: &Rc<Self>, event: PageEvent) {
        let mut pending = VecDeque::from([event]);
        while let Some(event) = pending.pop_front() {
            let state = self.state.take();
            let (next, commands) = behavior::dispatch(&self.config, state, event);
            *self.state.borrow_mut() = next;

            for command in commands {
                if let Some(follow_up) = self.execute(command) {
                    pending.push_back(follow_up);
                }
            }
        }
    }

    fn execute(self: &Rc<Self>, command: Command) -> Option<PageEvent> {
        match command {
            Command::ActivateReveal(index) => {
                if let Some(element) = self.reveal_elements.borrow().get(index) {
                    let _ = element.class_list().add_1(&self.config.reveal_active_class);
                }
            }
            Command::StyleHeader(style) => {
                if let Some(header) = &self.header {
                    let css = header.style();
                    let _ = css.set_property("background", style.background());
                    let _ = css.set_property("box-shadow", style.box_shadow());
                }
            }
            Command::ScrollTo { top, smooth } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Command::ShowStatus(message) => {
                if let Some(status) = &self.status {
                    status.set_text_content(Some(&message.text));
                    status.set_class_name(&message.class_name());
                    let _ = status.style().set_property("display", "block");
                }
            }
            Command::ScheduleStatusHide { generation, delay_ms } => {
                let weak = Rc::downgrade(self);
                let timeout = Timeout::new(delay_ms, move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.handle(PageEvent::StatusHideElapsed { generation });
                    }
                });
                *self.status_timer.borrow_mut() = Some(timeout);
            }
            Command::HideStatus => {
                if let Some(status) = &self.status {
                    let _ = status.style().set_property("display", "none");
                }
            }
            Command::SetSubmitBusy { label } => self.set_submit(&label, true),
            Command::RestoreSubmit { label } => self.set_submit(&label, false),
            Command::OpenMailClient { uri } => {
                debug!("Opening mail client");
                let outcome = self.window.location().set_href(&uri).map_err(|e| describe_js(&e));
                return Some(PageEvent::MailHandoffFinished(outcome));
            }
            Command::ResetForm => {
                if let Some(form) = &self.form {
                    form.reset();
                }
            }
            Command::HideHero => {
                if let Some(hero) = self.hero() {
                    let _ = hero.style().set_property("opacity", "0");
                }
            }
            Command::ScheduleHeroFade { delay_ms } => {
                let weak = Rc::downgrade(self);
                Timeout::new(delay_ms, move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.handle(PageEvent::HeroFadeDue);
                    }
                })
                .forget();
            }
            Command::FadeInHero { transition } => {
                if let Some(hero) = self.hero() {
                    let css = hero.style();
                    let _ = css.set_property("transition", &transition);
                    let _ = css.set_property("opacity", "1");
                }
            }
            Command::LogDiagnostic(line) => info!("{}", line),
        }
        None
    }

    fn content_loaded(self: &Rc<Self>) {
        let event = PageEvent::ContentLoaded {
            hero_present: self.hero().is_some(),
            reveals: self.reveal_snapshot(),
        };
        self.handle(event);
    }

    fn reveal_snapshot(&self) -> RevealSnapshot {
        let elements = query_all(&self.document, &self.config.selectors.reveal).unwrap_or_else(|e| {
            warn!("Reveal query failed: {}", e);
            Vec::new()
        });
        let probes = elements
            .iter()
            .map(|element| RevealProbe {
                top: element.get_bounding_client_rect().top(),
                active: element.class_list().contains(&self.config.reveal_active_class),
            })
            .collect();
        *self.reveal_elements.borrow_mut() = elements;

        RevealSnapshot { viewport_height: self.viewport_height(), probes }
    }

    fn resolve_fragment(&self, href: &str) -> Option<f64> {
        let selector = behavior::anchor::fragment_selector(href)?;
        // querySelector throws on selectors like "#1st"; that counts as no target.
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(|target| target.get_bounding_client_rect().top())
    }

    fn read_submission(&self) -> ContactSubmission {
        let fields = &self.config.fields;
        ContactSubmission {
            name: self.field_value(&fields.name),
            email: self.field_value(&fields.email),
            phone: self.field_value(&fields.phone),
            message: self.field_value(&fields.message),
        }
    }

    fn field_value(&self, id: &str) -> String {
        let Some(element) = self.document.get_element_by_id(id) else {
            warn!("Contact field #{} not found", id);
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        self.form
            .as_ref()?
            .query_selector(&self.config.selectors.submit_button)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    }

    fn set_submit(&self, label: &str, disabled: bool) {
        match self.submit_button() {
            Some(button) => {
                button.set_text_content(Some(label));
                button.set_disabled(disabled);
            }
            None => warn!("Submit button not found"),
        }
    }

    fn hero(&self) -> Option<HtmlElement> {
        self.document
            .query_selector(&self.config.selectors.hero_text)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn page_y_offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(block) = document.get_element_by_id(config::CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(config) => {
            info!("Loaded site config from #{}", config::CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            warn!("Ignoring malformed site config: {}", e);
            SiteConfig::default()
        }
    }
}

fn find_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    let found = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        warn!("No element matches {}", selector);
    }
    found
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

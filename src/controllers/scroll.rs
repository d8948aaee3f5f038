//! Scroll progress bar and back-to-top button.
//!
//! Scroll events are coalesced through a `FrameGate`, so the DOM is read and
//! written at most once per animation frame however fast the page scrolls.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SiteConfig;
use crate::error::{JsResultExt, UiError};
use crate::state::scroll::{self, ScrollMetrics};
use crate::util::dom;
use crate::util::frame_gate::FrameGate;

struct ScrollPainter {
    window: Window,
    doc: Document,
    progress: Option<HtmlElement>,
    back_to_top: Option<Element>,
    threshold_px: f64,
}

impl ScrollPainter {
    fn metrics(&self) -> Result<ScrollMetrics, UiError> {
        let root = self.doc.document_element().ok_or(UiError::missing("html"))?;
        let scroll_top = self.window.scroll_y().context("window.scrollY")?;
        let viewport_height = self
            .window
            .inner_height()
            .context("window.innerHeight")?
            .as_f64()
            .unwrap_or_default();
        Ok(ScrollMetrics {
            scroll_top: if scroll_top > 0.0 { scroll_top } else { f64::from(root.scroll_top()) },
            scroll_height: f64::from(root.scroll_height()),
            viewport_height,
        })
    }

    fn paint(&self) {
        let metrics = match self.metrics() {
            Ok(metrics) => metrics,
            Err(err) => {
                log::warn!("scroll metrics unavailable: {err}");
                return;
            }
        };
        let view = scroll::view(metrics, self.threshold_px);
        if let Some(bar) = &self.progress {
            dom::warn_on_err(
                bar.style()
                    .set_property("width", &scroll::width_style(view.percent))
                    .context("style.width"),
            );
        }
        if let Some(button) = &self.back_to_top {
            dom::set_class(button, "show", view.show_back_to_top);
        }
    }
}

pub fn install(window: &Window, doc: &Document, config: &SiteConfig) -> Result<(), UiError> {
    let progress = match doc.get_element_by_id("scroll-progress").map(JsCast::dyn_into::<HtmlElement>) {
        Some(Ok(bar)) => Some(bar),
        _ => None,
    };
    let back_to_top = dom::query_opt(doc, ".back-to-top");
    if progress.is_none() && back_to_top.is_none() {
        return Err(UiError::missing("#scroll-progress"));
    }

    let painter = Rc::new(ScrollPainter {
        window: window.clone(),
        doc: doc.clone(),
        progress,
        back_to_top: back_to_top.clone(),
        threshold_px: config.back_to_top_threshold_px,
    });
    painter.paint();

    let gate = Rc::new(RefCell::new(FrameGate::default()));
    {
        let painter = Rc::clone(&painter);
        dom::listen(window, "scroll", move |_| {
            if !gate.borrow_mut().request() {
                return;
            }
            let (frame_gate, frame_painter) = (Rc::clone(&gate), Rc::clone(&painter));
            let scheduled = dom::request_frame(move || {
                frame_gate.borrow_mut().complete();
                frame_painter.paint();
            });
            if let Err(err) = scheduled {
                log::warn!("{err}; painting scroll state synchronously");
                gate.borrow_mut().complete();
                painter.paint();
            }
        })?;
    }

    if let Some(button) = back_to_top {
        let window = window.clone();
        dom::listen(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}

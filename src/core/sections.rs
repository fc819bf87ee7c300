//! Page sections, the navigation bar and scroll-position tracking.
//!
//! The page highlights one navigation entry at a time. On every scroll event
//! the sections are checked in page order and the first one whose bounding box
//! spans the measurement line becomes active. [`ScrollSpy`] is that rule in
//! Rust; [`scroll_spy_script`] ships the same rule to the browser.

use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Research,
    Projects,
    Experience,
    Skills,
    Contact,
}

impl Section {
    /// Scroll-spy order, top of the page first.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Research,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ];

    /// Entries in the navigation bar. The hero has none.
    pub const NAV: [Section; 6] = [
        Section::About,
        Section::Research,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Research => "research",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Research => "Research",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

/// Viewport-relative vertical extent of a section element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn spans(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    offset: f64,
    active: Section,
}

impl ScrollSpy {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            active: Section::About,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    /// Re-evaluates the active section after a scroll event.
    ///
    /// `locate` returns the current bounding box of a section, or `None` when
    /// the element is not on the page. If no section spans the offset the
    /// previous active section is kept.
    pub fn observe<F>(&mut self, mut locate: F) -> Section
    where
        F: FnMut(Section) -> Option<BoundingBox>,
    {
        let current = Section::ALL.into_iter().find(|&section| {
            locate(section)
                .map(|rect| rect.spans(self.offset))
                .unwrap_or(false)
        });

        if let Some(section) = current {
            if section != self.active {
                tracing::trace!(from = self.active.id(), to = section.id(), "active section changed");
            }
            self.active = section;
        }
        self.active
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(crate::config::site_config::DEFAULT_SCROLL_OFFSET)
    }
}

/// Browser-side scroll spy. Toggles the `active` class on every element
/// carrying a `data-section` attribute.
pub fn scroll_spy_script(offset: f64) -> Result<String> {
    let ids: Vec<&str> = Section::ALL.iter().map(|section| section.id()).collect();
    let ids = serde_json::to_string(&ids)?;

    Ok(format!(
        r#"(function () {{
  var sections = {ids};
  var offset = {offset};
  function update() {{
    var current = sections.find(function (id) {{
      var element = document.getElementById(id);
      if (!element) {{
        return false;
      }}
      var rect = element.getBoundingClientRect();
      return rect.top <= offset && rect.bottom >= offset;
    }});
    if (!current) {{
      return;
    }}
    document.querySelectorAll("[data-section]").forEach(function (link) {{
      link.classList.toggle("active", link.getAttribute("data-section") === current);
    }});
  }}
  window.addEventListener("scroll", update);
}})();"#
    ))
}

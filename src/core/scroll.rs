// Scroll-driven page behaviour: header logo theme, lazy image swaps and
// in-page link targets.

use crate::constants::LAZY_PRELOAD_FRACTION;

/// Attribute on `#headerNav` that selects the logo variant.
pub const LOGO_ATTR: &str = "data-logo-active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionTheme {
    Light,
    Dark,
    Invert,
}

impl SectionTheme {
    /// Parse a `data-section` value.
    pub fn from_attr(attr: &str) -> Option<Self> {
        match attr {
            "light" => Some(SectionTheme::Light),
            "dark" => Some(SectionTheme::Dark),
            "invert" => Some(SectionTheme::Invert),
            _ => None,
        }
    }

    /// Logo variant readable on top of this section.
    pub fn logo(self) -> &'static str {
        match self {
            SectionTheme::Light => "dark",
            SectionTheme::Dark => "light",
            SectionTheme::Invert => "invert",
        }
    }
}

/// Tracks which sections sit under the header marker and the theme the
/// header should follow.
///
/// A section without a `data-section` value inherits the last theme. An
/// unknown value clears it, and the logo is left alone until a known theme
/// comes back.
#[derive(Clone, Debug)]
pub struct ThemeTracker {
    theme: Option<SectionTheme>,
    active: Vec<bool>,
}

impl ThemeTracker {
    pub fn new(sections: usize) -> Self {
        Self {
            theme: Some(SectionTheme::Dark),
            active: vec![false; sections],
        }
    }

    #[inline]
    pub fn theme(&self) -> Option<SectionTheme> {
        self.theme
    }

    /// Section `index` moved under (or out from under) the marker. Returns
    /// the logo variant to apply when it just became active.
    pub fn update(&mut self, index: usize, attr: Option<&str>, active: bool) -> Option<&'static str> {
        let slot = self.active.get_mut(index)?;
        let was_active = std::mem::replace(slot, active);
        if !active || was_active {
            return None;
        }
        if let Some(attr) = attr {
            self.theme = SectionTheme::from_attr(attr.trim());
        }
        self.theme.map(SectionTheme::logo)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyState {
    Waiting,
    Loading,
    Swapped,
}

/// One `.lazy` image waiting for its real source.
#[derive(Clone, Debug)]
pub struct LazyImage {
    src: String,
    state: LazyState,
}

impl LazyImage {
    /// `None` when the image has no usable `data-src`.
    pub fn from_data_src(data_src: Option<&str>) -> Option<Self> {
        let src = data_src?.trim();
        if src.is_empty() {
            return None;
        }
        Some(Self {
            src: src.to_string(),
            state: LazyState::Waiting,
        })
    }

    #[inline]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[inline]
    pub fn state(&self) -> LazyState {
        self.state
    }

    /// The image came into range. Yields the source to preload, once.
    pub fn begin_load(&mut self) -> Option<&str> {
        if self.state != LazyState::Waiting {
            return None;
        }
        self.state = LazyState::Loading;
        Some(&self.src)
    }

    /// The preload finished. Returns whether the swap should run now.
    pub fn finish_load(&mut self) -> bool {
        if self.state != LazyState::Loading {
            return false;
        }
        self.state = LazyState::Swapped;
        true
    }
}

/// Observer margin that starts a preload `LAZY_PRELOAD_FRACTION` of the
/// image's height before it reaches the viewport bottom.
pub fn preload_margin(image_height: f64) -> String {
    let px = (image_height.max(0.0) * LAZY_PRELOAD_FRACTION).round() as i64;
    format!("0px 0px {}px 0px", px)
}

/// Absolute box that covers an image inside its parent, as CSS properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverBox {
    pub top: i32,
    pub left: i32,
    pub width: i32,
    pub height: i32,
}

impl CoverBox {
    pub fn styles(&self) -> [(&'static str, String); 5] {
        [
            ("position", "absolute".to_string()),
            ("top", format!("{}px", self.top)),
            ("left", format!("{}px", self.left)),
            ("width", format!("{}px", self.width)),
            ("height", format!("{}px", self.height)),
        ]
    }
}

/// Element id an in-page link points at: the non-empty fragment of `href`.
pub fn scroll_target(href: &str) -> Option<&str> {
    let (_, fragment) = href.trim().split_once('#')?;
    (!fragment.is_empty()).then_some(fragment)
}

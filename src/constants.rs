// Site-wide tuning: hover-reveal feel, slide and intro timings, loader and
// toast timings, the units tool range and form endpoints.

// Fraction of the remaining gap each channel closes per frame
pub const CHANNEL_SMOOTHING: f32 = 0.08;

// Horizontal pointer distance is clamped to [0, POINTER_DISTANCE_MAX] px
pub const POINTER_DISTANCE_MAX: f32 = 100.0;

// Tilt at full horizontal speed (degrees)
pub const ROTATION_MAX_DEG: f32 = 120.0;

// Panel filter brightness at rest and at full horizontal speed
pub const BRIGHTNESS_REST: f32 = 1.0;
pub const BRIGHTNESS_MAX: f32 = 4.0;

// Reveal/hide slide
pub const SLIDE_DURATION_SEC: f32 = 0.2;
pub const SLIDE_OFFSET_PCT: f32 = 100.0;
pub const PANEL_Z_REST: i32 = 1;

// Menu text intro
pub const INTRO_DURATION_SEC: f32 = 1.2;
pub const INTRO_STAGGER_SEC: f32 = 0.06;
pub const INTRO_OFFSET_PCT: f32 = 100.0;

// Loading screen
pub const LOADER_FAKE_TARGET: f32 = 90.0;
pub const LOADER_FAKE_DURATION_SEC: f32 = 3.0;
pub const LOADER_FINISH_DURATION_SEC: f32 = 1.0;
pub const LOADER_FADE_DURATION_SEC: f32 = 1.0;
pub const MATRIX_COLUMN_PX: f64 = 20.0;
pub const MATRIX_TICK_MS: u32 = 70;
pub const MATRIX_RESET_BASE_PX: f64 = 100.0;
pub const MATRIX_RESET_SPREAD_PX: f64 = 10_000.0;

// Toasts
pub const TOAST_DEFAULT_DURATION_MS: u32 = 5000;
pub const TOAST_FADE_MS: u32 = 150;

// Units tool
pub const UNITS_DEFAULT_BASE_PX: u32 = 16;
pub const UNITS_MAX_PX: u32 = 200;
pub const COPY_TOOLTIP_MS: u32 = 1000;

// Forms
pub const MESSAGE_MIN_CHARS: usize = 5;
pub const CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const NEWSLETTER_ENDPOINT: &str = "/api/subscribe";
pub const CONTACT_ACCESS_KEY: &str = match option_env!("SITE_CONTACT_ACCESS_KEY") {
    Some(key) => key,
    None => "",
};

// Scroll-driven page behaviour
// Header theme follows the section crossing a band 2% below the viewport top
pub const SECTION_MARKER_MARGIN: &str = "-2% 0px -97% 0px";
// Lazy images start loading half their own height before entering the viewport
pub const LAZY_PRELOAD_FRACTION: f64 = 0.5;
pub const LAZY_FADE_DURATION_SEC: f32 = 0.5;
pub const SCROLL_LINK_OFFSET_PX: u32 = 100;
// In-page links scroll smoothly only on desktop widths
pub const SCROLL_LINKS_MIN_WIDTH_PX: i32 = 992;

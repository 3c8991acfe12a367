//! Target-independent logic: widget attachment, view state and site content

pub mod accordion;
pub mod attacher;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod error;
pub mod media;
pub mod scroll;
pub mod settings;
pub mod timer;
pub mod vendor;

pub use accordion::Accordion;
pub use attacher::{AttachPolicy, AttachSession, AttachState, WidgetAttacher, WidgetHost};
pub use carousel::Carousel;
pub use error::{ConfigError, WidgetError};
pub use media::{MediaCommand, Playback, PlaybackRate, PointerMode};
pub use settings::SiteSettings;
pub use timer::{PollTimer, TimerHandle};
pub use vendor::{
    BookingEvent, ContainerBinding, ContainerTarget, RenderOptions, VendorApi, WidgetSpec,
};
